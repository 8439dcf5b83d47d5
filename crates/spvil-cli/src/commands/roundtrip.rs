use std::path::PathBuf;

use spvil_bytecode::{Decoder, EmitOptions, Emitter, Header, words_from_bytes};
use spvil_core::InstructionTable;

use super::fail;
use super::loader::{load_module_bytes, load_table, table_or_builtin};

pub struct RoundtripArgs {
    pub module_path: PathBuf,
    pub table_path: Option<PathBuf>,
}

pub fn run(args: RoundtripArgs) {
    let custom = load_table(args.table_path.as_deref()).unwrap_or_else(|msg| fail(msg));
    let table = table_or_builtin(custom.as_ref());
    let bytes = load_module_bytes(&args.module_path).unwrap_or_else(|msg| fail(msg));

    match roundtrip(&bytes, table) {
        Ok(words) => println!("ok: {} words", words),
        Err(msg) => fail(format!("{}: {}", args.module_path.display(), msg)),
    }
}

/// Decode `bytes`, encode the module again and compare word by word.
///
/// The generator word is carried over, so only a real encoding difference
/// fails. Returns the number of words compared.
pub fn roundtrip(bytes: &[u8], table: &InstructionTable) -> Result<usize, String> {
    let words = words_from_bytes(bytes).map_err(|e| e.to_string())?;
    let header = Header::from_words(&words).map_err(|e| e.to_string())?;
    let module = Decoder::with_table(table)
        .decode_words(&words)
        .map_err(|e| e.to_string())?;

    let options = EmitOptions {
        generator: header.generator,
    };
    let again = Emitter::with_table(table)
        .options(options)
        .words(&module)
        .map_err(|e| e.to_string())?;

    match first_difference(&words, &again) {
        None => Ok(words.len()),
        Some(offset) => Err(format!(
            "re-encoded stream differs at word {}: {} != {}",
            offset,
            show_word(words.get(offset)),
            show_word(again.get(offset)),
        )),
    }
}

/// Offset of the first differing word, or of the end of the shorter stream.
pub fn first_difference(a: &[u32], b: &[u32]) -> Option<usize> {
    let common = a.iter().zip(b).position(|(x, y)| x != y);
    match common {
        Some(offset) => Some(offset),
        None if a.len() != b.len() => Some(a.len().min(b.len())),
        None => None,
    }
}

fn show_word(word: Option<&u32>) -> String {
    match word {
        Some(w) => format!("{w:#010x}"),
        None => "end of stream".to_string(),
    }
}
