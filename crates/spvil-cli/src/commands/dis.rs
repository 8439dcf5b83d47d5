use std::path::PathBuf;

use spvil_bytecode::Decoder;
use spvil_core::Colors;
use spvil_text::{TextMode, TextOptions, encode_text};

use super::fail;
use super::loader::{load_module_bytes, load_table, table_or_builtin};

pub struct DisArgs {
    pub module_path: PathBuf,
    pub table_path: Option<PathBuf>,
    pub raw: bool,
    pub color: bool,
}

pub fn run(args: DisArgs) {
    let custom = load_table(args.table_path.as_deref()).unwrap_or_else(|msg| fail(msg));
    let table = table_or_builtin(custom.as_ref());
    let bytes = load_module_bytes(&args.module_path).unwrap_or_else(|msg| fail(msg));

    let module = match Decoder::with_table(table).decode(&bytes) {
        Ok(module) => module,
        Err(e) => fail(format!("{}: {}", args.module_path.display(), e)),
    };

    let colors = Colors::new(args.color);
    let options = TextOptions {
        mode: if args.raw {
            TextMode::Raw
        } else {
            TextMode::Pretty
        },
        colors,
    };
    let output = match encode_text(&module, &options) {
        Ok(output) => output,
        Err(e) => fail(e),
    };

    eprint!("{}", output.diagnostics.render(colors));
    print!("{}", output.text);
}
