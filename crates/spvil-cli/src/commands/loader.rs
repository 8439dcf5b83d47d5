use std::fs;
use std::io::{self, Read};
use std::path::Path;

use spvil_core::InstructionTable;

/// Read a binary module; `-` reads stdin.
pub fn load_module_bytes(path: &Path) -> Result<Vec<u8>, String> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        return Ok(buf);
    }
    fs::read(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}

/// Load a JSON instruction table, or `None` for the built-in one.
pub fn load_table(path: Option<&Path>) -> Result<Option<InstructionTable>, String> {
    let Some(path) = path else {
        return Ok(None);
    };
    let json = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    let table = InstructionTable::from_json(&json)
        .map_err(|e| format!("invalid table '{}': {}", path.display(), e))?;
    log::info!("loaded {} instructions from {}", table.len(), path.display());
    Ok(Some(table))
}

/// The loaded table when there is one, the built-in table otherwise.
pub fn table_or_builtin(custom: Option<&InstructionTable>) -> &InstructionTable {
    custom.unwrap_or(InstructionTable::spirv())
}
