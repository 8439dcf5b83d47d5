use std::path::PathBuf;

use serde_json::json;
use spvil_core::{InstructionDesc, InstructionTable};

use super::fail;
use super::loader::{load_table, table_or_builtin};

pub struct TableArgs {
    pub op_name: Option<String>,
    pub table_path: Option<PathBuf>,
    pub json: bool,
}

pub fn run(args: TableArgs) {
    let custom = load_table(args.table_path.as_deref()).unwrap_or_else(|msg| fail(msg));
    let table = table_or_builtin(custom.as_ref());

    let entries = select(table, args.op_name.as_deref()).unwrap_or_else(|msg| fail(msg));
    if args.json {
        match render_json(&entries) {
            Ok(text) => println!("{text}"),
            Err(msg) => fail(msg),
        }
    } else {
        print!("{}", render_text(&entries));
    }
}

/// Every entry, or the one named `op_name`.
pub fn select<'t>(
    table: &'t InstructionTable,
    op_name: Option<&str>,
) -> Result<Vec<&'t InstructionDesc>, String> {
    match op_name {
        None => Ok(table.iter().collect()),
        Some(name) => table
            .get(name)
            .map(|desc| vec![desc])
            .ok_or_else(|| format!("unknown instruction `{name}`")),
    }
}

/// `OpLoad (61, Body): %type %result Id, MemoryAccess?`, one per line.
pub fn render_text(entries: &[&InstructionDesc]) -> String {
    let mut out = String::new();
    for desc in entries {
        out.push_str(&format!("{} ({}, {:?})", desc.name, desc.opcode, desc.class));
        let mut fields = Vec::new();
        if desc.has_type {
            fields.push("%type".to_string());
        }
        if desc.has_result {
            fields.push("%result".to_string());
        }
        let operands: Vec<_> = desc.operands.iter().map(|k| k.to_string()).collect();
        if !operands.is_empty() {
            fields.push(operands.join(", "));
        }
        if !fields.is_empty() {
            out.push_str(": ");
            out.push_str(&fields.join(" "));
        }
        out.push('\n');
    }
    out
}

pub fn render_json(entries: &[&InstructionDesc]) -> Result<String, String> {
    let value: Vec<_> = entries
        .iter()
        .map(|desc| {
            json!({
                "name": desc.name,
                "opcode": desc.opcode,
                "class": desc.class,
                "type": desc.has_type,
                "result": desc.has_result,
                "operands": desc.operands.iter().map(|k| k.to_string()).collect::<Vec<_>>(),
            })
        })
        .collect();
    serde_json::to_string_pretty(&value).map_err(|e| format!("failed to write JSON: {}", e))
}
