//! JSON loading for alternative instruction tables.
//!
//! Instructions are an object keyed by mnemonic, in table order:
//!
//! ```json
//! {
//!   "version": 65536,
//!   "instructions": {
//!     "OpName": { "opcode": 5, "class": "Debug", "operands": ["Id", "LiteralString"] }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use super::types::{InstructionDesc, InstructionTable, OpClass, OperandKind};

/// Error while loading or validating an instruction table.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown operand kind `{0}`")]
    UnknownOperandKind(String),

    #[error("unknown {kind} enumerant `{name}`")]
    UnknownEnumerant { kind: &'static str, name: String },

    #[error("duplicate instruction name `{0}`")]
    DuplicateName(String),

    #[error("duplicate opcode {0}")]
    DuplicateOpcode(u16),

    #[error("`{0}`: variable operand kind must be last")]
    VariableKindNotLast(String),
}

impl InstructionTable {
    /// Parse and validate a table from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let raw: RawTable = serde_json::from_str(json)?;

        let mut instructions = Vec::with_capacity(raw.instructions.len());
        for (name, inst) in raw.instructions {
            let operands = inst
                .operands
                .iter()
                .map(|k| OperandKind::from_name(k))
                .collect::<Result<Vec<_>, _>>()?;
            instructions.push(InstructionDesc {
                name,
                opcode: inst.opcode,
                has_type: inst.has_type,
                has_result: inst.has_result,
                class: inst.class,
                operands,
            });
        }

        Self::new(raw.version, instructions)
    }
}

#[derive(Debug, Deserialize)]
struct RawTable {
    version: u32,
    instructions: IndexMap<String, RawInstruction>,
}

#[derive(Debug, Deserialize)]
struct RawInstruction {
    opcode: u16,
    #[serde(default, rename = "type")]
    has_type: bool,
    #[serde(default, rename = "result")]
    has_result: bool,
    #[serde(default = "default_class")]
    class: OpClass,
    #[serde(default)]
    operands: Vec<String>,
}

fn default_class() -> OpClass {
    OpClass::Body
}
