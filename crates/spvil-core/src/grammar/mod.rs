//! Instruction-set description.
//!
//! The [`InstructionTable`] maps mnemonics to opcodes and operand schemas. The
//! built-in SPIR-V 1.0 table is static data; other tables can be loaded from
//! JSON. Named enumerants and masks live in [`EnumKind`] / [`MaskKind`].

mod enums;
mod json;
mod spirv;
mod types;

#[cfg(test)]
mod enums_tests;

pub use enums::{EnumKind, MaskKind};
pub use json::GrammarError;
pub use spirv::{SPIRV_VERSION, decoration_operands};
pub use types::{InstructionDesc, InstructionTable, OpClass, OperandKind, required_operands};

/// Resolve a mask written as `Flag|Flag` (or a number) to its integer value.
pub fn resolve_mask(kind: MaskKind, text: &str) -> Result<u32, GrammarError> {
    kind.resolve(text)
}
