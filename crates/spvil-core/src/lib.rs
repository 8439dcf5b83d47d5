#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for spvil.
//!
//! Three layers:
//! - **Grammar**: the instruction table (opcodes, operand kinds, enumerants, masks)
//! - **Module model**: instructions bucketed by section, functions and basic blocks,
//!   plus the id index built by [`ModuleBuilder`]
//! - **Reporting**: terminal colors and the warning side channel ([`Diagnostics`])

pub mod colors;
pub mod diagnostics;
pub mod grammar;
pub mod ids;
pub mod module;
pub mod test_utils;
pub mod utils;

#[cfg(test)]
mod colors_tests;
#[cfg(test)]
mod diagnostics_tests;

pub use colors::Colors;
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use grammar::{
    EnumKind, GrammarError, InstructionDesc, InstructionTable, MaskKind, OpClass, OperandKind,
    decoration_operands, required_operands,
};
pub use ids::Id;
pub use module::{
    BasicBlock, Definition, Function, Instruction, Module, ModuleBuilder, ModuleError, Operand,
    Section,
};
