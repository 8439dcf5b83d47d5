//! Instruction table type definitions.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::enums::{EnumKind, MaskKind};
use super::json::GrammarError;

/// How one operand slot of an instruction is encoded.
///
/// Closed set: a table loaded at runtime that names anything else is rejected
/// by [`OperandKind::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    /// `<id>` reference.
    Id,
    /// `<id>` that may be omitted (only trailing).
    OptionalId,
    /// One literal word.
    LiteralNumber,
    /// NUL-terminated UTF-8, packed four bytes per word.
    LiteralString,
    /// All remaining operands are ids. Must be the last kind.
    VariableIds,
    /// All remaining operands are literal words. Must be the last kind.
    VariableLiterals,
    /// Multi-flag value, already resolved to an integer.
    Mask(MaskKind),
    /// Same as `Mask`, but may be omitted (only trailing).
    OptionalMask(MaskKind),
    /// Named single-value enumerant, resolved through the constants table.
    Enum(EnumKind),
    /// Same as `Enum`, but may be omitted (only trailing).
    OptionalEnum(EnumKind),
    /// Same as `LiteralString`, but may be omitted (only trailing).
    OptionalString,
    /// Remaining operands alternate literal, id. Must be the last kind.
    VariableLiteralIdPairs,
    /// Remaining operands alternate id, literal. Must be the last kind.
    VariableIdLiteralPairs,
    /// Parameters of the decoration operand right before it, typed by
    /// [`decoration_operands`](super::decoration_operands). Must be the last kind.
    DecorationOperands,
}

impl OperandKind {
    /// Parse a kind name as written in a JSON table.
    ///
    /// Mask and enum kinds accept a trailing `?` for the optional variant.
    pub fn from_name(name: &str) -> Result<Self, GrammarError> {
        let kind = match name {
            "Id" => Self::Id,
            "OptionalId" => Self::OptionalId,
            "LiteralNumber" => Self::LiteralNumber,
            "LiteralString" => Self::LiteralString,
            "OptionalString" => Self::OptionalString,
            "VariableIds" => Self::VariableIds,
            "VariableLiterals" => Self::VariableLiterals,
            "VariableLiteralIdPairs" => Self::VariableLiteralIdPairs,
            "VariableIdLiteralPairs" => Self::VariableIdLiteralPairs,
            "DecorationOperands" => Self::DecorationOperands,
            _ => {
                if let Some(base) = name.strip_suffix('?') {
                    if let Some(mask) = MaskKind::from_name(base) {
                        Self::OptionalMask(mask)
                    } else if let Some(kind) = EnumKind::from_name(base) {
                        Self::OptionalEnum(kind)
                    } else {
                        return Err(GrammarError::UnknownOperandKind(name.to_string()));
                    }
                } else if let Some(mask) = MaskKind::from_name(name) {
                    Self::Mask(mask)
                } else if let Some(kind) = EnumKind::from_name(name) {
                    Self::Enum(kind)
                } else {
                    return Err(GrammarError::UnknownOperandKind(name.to_string()));
                }
            }
        };
        Ok(kind)
    }

    /// Variable kinds swallow every remaining operand.
    pub fn is_variable(self) -> bool {
        matches!(
            self,
            Self::VariableIds
                | Self::VariableLiterals
                | Self::VariableLiteralIdPairs
                | Self::VariableIdLiteralPairs
                | Self::DecorationOperands
        )
    }

    /// Variable kinds that must hold an even number of operands.
    pub fn is_paired(self) -> bool {
        matches!(
            self,
            Self::VariableLiteralIdPairs | Self::VariableIdLiteralPairs
        )
    }

    /// Kinds that may be left off the end of an instruction.
    pub fn is_optional(self) -> bool {
        matches!(
            self,
            Self::OptionalId | Self::OptionalMask(_) | Self::OptionalEnum(_) | Self::OptionalString
        ) || self.is_variable()
    }

    /// Kind of the `pos`-th operand claimed by a variable kind; other kinds
    /// return themselves.
    pub fn element(self, pos: usize) -> Self {
        match self {
            Self::VariableIds => Self::Id,
            Self::VariableLiterals | Self::DecorationOperands => Self::LiteralNumber,
            Self::VariableLiteralIdPairs if pos % 2 == 0 => Self::LiteralNumber,
            Self::VariableLiteralIdPairs => Self::Id,
            Self::VariableIdLiteralPairs if pos % 2 == 0 => Self::Id,
            Self::VariableIdLiteralPairs => Self::LiteralNumber,
            other => other,
        }
    }
}

/// Number of leading kinds in `kinds` that must be present.
pub fn required_operands(kinds: &[OperandKind]) -> usize {
    kinds
        .iter()
        .rposition(|k| !k.is_optional())
        .map_or(0, |i| i + 1)
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id => f.write_str("Id"),
            Self::OptionalId => f.write_str("OptionalId"),
            Self::LiteralNumber => f.write_str("LiteralNumber"),
            Self::LiteralString => f.write_str("LiteralString"),
            Self::OptionalString => f.write_str("OptionalString"),
            Self::VariableIds => f.write_str("VariableIds"),
            Self::VariableLiterals => f.write_str("VariableLiterals"),
            Self::VariableLiteralIdPairs => f.write_str("VariableLiteralIdPairs"),
            Self::VariableIdLiteralPairs => f.write_str("VariableIdLiteralPairs"),
            Self::DecorationOperands => f.write_str("DecorationOperands"),
            Self::Mask(kind) => write!(f, "{}", kind.name()),
            Self::OptionalMask(kind) => write!(f, "{}?", kind.name()),
            Self::Enum(kind) => write!(f, "{}", kind.name()),
            Self::OptionalEnum(kind) => write!(f, "{}?", kind.name()),
        }
    }
}

/// Which module section an instruction belongs to when it appears outside a
/// function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpClass {
    /// Capabilities, extensions, memory model, entry points, execution modes, source info.
    Initial,
    /// Debug names, strings, line info.
    Debug,
    /// Decorations.
    Annotation,
    /// Type declarations.
    Type,
    /// Constants (and module-scope undef).
    Constant,
    /// Variables; module-scope ones are global variables.
    Variable,
    FunctionBegin,
    FunctionParameter,
    FunctionEnd,
    Label,
    /// Everything that only appears inside a basic block.
    Body,
}

/// One row of the instruction table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionDesc {
    pub name: String,
    pub opcode: u16,
    pub has_type: bool,
    pub has_result: bool,
    pub class: OpClass,
    pub operands: Vec<OperandKind>,
}

impl InstructionDesc {
    /// Number of leading schema kinds that must be present.
    pub fn required_operands(&self) -> usize {
        required_operands(&self.operands)
    }
}

/// Read-only lookup service over the instruction set.
///
/// Indexed both ways: by mnemonic for encoding and by opcode for decoding.
#[derive(Debug, Clone)]
pub struct InstructionTable {
    version: u32,
    instructions: Vec<InstructionDesc>,
    by_name: HashMap<String, usize>,
    by_opcode: HashMap<u16, usize>,
}

impl InstructionTable {
    /// Build a table, rejecting duplicate names/opcodes and misplaced variable kinds.
    pub fn new(version: u32, instructions: Vec<InstructionDesc>) -> Result<Self, GrammarError> {
        let mut by_name = HashMap::with_capacity(instructions.len());
        let mut by_opcode = HashMap::with_capacity(instructions.len());

        for (i, desc) in instructions.iter().enumerate() {
            if by_name.insert(desc.name.clone(), i).is_some() {
                return Err(GrammarError::DuplicateName(desc.name.clone()));
            }
            if by_opcode.insert(desc.opcode, i).is_some() {
                return Err(GrammarError::DuplicateOpcode(desc.opcode));
            }
            let last = desc.operands.len().saturating_sub(1);
            if let Some(pos) = desc.operands.iter().position(|k| k.is_variable())
                && pos != last
            {
                return Err(GrammarError::VariableKindNotLast(desc.name.clone()));
            }
        }

        Ok(Self {
            version,
            instructions,
            by_name,
            by_opcode,
        })
    }

    /// Instruction-set version this table describes (header word 1).
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn get(&self, name: &str) -> Option<&InstructionDesc> {
        self.by_name.get(name).map(|&i| &self.instructions[i])
    }

    pub fn by_opcode(&self, opcode: u16) -> Option<&InstructionDesc> {
        self.by_opcode.get(&opcode).map(|&i| &self.instructions[i])
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &InstructionDesc> {
        self.instructions.iter()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
