//! Binary encoder.
//!
//! Walks the module in binary order and packs every instruction according to
//! its table schema. Operand kinds are matched exhaustively; anything that does
//! not fit its slot is an error, never silently dropped.

use std::io::{self, Write};

use spvil_core::{
    Instruction, InstructionDesc, InstructionTable, Module, Operand, OperandKind,
    decoration_operands, required_operands,
};

use crate::constants::{GENERATOR, MAX_WORD_COUNT};
use crate::header::Header;
use crate::strings::pack_string;

/// Error during binary encoding.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("unknown instruction `{0}`")]
    UnknownOpcode(String),

    #[error("`{0}` requires a type id")]
    MissingTypeId(String),

    #[error("`{0}` requires a result id")]
    MissingResultId(String),

    #[error("`{op}` operand {index}: expected {expected}, found {found}")]
    OperandMismatch {
        op: String,
        index: usize,
        expected: OperandKind,
        found: &'static str,
    },

    #[error("`{op}` operand {index}: missing {expected}")]
    MissingOperand {
        op: String,
        index: usize,
        expected: OperandKind,
    },

    #[error("`{op}` takes at most {expected} operands, found {found}")]
    TooManyOperands {
        op: String,
        expected: usize,
        found: usize,
    },

    #[error("`{op}`: unknown {kind} enumerant `{name}`")]
    UnknownEnumerant {
        op: String,
        kind: &'static str,
        name: String,
    },

    #[error("`{op}` needs {words} words, the limit is 65535")]
    InstructionTooLong { op: String, words: usize },

    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

/// Encoder settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmitOptions {
    /// Header word 2.
    pub generator: u32,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            generator: GENERATOR,
        }
    }
}

/// Binary encoder bound to one instruction table.
#[derive(Clone, Copy, Debug)]
pub struct Emitter<'t> {
    table: &'t InstructionTable,
    options: EmitOptions,
}

impl Default for Emitter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter<'static> {
    pub fn new() -> Self {
        Self::with_table(InstructionTable::spirv())
    }
}

impl<'t> Emitter<'t> {
    pub fn with_table(table: &'t InstructionTable) -> Self {
        Self {
            table,
            options: EmitOptions::default(),
        }
    }

    pub fn options(mut self, options: EmitOptions) -> Self {
        self.options = options;
        self
    }

    pub fn header(&self, module: &Module) -> Header {
        Header::new(self.table.version(), self.options.generator, module.bound())
    }

    /// Encode one instruction, header word included.
    pub fn instruction(&self, inst: &Instruction) -> Result<Vec<u32>, EncodeError> {
        let desc = self
            .table
            .get(&inst.op_name)
            .ok_or_else(|| EncodeError::UnknownOpcode(inst.op_name.clone()))?;
        encode_instruction(desc, inst)
    }

    pub fn words(&self, module: &Module) -> Result<Vec<u32>, EncodeError> {
        let mut words = self.header(module).to_words().to_vec();
        for inst in module.instructions() {
            words.extend(self.instruction(&inst)?);
        }
        log::debug!("encoded {} words", words.len());
        Ok(words)
    }

    pub fn bytes(&self, module: &Module) -> Result<Vec<u8>, EncodeError> {
        Ok(words_to_bytes(&self.words(module)?))
    }

    /// Stream the module to `out`.
    ///
    /// Output is written instruction by instruction, so an error can leave a
    /// partial stream behind. Use [`Emitter::bytes`] when that matters.
    pub fn write(&self, out: &mut impl Write, module: &Module) -> Result<(), EncodeError> {
        out.write_all(&self.header(module).to_bytes())?;
        for inst in module.instructions() {
            out.write_all(&words_to_bytes(&self.instruction(&inst)?))?;
        }
        Ok(())
    }
}

/// Encode `module` with the built-in table into little-endian bytes.
pub fn emit(module: &Module) -> Result<Vec<u8>, EncodeError> {
    Emitter::new().bytes(module)
}

/// Encode `module` with the built-in table into words.
pub fn emit_words(module: &Module) -> Result<Vec<u32>, EncodeError> {
    Emitter::new().words(module)
}

/// Stream `module` to `out` with the built-in table.
pub fn write_module(out: &mut impl Write, module: &Module) -> Result<(), EncodeError> {
    Emitter::new().write(out, module)
}

pub fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Pack one instruction against its schema.
pub fn encode_instruction(
    desc: &InstructionDesc,
    inst: &Instruction,
) -> Result<Vec<u32>, EncodeError> {
    let op = || inst.op_name.clone();

    // Word 0 is patched once the length is known.
    let mut words = vec![0];
    if desc.has_type {
        let ty = inst.type_id.ok_or_else(|| EncodeError::MissingTypeId(op()))?;
        words.push(ty.get());
    }
    if desc.has_result {
        let result = inst
            .result_id
            .ok_or_else(|| EncodeError::MissingResultId(op()))?;
        words.push(result.get());
    }

    let mut operands = inst.operands.iter().enumerate();
    encode_operands(&mut words, &desc.operands, &mut operands, inst)?;
    if operands.next().is_some() {
        return Err(EncodeError::TooManyOperands {
            op: op(),
            expected: desc.operands.len(),
            found: inst.operands.len(),
        });
    }

    if words.len() > MAX_WORD_COUNT {
        return Err(EncodeError::InstructionTooLong {
            op: op(),
            words: words.len(),
        });
    }
    words[0] = ((words.len() as u32) << 16) | u32::from(desc.opcode);
    Ok(words)
}

/// Pack operands from `operands` against `schema`, leaving any surplus in
/// the iterator.
fn encode_operands<'i>(
    words: &mut Vec<u32>,
    schema: &[OperandKind],
    operands: &mut impl Iterator<Item = (usize, &'i Operand)>,
    inst: &'i Instruction,
) -> Result<(), EncodeError> {
    let missing = |expected| EncodeError::MissingOperand {
        op: inst.op_name.clone(),
        index: inst.operands.len(),
        expected,
    };

    let required = required_operands(schema);
    let mut previous = None;
    for (slot, &kind) in schema.iter().enumerate() {
        if kind == OperandKind::DecorationOperands {
            return encode_operands(words, decoration_operands(previous), operands, inst);
        }
        if kind.is_variable() {
            let mut count = 0;
            for (index, operand) in operands.by_ref() {
                encode_operand(words, kind.element(count), operand, index, inst)?;
                count += 1;
            }
            if kind.is_paired() && count % 2 == 1 {
                return Err(missing(kind.element(count)));
            }
            break;
        }
        match operands.next() {
            Some((index, operand)) => {
                encode_operand(words, kind, operand, index, inst)?;
                previous = Some(operand);
            }
            None if slot < required => return Err(missing(kind)),
            None => break,
        }
    }
    Ok(())
}

fn encode_operand(
    words: &mut Vec<u32>,
    kind: OperandKind,
    operand: &Operand,
    index: usize,
    inst: &Instruction,
) -> Result<(), EncodeError> {
    use OperandKind as K;

    match (kind, operand) {
        (K::Id | K::OptionalId | K::VariableIds, Operand::Id(id)) => words.push(id.get()),
        (K::LiteralNumber | K::VariableLiterals, Operand::Literal(v)) => words.push(*v),
        (K::Mask(_) | K::OptionalMask(_), Operand::Mask(v) | Operand::Literal(v)) => {
            words.push(*v)
        }
        (K::LiteralString | K::OptionalString, Operand::String(s)) => {
            words.extend(pack_string(s))
        }
        (K::Enum(_) | K::OptionalEnum(_), Operand::Literal(v)) => words.push(*v),
        (K::Enum(enum_kind) | K::OptionalEnum(enum_kind), Operand::Enumerant(name)) => {
            let value = enum_kind
                .value_of(name)
                .ok_or_else(|| EncodeError::UnknownEnumerant {
                    op: inst.op_name.clone(),
                    kind: enum_kind.name(),
                    name: name.clone(),
                })?;
            words.push(value);
        }
        _ => {
            return Err(EncodeError::OperandMismatch {
                op: inst.op_name.clone(),
                index,
                expected: kind,
                found: describe(operand),
            });
        }
    }
    Ok(())
}

fn describe(operand: &Operand) -> &'static str {
    match operand {
        Operand::Id(_) => "an id",
        Operand::Literal(_) => "a literal",
        Operand::String(_) => "a string",
        Operand::Enumerant(_) => "an enumerant",
        Operand::Mask(_) => "a mask",
    }
}
