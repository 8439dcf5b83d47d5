//! Binary decoder.
//!
//! Reads a word stream back into a [`Module`] using the instruction table in
//! reverse. Enum operands come back as [`Operand::Enumerant`] when the value
//! has a name and as [`Operand::Literal`] otherwise; mask operands always come
//! back as [`Operand::Mask`].

use spvil_core::{
    Id, Instruction, InstructionDesc, InstructionTable, Module, ModuleBuilder, ModuleError,
    Operand, OperandKind, decoration_operands, required_operands,
};

use crate::constants::{HEADER_WORDS, MAGIC};
use crate::header::Header;
use crate::strings::unpack_string;

/// Error during binary decoding. Offsets are in words from the stream start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("stream too short: {0} words, the header needs 5")]
    TooShort(usize),

    #[error("stream length {0} is not a multiple of 4 bytes")]
    NotWordAligned(usize),

    #[error("invalid magic {0:#010x}")]
    InvalidMagic(u32),

    #[error("instruction at word {offset} has length 0")]
    ZeroLengthInstruction { offset: usize },

    #[error("instruction at word {offset} runs past the end of the stream")]
    TruncatedInstruction { offset: usize },

    #[error("unknown opcode {opcode} at word {offset}")]
    UnknownOpcode { opcode: u16, offset: usize },

    #[error("`{op}` at word {offset}: missing {expected}")]
    MissingOperand {
        op: String,
        offset: usize,
        expected: OperandKind,
    },

    #[error("`{op}` at word {offset}: id 0 is reserved")]
    ZeroId { op: String, offset: usize },

    #[error("`{op}` at word {offset}: string is not NUL-terminated")]
    UnterminatedString { op: String, offset: usize },

    #[error("`{op}` at word {offset}: string is not valid UTF-8")]
    InvalidUtf8 { op: String, offset: usize },

    #[error("`{op}` at word {offset}: {count} trailing words")]
    TrailingWords {
        op: String,
        offset: usize,
        count: usize,
    },

    #[error(transparent)]
    Module(#[from] ModuleError),
}

/// Split bytes into words, detecting byte order from the magic number.
pub fn words_from_bytes(bytes: &[u8]) -> Result<Vec<u32>, DecodeError> {
    if bytes.len() % 4 != 0 {
        return Err(DecodeError::NotWordAligned(bytes.len()));
    }
    let Some(&first) = bytes.first_chunk::<4>() else {
        return Err(DecodeError::TooShort(0));
    };
    let big_endian = u32::from_be_bytes(first) == MAGIC;
    let words = bytes
        .chunks_exact(4)
        .map(|c| {
            let c = [c[0], c[1], c[2], c[3]];
            if big_endian {
                u32::from_be_bytes(c)
            } else {
                u32::from_le_bytes(c)
            }
        })
        .collect();
    Ok(words)
}

/// Binary decoder bound to one instruction table.
#[derive(Clone, Copy, Debug)]
pub struct Decoder<'t> {
    table: &'t InstructionTable,
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder<'static> {
    pub fn new() -> Self {
        Self::with_table(InstructionTable::spirv())
    }
}

impl<'t> Decoder<'t> {
    pub fn with_table(table: &'t InstructionTable) -> Self {
        Self { table }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Module, DecodeError> {
        self.decode_words(&words_from_bytes(bytes)?)
    }

    pub fn decode_words(&self, words: &[u32]) -> Result<Module, DecodeError> {
        let header = Header::from_words(words)?;
        if header.version != self.table.version() {
            log::warn!(
                "stream version {:#x} differs from table version {:#x}",
                header.version,
                self.table.version()
            );
        }

        let mut builder = ModuleBuilder::with_table(self.table);
        let mut offset = HEADER_WORDS;
        while offset < words.len() {
            let (inst, len) = self.instruction_at(words, offset)?;
            builder.push(inst)?;
            offset += len;
        }
        builder.bound(header.bound);
        Ok(builder.build()?)
    }

    /// Decode the instruction starting at `offset`; returns it with its length.
    fn instruction_at(
        &self,
        words: &[u32],
        offset: usize,
    ) -> Result<(Instruction, usize), DecodeError> {
        let head = words[offset];
        let len = (head >> 16) as usize;
        let opcode = (head & 0xFFFF) as u16;
        if len == 0 {
            return Err(DecodeError::ZeroLengthInstruction { offset });
        }
        let payload = words
            .get(offset + 1..offset + len)
            .ok_or(DecodeError::TruncatedInstruction { offset })?;
        let desc = self
            .table
            .by_opcode(opcode)
            .ok_or(DecodeError::UnknownOpcode { opcode, offset })?;
        let inst = Cursor::new(desc, payload, offset).instruction()?;
        Ok((inst, len))
    }
}

/// Decode `bytes` with the built-in table.
pub fn decode(bytes: &[u8]) -> Result<Module, DecodeError> {
    Decoder::new().decode(bytes)
}

/// Decode `words` with the built-in table.
pub fn decode_words(words: &[u32]) -> Result<Module, DecodeError> {
    Decoder::new().decode_words(words)
}

struct Cursor<'a> {
    desc: &'a InstructionDesc,
    words: &'a [u32],
    pos: usize,
    /// Stream offset of the instruction's header word.
    base: usize,
}

impl<'a> Cursor<'a> {
    fn new(desc: &'a InstructionDesc, words: &'a [u32], base: usize) -> Self {
        Self {
            desc,
            words,
            pos: 0,
            base,
        }
    }

    fn instruction(mut self) -> Result<Instruction, DecodeError> {
        let desc = self.desc;
        let mut inst = Instruction::new(desc.name.clone());
        if desc.has_type {
            inst.type_id = Some(self.id(OperandKind::Id)?);
        }
        if desc.has_result {
            inst.result_id = Some(self.id(OperandKind::Id)?);
        }

        self.operands(&desc.operands, &mut inst.operands)?;

        if !self.is_empty() {
            return Err(DecodeError::TrailingWords {
                op: self.desc.name.clone(),
                offset: self.base,
                count: self.words.len() - self.pos,
            });
        }
        Ok(inst)
    }

    /// Read operands against `schema`, appending them to `out`.
    fn operands(
        &mut self,
        schema: &[OperandKind],
        out: &mut Vec<Operand>,
    ) -> Result<(), DecodeError> {
        let required = required_operands(schema);
        for (slot, &kind) in schema.iter().enumerate() {
            if kind == OperandKind::DecorationOperands {
                return self.operands(decoration_operands(out.last()), out);
            }
            if self.is_empty() {
                if slot < required {
                    return Err(self.missing(kind));
                }
                break;
            }
            if kind.is_variable() {
                let mut count = 0;
                while !self.is_empty() {
                    out.push(self.operand(kind.element(count))?);
                    count += 1;
                }
                if kind.is_paired() && count % 2 == 1 {
                    return Err(self.missing(kind.element(count)));
                }
            } else {
                out.push(self.operand(kind)?);
            }
        }
        Ok(())
    }

    fn missing(&self, expected: OperandKind) -> DecodeError {
        DecodeError::MissingOperand {
            op: self.desc.name.clone(),
            offset: self.base,
            expected,
        }
    }

    fn operand(&mut self, kind: OperandKind) -> Result<Operand, DecodeError> {
        let operand = match kind {
            OperandKind::Id | OperandKind::OptionalId | OperandKind::VariableIds => {
                Operand::Id(self.id(kind)?)
            }
            // Variable kinds arrive narrowed by `OperandKind::element`.
            OperandKind::LiteralNumber
            | OperandKind::VariableLiterals
            | OperandKind::VariableLiteralIdPairs
            | OperandKind::VariableIdLiteralPairs
            | OperandKind::DecorationOperands => Operand::Literal(self.word(kind)?),
            OperandKind::Mask(_) | OperandKind::OptionalMask(_) => Operand::Mask(self.word(kind)?),
            OperandKind::Enum(enum_kind) | OperandKind::OptionalEnum(enum_kind) => {
                let value = self.word(kind)?;
                match enum_kind.name_of(value) {
                    Some(name) => Operand::Enumerant(name.to_string()),
                    None => Operand::Literal(value),
                }
            }
            OperandKind::LiteralString | OperandKind::OptionalString => {
                Operand::String(self.string()?)
            }
        };
        Ok(operand)
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.words.len()
    }

    fn next(&mut self) -> Option<u32> {
        let w = self.words.get(self.pos).copied()?;
        self.pos += 1;
        Some(w)
    }

    fn word(&mut self, kind: OperandKind) -> Result<u32, DecodeError> {
        self.next().ok_or_else(|| self.missing(kind))
    }

    fn id(&mut self, kind: OperandKind) -> Result<Id, DecodeError> {
        let raw = self.word(kind)?;
        Id::new(raw).ok_or_else(|| DecodeError::ZeroId {
            op: self.desc.name.clone(),
            offset: self.base,
        })
    }

    fn string(&mut self) -> Result<String, DecodeError> {
        let (bytes, used) = unpack_string(&self.words[self.pos..]).ok_or_else(|| {
            DecodeError::UnterminatedString {
                op: self.desc.name.clone(),
                offset: self.base,
            }
        })?;
        self.pos += used;
        String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 {
            op: self.desc.name.clone(),
            offset: self.base,
        })
    }
}
