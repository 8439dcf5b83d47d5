use std::fmt;

use crate::Id;

/// One operand of an instruction.
///
/// Variable-length tails are not a separate variant: they are the trailing
/// run of a flat operand list, claimed by the schema's variable kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    Id(Id),
    Literal(u32),
    /// Unquoted UTF-8 payload of a literal string.
    String(String),
    /// Named single-value constant, e.g. `Input` for a storage class.
    Enumerant(String),
    /// Multi-flag value, already resolved to an integer.
    Mask(u32),
}

impl Operand {
    pub fn as_id(&self) -> Option<Id> {
        match self {
            Self::Id(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<u32> {
        match self {
            Self::Literal(v) | Self::Mask(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Enumerant(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Id> for Operand {
    fn from(id: Id) -> Self {
        Self::Id(id)
    }
}

impl From<u32> for Operand {
    fn from(v: u32) -> Self {
        Self::Literal(v)
    }
}

/// A single IR instruction, named by its mnemonic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub op_name: String,
    pub result_id: Option<Id>,
    pub type_id: Option<Id>,
    pub operands: Vec<Operand>,
}

impl Instruction {
    pub fn new(op_name: impl Into<String>) -> Self {
        Self {
            op_name: op_name.into(),
            result_id: None,
            type_id: None,
            operands: Vec::new(),
        }
    }

    pub fn with_result(mut self, id: Id) -> Self {
        self.result_id = Some(id);
        self
    }

    pub fn with_type(mut self, id: Id) -> Self {
        self.type_id = Some(id);
        self
    }

    pub fn with_operand(mut self, operand: impl Into<Operand>) -> Self {
        self.operands.push(operand.into());
        self
    }

    pub fn with_literal(self, value: u32) -> Self {
        self.with_operand(Operand::Literal(value))
    }

    pub fn with_string(self, s: impl Into<String>) -> Self {
        self.with_operand(Operand::String(s.into()))
    }

    pub fn with_enumerant(self, name: impl Into<String>) -> Self {
        self.with_operand(Operand::Enumerant(name.into()))
    }

    /// Every id operand, in order. Does not include `result_id` / `type_id`.
    pub fn id_operands(&self) -> impl Iterator<Item = Id> + '_ {
        self.operands.iter().filter_map(Operand::as_id)
    }

    pub fn is(&self, op_name: &str) -> bool {
        self.op_name == op_name
    }
}

/// Raw single-line form: `%r = OpName %t op op`. Used in error messages.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(r) = self.result_id {
            write!(f, "{r} = ")?;
        }
        f.write_str(&self.op_name)?;
        if let Some(t) = self.type_id {
            write!(f, " {t}")?;
        }
        for op in &self.operands {
            match op {
                Operand::Id(id) => write!(f, " {id}")?,
                Operand::Literal(v) | Operand::Mask(v) => write!(f, " {v}")?,
                Operand::String(s) => write!(f, " {s:?}")?,
                Operand::Enumerant(s) => write!(f, " {s}")?,
            }
        }
        Ok(())
    }
}
