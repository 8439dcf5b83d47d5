//! Pieces shared by the raw and pretty writers.

use spvil_core::utils::quote;
use spvil_core::{
    Colors, Id, Instruction, Module, Operand, OperandKind, Section, decoration_operands,
};

use crate::TextError;

/// Initial-section instructions that print first, grouped by kind in this order.
pub const ORDERED_INITIAL: [&str; 6] = [
    "OpSource",
    "OpSourceExtension",
    "OpExtension",
    "OpMemoryModel",
    "OpEntryPoint",
    "OpExecutionMode",
];

/// Line-oriented output with blank lines between groups.
///
/// [`TextWriter::group`] only arms a separator; it is written before the next
/// line, so an empty group leaves no trace.
#[derive(Debug, Default)]
pub struct TextWriter {
    out: String,
    gap: bool,
}

impl TextWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new group.
    pub fn group(&mut self) {
        self.gap = !self.out.is_empty();
    }

    pub fn line(&mut self, text: &str) {
        if std::mem::take(&mut self.gap) {
            self.out.push('\n');
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    pub fn indented(&mut self, text: &str) {
        self.line(&format!("  {text}"));
    }

    /// Unconditional empty line. Replaces a pending group separator.
    pub fn blank(&mut self) {
        self.gap = false;
        self.out.push('\n');
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// `[<result> = ]OpName[ <type>][<decorations>][ op, op, …]`.
///
/// `decorations` is either empty or carries its own leading space.
pub fn instruction_line(
    result: Option<String>,
    op_name: &str,
    ty: Option<String>,
    decorations: &str,
    operands: &[String],
) -> String {
    let mut line = String::new();
    if let Some(result) = result {
        line.push_str(&result);
        line.push_str(" = ");
    }
    line.push_str(op_name);
    if let Some(ty) = ty {
        line.push(' ');
        line.push_str(&ty);
    }
    line.push_str(decorations);
    if !operands.is_empty() {
        line.push(' ');
        line.push_str(&operands.join(", "));
    }
    line
}

/// Text of one operand; ids go through `id_text`.
pub fn operand_text(operand: &Operand, id_text: impl Fn(Id) -> String, colors: Colors) -> String {
    match operand {
        Operand::Id(id) => id_text(*id),
        Operand::Literal(v) | Operand::Mask(v) => v.to_string(),
        Operand::String(s) => colors.paint(colors.string, &quote(s)),
        Operand::Enumerant(name) => name.clone(),
    }
}

/// Split the initial section into the ordered head and the remainder.
pub fn initial_groups(module: &Module) -> (Vec<&Instruction>, Vec<&Instruction>) {
    let initial = module.section(Section::Initial);
    let head = ORDERED_INITIAL
        .iter()
        .flat_map(|op| initial.iter().filter(move |inst| inst.is(op)))
        .collect();
    let rest = initial
        .iter()
        .filter(|inst| !ORDERED_INITIAL.contains(&inst.op_name.as_str()))
        .collect();
    (head, rest)
}

/// Inline decorations of `id`: ` Name` or ` Name(p, p)` per `OpDecorate`.
///
/// Enum parameters given as numbers print by name.
pub fn decorations(
    module: &Module,
    id: Id,
    id_text: impl Fn(Id) -> String,
    colors: Colors,
) -> String {
    let mut text = String::new();
    let targeting = module
        .section(Section::Decorations)
        .iter()
        .filter(|inst| inst.is("OpDecorate"))
        .filter(|inst| inst.operands.first().and_then(Operand::as_id) == Some(id));
    for inst in targeting {
        let Some(kind) = inst.operands.get(1) else {
            continue;
        };
        let mut item = operand_text(kind, &id_text, Colors::OFF);
        let kinds = decoration_operands(Some(kind));
        let params: Vec<_> = inst.operands[2..]
            .iter()
            .enumerate()
            .map(|(i, op)| match (op, kinds.get(i)) {
                (Operand::Literal(v), Some(OperandKind::Enum(k))) => k
                    .name_of(*v)
                    .map_or_else(|| v.to_string(), str::to_string),
                _ => operand_text(op, &id_text, Colors::OFF),
            })
            .collect();
        if !params.is_empty() {
            item.push('(');
            item.push_str(&params.join(", "));
            item.push(')');
        }
        text.push(' ');
        text.push_str(&colors.paint(colors.decoration, &item));
    }
    text
}

/// Storage class operand and pointee type of a global variable.
///
/// The variable's type must be an `OpTypePointer` in the same storage class.
pub fn global_pointee<'m>(
    module: &'m Module,
    var: &'m Instruction,
) -> Result<(&'m Operand, Id), TextError> {
    let malformed = |reason| TextError::MalformedGlobal {
        var: var.to_string(),
        reason,
    };
    let storage = var
        .operands
        .first()
        .ok_or_else(|| malformed("missing storage class"))?;
    let pointer = var
        .type_id
        .and_then(|ty| module.instruction(ty))
        .filter(|ty| ty.is("OpTypePointer"))
        .ok_or_else(|| malformed("type is not a pointer"))?;
    if pointer.operands.first() != Some(storage) {
        return Err(malformed("storage class differs from its pointer type"));
    }
    let pointee = pointer
        .operands
        .get(1)
        .and_then(Operand::as_id)
        .ok_or_else(|| malformed("pointer has no pointee type"))?;
    Ok((storage, pointee))
}
