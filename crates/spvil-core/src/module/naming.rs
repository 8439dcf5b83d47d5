//! Short mnemonic names for self-describing types.

use std::collections::HashMap;

use super::{Instruction, Operand};
use crate::Id;

/// Walk type declarations in order and name the ones that describe themselves.
///
/// Composite names (`<4 x float>`) only exist when the component is named, so
/// declaration order guarantees components are seen first.
pub(super) fn short_type_names(types: &[Instruction]) -> HashMap<Id, String> {
    let mut names = HashMap::new();
    for inst in types {
        let Some(id) = inst.result_id else {
            continue;
        };
        if let Some(name) = short_name(inst, &names) {
            names.insert(id, name);
        }
    }
    names
}

fn short_name(inst: &Instruction, names: &HashMap<Id, String>) -> Option<String> {
    let lit = |i: usize| inst.operands.get(i).and_then(Operand::as_literal);
    let named = |i: usize| {
        inst.operands
            .get(i)
            .and_then(Operand::as_id)
            .and_then(|id| names.get(&id))
    };

    let name = match inst.op_name.as_str() {
        "OpTypeVoid" => "void".to_string(),
        "OpTypeBool" => "bool".to_string(),
        "OpTypeSampler" => "sampler".to_string(),
        "OpTypeInt" => {
            let width = lit(0)?;
            let sign = if lit(1)? != 0 { 'i' } else { 'u' };
            format!("{sign}{width}")
        }
        "OpTypeFloat" => match lit(0)? {
            16 => "half".to_string(),
            32 => "float".to_string(),
            64 => "double".to_string(),
            w => format!("f{w}"),
        },
        "OpTypeVector" => format!("<{} x {}>", lit(1)?, named(0)?),
        "OpTypeMatrix" => format!("[{} x {}]", lit(1)?, named(0)?),
        _ => return None,
    };
    Some(name)
}
