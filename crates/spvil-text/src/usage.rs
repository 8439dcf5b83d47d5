//! Which type declarations the pretty form has to print.
//!
//! Types with a short name (`float`, `<4 x float>`) are spelled out wherever
//! they are used, and function types never appear in pretty text. Everything
//! else that is reachable from a use is needed.

use std::collections::HashSet;

use spvil_core::{Id, Module, Section};

use crate::TextError;
use crate::format::global_pointee;

/// Immutable set of needed type ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeededTypes {
    ids: HashSet<Id>,
}

impl NeededTypes {
    pub fn contains(&self, id: Id) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Needed ids in ascending order.
    pub fn sorted(&self) -> Vec<Id> {
        let mut ids: Vec<_> = self.ids.iter().copied().collect();
        ids.sort_by_key(|id| id.get());
        ids
    }
}

/// Collect the type ids the pretty type section must declare.
pub fn needed_types(module: &Module) -> Result<NeededTypes, TextError> {
    let mut work = roots(module)?;
    let mut seen = HashSet::new();
    let mut ids = HashSet::new();

    while let Some(ty) = work.pop() {
        if !seen.insert(ty) {
            continue;
        }
        let decl = module
            .instruction(ty)
            .ok_or(TextError::DanglingReference(ty))?;
        if decl.is("OpTypeFunction") {
            continue;
        }
        if module.type_name(ty).is_none() {
            ids.insert(ty);
        }
        for operand in decl.id_operands() {
            if module.is_type(operand) {
                work.push(operand);
                continue;
            }
            let inst = module
                .instruction(operand)
                .ok_or(TextError::DanglingReference(operand))?;
            work.extend(inst.type_id);
        }
    }

    log::debug!(
        "{} of {} types needed",
        ids.len(),
        module.section(Section::Types).len()
    );
    Ok(NeededTypes { ids })
}

fn roots(module: &Module) -> Result<Vec<Id>, TextError> {
    let mut roots = Vec::new();

    for function in module.functions() {
        roots.push(function.return_type);
        roots.extend(&function.argument_types);
        for block in &function.basic_blocks {
            roots.extend(block.instrs.iter().filter_map(|inst| inst.type_id));
        }
    }

    for section in [
        Section::Initial,
        Section::Debug,
        Section::Decorations,
        Section::Constants,
    ] {
        roots.extend(module.section(section).iter().filter_map(|inst| inst.type_id));
    }

    for var in module.section(Section::Globals) {
        roots.push(global_pointee(module, var)?.1);
    }

    Ok(roots)
}
