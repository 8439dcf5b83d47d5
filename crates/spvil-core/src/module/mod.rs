//! In-memory IR module.
//!
//! A [`Module`] is assembled through [`ModuleBuilder`] and immutable afterwards.
//! Module-scope instructions live in fixed sections; functions own their
//! framing (`OpFunction`, parameters, labels, `OpFunctionEnd`) as structured
//! fields and only store block bodies as instructions.

mod builder;
mod instruction;
mod naming;

#[cfg(test)]
mod module_tests;

use std::borrow::Cow;
use std::collections::HashMap;
use std::iter;

pub use builder::{ModuleBuilder, ModuleError};
pub use instruction::{Instruction, Operand};

use crate::Id;

/// Module-scope sections, in binary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Initial,
    Debug,
    Decorations,
    Types,
    Constants,
    Globals,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Self::Initial,
        Self::Debug,
        Self::Decorations,
        Self::Types,
        Self::Constants,
        Self::Globals,
    ];
}

/// Where an id is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Definition {
    Global { section: Section, index: usize },
    Function(usize),
    Parameter { function: usize, index: usize },
    Label { function: usize, block: usize },
    Local { function: usize, block: usize, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicBlock {
    pub label: Id,
    pub instrs: Vec<Instruction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: Id,
    pub return_type: Id,
    pub function_control: u32,
    pub function_type: Id,
    pub arguments: Vec<Id>,
    /// Parallel to `arguments`.
    pub argument_types: Vec<Id>,
    pub basic_blocks: Vec<BasicBlock>,
}

impl Function {
    /// The `OpFunction` line this function opens with.
    pub fn begin_instruction(&self) -> Instruction {
        Instruction::new("OpFunction")
            .with_type(self.return_type)
            .with_result(self.name)
            .with_operand(Operand::Mask(self.function_control))
            .with_operand(self.function_type)
    }

    pub fn parameter_instructions(&self) -> impl Iterator<Item = Instruction> + '_ {
        self.arguments
            .iter()
            .zip(&self.argument_types)
            .map(|(&arg, &ty)| {
                Instruction::new("OpFunctionParameter")
                    .with_type(ty)
                    .with_result(arg)
            })
    }

    /// All instructions of this function in binary order, framing included.
    pub fn instructions(&self) -> impl Iterator<Item = Cow<'_, Instruction>> + '_ {
        iter::once(Cow::Owned(self.begin_instruction()))
            .chain(self.parameter_instructions().map(Cow::Owned))
            .chain(self.basic_blocks.iter().flat_map(|block| {
                iter::once(Cow::Owned(Instruction::new("OpLabel").with_result(block.label)))
                    .chain(block.instrs.iter().map(Cow::Borrowed))
            }))
            .chain(iter::once(Cow::Owned(Instruction::new("OpFunctionEnd"))))
    }
}

/// A validated IR module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    initial: Vec<Instruction>,
    debug: Vec<Instruction>,
    decorations: Vec<Instruction>,
    types: Vec<Instruction>,
    constants: Vec<Instruction>,
    globals: Vec<Instruction>,
    functions: Vec<Function>,
    index: HashMap<Id, Definition>,
    type_names: HashMap<Id, String>,
    bound: u32,
}

impl Module {
    pub fn section(&self, section: Section) -> &[Instruction] {
        match section {
            Section::Initial => &self.initial,
            Section::Debug => &self.debug,
            Section::Decorations => &self.decorations,
            Section::Types => &self.types,
            Section::Constants => &self.constants,
            Section::Globals => &self.globals,
        }
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    /// One past the highest id in use, or the larger explicit bound.
    pub fn bound(&self) -> u32 {
        self.bound
    }

    pub fn definition(&self, id: Id) -> Option<Definition> {
        self.index.get(&id).copied()
    }

    pub fn defines(&self, id: Id) -> bool {
        self.index.contains_key(&id)
    }

    /// The stored instruction that defines `id`.
    ///
    /// Function framing is synthesized, so function names, parameters and
    /// labels return `None` here; use [`Module::definition`] for those.
    pub fn instruction(&self, id: Id) -> Option<&Instruction> {
        match self.definition(id)? {
            Definition::Global { section, index } => self.section(section).get(index),
            Definition::Local {
                function,
                block,
                index,
            } => self.functions[function].basic_blocks[block].instrs.get(index),
            _ => None,
        }
    }

    pub fn function(&self, id: Id) -> Option<&Function> {
        match self.definition(id)? {
            Definition::Function(i) => self.functions.get(i),
            _ => None,
        }
    }

    pub fn is_type(&self, id: Id) -> bool {
        matches!(
            self.definition(id),
            Some(Definition::Global {
                section: Section::Types,
                ..
            })
        )
    }

    /// Short mnemonic name of a self-describing type (`float`, `<4 x float>`).
    pub fn type_name(&self, id: Id) -> Option<&str> {
        self.type_names.get(&id).map(String::as_str)
    }

    /// Every instruction in binary order, synthesizing function framing.
    pub fn instructions(&self) -> impl Iterator<Item = Cow<'_, Instruction>> + '_ {
        Section::ALL
            .into_iter()
            .flat_map(move |s| self.section(s).iter().map(Cow::Borrowed))
            .chain(self.functions.iter().flat_map(Function::instructions))
    }
}
