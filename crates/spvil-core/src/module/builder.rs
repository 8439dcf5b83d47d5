//! Front-end facing construction API for [`Module`].

use std::collections::HashMap;

use super::naming::short_type_names;
use super::{BasicBlock, Definition, Function, Instruction, Module, Operand, Section};
use crate::Id;
use crate::grammar::{InstructionTable, OpClass};

/// Errors from assembling a module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModuleError {
    #[error("unknown instruction `{0}`")]
    UnknownOpcode(String),

    #[error("{id} is used but never defined")]
    DanglingId { id: Id },

    #[error("`{op}` has type {id}, which is not a type declaration")]
    NotAType { op: String, id: Id },

    #[error("{id} is defined more than once")]
    DuplicateDefinition { id: Id },

    #[error("`{0}` must appear inside a basic block")]
    OutsideBlock(String),

    #[error("`{0}` is not allowed here")]
    Misplaced(String),

    #[error("malformed `{op}`: {reason}")]
    Malformed { op: String, reason: &'static str },

    #[error("function {0} has no OpFunctionEnd")]
    UnterminatedFunction(Id),

    #[error("id bound {bound} is too small, ids go up to {highest}")]
    BoundTooSmall { bound: u32, highest: u32 },

    #[error("{0} is the largest possible id and leaves no room for a bound")]
    IdOutOfRange(Id),
}

/// Collects instructions in stream order and sorts them into a [`Module`].
///
/// Module-scope instructions go to the section given by their table class.
/// Between `OpFunction` and `OpFunctionEnd`, parameters must precede the
/// first `OpLabel`, and every other instruction belongs to the current block.
#[derive(Debug)]
pub struct ModuleBuilder<'t> {
    table: &'t InstructionTable,
    initial: Vec<Instruction>,
    debug: Vec<Instruction>,
    decorations: Vec<Instruction>,
    types: Vec<Instruction>,
    constants: Vec<Instruction>,
    globals: Vec<Instruction>,
    functions: Vec<Function>,
    current: Option<Function>,
    bound: Option<u32>,
}

impl Default for ModuleBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleBuilder<'static> {
    /// Builder classifying against the built-in table.
    pub fn new() -> Self {
        Self::with_table(InstructionTable::spirv())
    }
}

impl<'t> ModuleBuilder<'t> {
    pub fn with_table(table: &'t InstructionTable) -> Self {
        Self {
            table,
            initial: Vec::new(),
            debug: Vec::new(),
            decorations: Vec::new(),
            types: Vec::new(),
            constants: Vec::new(),
            globals: Vec::new(),
            functions: Vec::new(),
            current: None,
            bound: None,
        }
    }

    /// Request an explicit id bound. Must be at least one past the highest id.
    pub fn bound(&mut self, bound: u32) -> &mut Self {
        self.bound = Some(bound);
        self
    }

    /// Append one instruction in stream order.
    pub fn push(&mut self, inst: Instruction) -> Result<&mut Self, ModuleError> {
        let class = self
            .table
            .get(&inst.op_name)
            .map(|d| d.class)
            .ok_or_else(|| ModuleError::UnknownOpcode(inst.op_name.clone()))?;

        match (class, self.current.as_mut()) {
            (OpClass::FunctionBegin, None) => self.current = Some(begin_function(inst)?),
            (OpClass::FunctionBegin, Some(f)) => {
                return Err(ModuleError::UnterminatedFunction(f.name));
            }
            (OpClass::FunctionParameter, Some(f)) if f.basic_blocks.is_empty() => {
                let (Some(arg), Some(ty)) = (inst.result_id, inst.type_id) else {
                    return Err(malformed(inst, "parameter needs a result and a type"));
                };
                f.arguments.push(arg);
                f.argument_types.push(ty);
            }
            (OpClass::Label, Some(f)) => {
                let Some(label) = inst.result_id else {
                    return Err(malformed(inst, "label needs a result id"));
                };
                f.basic_blocks.push(BasicBlock {
                    label,
                    instrs: Vec::new(),
                });
            }
            (OpClass::FunctionEnd, Some(_)) => {
                if let Some(f) = self.current.take() {
                    self.functions.push(f);
                }
            }
            (OpClass::FunctionParameter | OpClass::Label | OpClass::FunctionEnd, _) => {
                return Err(ModuleError::Misplaced(inst.op_name));
            }
            (_, Some(f)) => match f.basic_blocks.last_mut() {
                Some(block) => block.instrs.push(inst),
                None => return Err(ModuleError::OutsideBlock(inst.op_name)),
            },
            (OpClass::Initial, None) => self.initial.push(inst),
            (OpClass::Debug, None) => self.debug.push(inst),
            (OpClass::Annotation, None) => self.decorations.push(inst),
            (OpClass::Type, None) => self.types.push(inst),
            (OpClass::Constant, None) => self.constants.push(inst),
            (OpClass::Variable, None) => self.globals.push(inst),
            (OpClass::Body, None) => return Err(ModuleError::OutsideBlock(inst.op_name)),
        }
        Ok(self)
    }

    /// Push every instruction of `insts` in order.
    pub fn extend(
        &mut self,
        insts: impl IntoIterator<Item = Instruction>,
    ) -> Result<&mut Self, ModuleError> {
        for inst in insts {
            self.push(inst)?;
        }
        Ok(self)
    }

    /// Index, validate and freeze the module.
    pub fn build(self) -> Result<Module, ModuleError> {
        if let Some(f) = self.current {
            return Err(ModuleError::UnterminatedFunction(f.name));
        }

        let type_names = short_type_names(&self.types);
        let mut module = Module {
            initial: self.initial,
            debug: self.debug,
            decorations: self.decorations,
            types: self.types,
            constants: self.constants,
            globals: self.globals,
            functions: self.functions,
            index: HashMap::new(),
            type_names,
            bound: 0,
        };

        module.index = index(&module)?;
        let top = module.index.keys().copied().max();
        let highest = top.map_or(0, Id::get);
        module.bound = match self.bound {
            Some(bound) if bound <= highest => {
                return Err(ModuleError::BoundTooSmall { bound, highest });
            }
            Some(bound) => bound,
            None => match top {
                Some(id) => id
                    .get()
                    .checked_add(1)
                    .ok_or(ModuleError::IdOutOfRange(id))?,
                None => 1,
            },
        };

        validate(&module)?;
        log::debug!(
            "built module: {} functions, bound {}",
            module.functions.len(),
            module.bound
        );
        Ok(module)
    }
}

fn malformed(inst: Instruction, reason: &'static str) -> ModuleError {
    ModuleError::Malformed {
        op: inst.op_name,
        reason,
    }
}

fn begin_function(inst: Instruction) -> Result<Function, ModuleError> {
    let (Some(name), Some(return_type)) = (inst.result_id, inst.type_id) else {
        return Err(malformed(inst, "function needs a result and a return type"));
    };
    let (function_control, function_type) = match inst.operands.as_slice() {
        [control, Operand::Id(fty)] => match control.as_literal() {
            Some(c) => (c, *fty),
            None => return Err(malformed(inst, "function control must be a mask")),
        },
        _ => return Err(malformed(inst, "expected function control and type")),
    };
    Ok(Function {
        name,
        return_type,
        function_control,
        function_type,
        arguments: Vec::new(),
        argument_types: Vec::new(),
        basic_blocks: Vec::new(),
    })
}

fn index(module: &Module) -> Result<HashMap<Id, Definition>, ModuleError> {
    let mut index = HashMap::new();
    let mut define = |id: Id, def: Definition| match index.insert(id, def) {
        Some(_) => Err(ModuleError::DuplicateDefinition { id }),
        None => Ok(()),
    };

    for section in Section::ALL {
        for (i, inst) in module.section(section).iter().enumerate() {
            if let Some(id) = inst.result_id {
                define(id, Definition::Global { section, index: i })?;
            }
        }
    }

    for (fi, f) in module.functions.iter().enumerate() {
        define(f.name, Definition::Function(fi))?;
        for (ai, &arg) in f.arguments.iter().enumerate() {
            define(
                arg,
                Definition::Parameter {
                    function: fi,
                    index: ai,
                },
            )?;
        }
        for (bi, block) in f.basic_blocks.iter().enumerate() {
            define(
                block.label,
                Definition::Label {
                    function: fi,
                    block: bi,
                },
            )?;
            for (ii, inst) in block.instrs.iter().enumerate() {
                if let Some(id) = inst.result_id {
                    define(
                        id,
                        Definition::Local {
                            function: fi,
                            block: bi,
                            index: ii,
                        },
                    )?;
                }
            }
        }
    }

    Ok(index)
}

fn validate(module: &Module) -> Result<(), ModuleError> {
    for inst in module.instructions() {
        if let Some(ty) = inst.type_id {
            if !module.defines(ty) {
                return Err(ModuleError::DanglingId { id: ty });
            }
            if !module.is_type(ty) {
                return Err(ModuleError::NotAType {
                    op: inst.op_name.clone(),
                    id: ty,
                });
            }
        }
        if let Some(id) = inst.id_operands().find(|&id| !module.defines(id)) {
            return Err(ModuleError::DanglingId { id });
        }
    }
    Ok(())
}
