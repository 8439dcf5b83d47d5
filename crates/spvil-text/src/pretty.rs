//! Pretty text: symbolic names, pruned types, inlined decorations.
//!
//! Debug and decoration instructions are not printed; they survive as
//! aliases and as decorations after the result they annotate.

use spvil_core::{Colors, Diagnostics, Function, Id, Instruction, Module, Section};

use crate::TextError;
use crate::alias::Aliases;
use crate::format::{
    TextWriter, decorations, global_pointee, initial_groups, instruction_line, operand_text,
};
use crate::usage::{NeededTypes, needed_types};

/// Render `module` in pretty mode, returning the text and the warnings raised
/// while naming symbols.
pub fn write_pretty(module: &Module, colors: Colors) -> Result<(String, Diagnostics), TextError> {
    let mut ctx = PrettyContext {
        module,
        colors,
        aliases: Aliases::new(module),
        needed: needed_types(module)?,
        w: TextWriter::new(),
    };
    ctx.write()?;
    Ok((ctx.w.finish(), ctx.aliases.into_diagnostics()))
}

struct PrettyContext<'m> {
    module: &'m Module,
    colors: Colors,
    aliases: Aliases<'m>,
    needed: NeededTypes,
    w: TextWriter,
}

impl<'m> PrettyContext<'m> {
    fn write(&mut self) -> Result<(), TextError> {
        let module = self.module;

        // Names used before their definition must already be known.
        for function in module.functions() {
            self.aliases.resolve(function.name)?;
        }
        for var in module.section(Section::Globals) {
            if let Some(id) = var.result_id {
                self.aliases.resolve(id)?;
            }
        }

        let (head, rest) = initial_groups(module);
        for group in [head, rest] {
            self.w.group();
            for inst in group {
                self.instruction(inst, false);
            }
        }

        self.w.group();
        for inst in module.section(Section::Types) {
            if inst.result_id.is_some_and(|id| self.needed.contains(id)) {
                self.instruction(inst, false);
            }
        }

        self.w.group();
        for inst in module.section(Section::Constants) {
            self.instruction(inst, false);
        }

        self.w.group();
        for var in module.section(Section::Globals) {
            self.global(var)?;
        }

        for function in module.functions() {
            self.function(function)?;
        }
        Ok(())
    }

    /// Cached alias, else short type name, else `%N`.
    fn id_text(&self, id: Id) -> String {
        let c = self.colors;
        if let Some(alias) = self.aliases.cached(id) {
            return c.paint(c.symbol, alias);
        }
        match self.module.type_name(id) {
            Some(name) => name.to_string(),
            None => id.to_string(),
        }
    }

    fn instruction(&mut self, inst: &Instruction, indent: bool) {
        let id_text = |id: Id| self.id_text(id);
        let operands: Vec<_> = inst
            .operands
            .iter()
            .map(|op| operand_text(op, id_text, self.colors))
            .collect();
        let inline = match inst.result_id {
            Some(id) => decorations(self.module, id, id_text, self.colors),
            None => String::new(),
        };
        let line = instruction_line(
            inst.result_id.map(id_text),
            &inst.op_name,
            inst.type_id.map(id_text),
            &inline,
            &operands,
        );
        if indent {
            self.w.indented(&line);
        } else {
            self.w.line(&line);
        }
    }

    /// `@alias = StorageClass <pointee> Decoration(..)`.
    fn global(&mut self, var: &Instruction) -> Result<(), TextError> {
        let id = var.result_id.ok_or_else(|| TextError::MalformedGlobal {
            var: var.to_string(),
            reason: "missing result id",
        })?;
        let (storage, pointee) = global_pointee(self.module, var)?;
        let alias = self.aliases.resolve(id)?;

        let id_text = |id: Id| self.id_text(id);
        let line = format!(
            "{} = {} {}{}",
            self.colors.paint(self.colors.symbol, &alias),
            operand_text(storage, id_text, self.colors),
            id_text(pointee),
            decorations(self.module, id, id_text, self.colors),
        );
        self.w.line(&line);
        Ok(())
    }

    fn function(&mut self, function: &Function) -> Result<(), TextError> {
        let c = self.colors;
        let name = self.aliases.resolve(function.name)?;
        let mut params = Vec::with_capacity(function.arguments.len());
        for (&arg, &ty) in function.arguments.iter().zip(&function.argument_types) {
            let alias = self.aliases.resolve(arg)?;
            params.push(format!("{} {}", self.id_text(ty), c.paint(c.symbol, &alias)));
        }

        self.w.blank();
        self.w.line(&format!(
            "define {} {}({}) {{",
            self.id_text(function.return_type),
            c.paint(c.symbol, &name),
            params.join(", ")
        ));
        for (i, block) in function.basic_blocks.iter().enumerate() {
            if i > 0 {
                self.w.blank();
            }
            let label = format!("{}:", self.id_text(block.label));
            self.w.line(&c.paint(c.symbol, &label));
            for inst in &block.instrs {
                self.instruction(inst, true);
            }
        }
        self.w.line("}");
        Ok(())
    }
}
