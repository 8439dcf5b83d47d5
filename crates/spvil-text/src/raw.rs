//! Raw text: one line per binary instruction, ids as `%N`.

use spvil_core::{Colors, Instruction, Module, Section};

use crate::format::{TextWriter, initial_groups, instruction_line, operand_text};

/// Render `module` in raw mode. Never fails: every id prints as `%N`.
pub fn write_raw(module: &Module, colors: Colors) -> String {
    let mut w = TextWriter::new();
    let line = |inst: &Instruction| raw_line(inst, colors);

    let (head, rest) = initial_groups(module);
    for group in [head, rest] {
        w.group();
        for inst in group {
            w.line(&line(inst));
        }
    }
    for section in [
        Section::Debug,
        Section::Decorations,
        Section::Types,
        Section::Constants,
        Section::Globals,
    ] {
        w.group();
        for inst in module.section(section) {
            w.line(&line(inst));
        }
    }

    for function in module.functions() {
        w.blank();
        w.line(&line(&function.begin_instruction()));
        for param in function.parameter_instructions() {
            w.line(&line(&param));
        }
        for block in &function.basic_blocks {
            w.line(&line(&Instruction::new("OpLabel").with_result(block.label)));
            for inst in &block.instrs {
                w.indented(&line(inst));
            }
        }
        w.line("OpFunctionEnd");
    }

    w.finish()
}

fn raw_line(inst: &Instruction, colors: Colors) -> String {
    let operands: Vec<_> = inst
        .operands
        .iter()
        .map(|op| operand_text(op, |id| id.to_string(), colors))
        .collect();
    instruction_line(
        inst.result_id.map(|r| r.to_string()),
        &inst.op_name,
        inst.type_id.map(|t| t.to_string()),
        "",
        &operands,
    )
}
