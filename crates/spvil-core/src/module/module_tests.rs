//! Tests for the module container: index, short type names, traversal.

use super::*;
use crate::ids::id;

/// `void main() { %5: OpReturn }` with a float, a vec4 and a struct type.
fn sample() -> Module {
    let mut b = ModuleBuilder::new();
    b.extend([
        Instruction::new("OpCapability").with_enumerant("Shader"),
        Instruction::new("OpName")
            .with_operand(id(4))
            .with_string("main"),
        Instruction::new("OpTypeVoid").with_result(id(1)),
        Instruction::new("OpTypeFloat")
            .with_result(id(2))
            .with_literal(32),
        Instruction::new("OpTypeVector")
            .with_result(id(6))
            .with_operand(id(2))
            .with_literal(4),
        Instruction::new("OpTypeStruct")
            .with_result(id(7))
            .with_operand(id(6))
            .with_operand(id(2)),
        Instruction::new("OpTypeFunction")
            .with_result(id(3))
            .with_operand(id(1)),
        Instruction::new("OpFunction")
            .with_type(id(1))
            .with_result(id(4))
            .with_operand(Operand::Mask(0))
            .with_operand(id(3)),
        Instruction::new("OpLabel").with_result(id(5)),
        Instruction::new("OpReturn"),
        Instruction::new("OpFunctionEnd"),
    ])
    .unwrap();
    b.build().unwrap()
}

#[test]
fn sections_are_bucketed() {
    let m = sample();
    assert_eq!(m.section(Section::Initial).len(), 1);
    assert_eq!(m.section(Section::Debug).len(), 1);
    assert_eq!(m.section(Section::Types).len(), 5);
    assert!(m.section(Section::Globals).is_empty());
    assert_eq!(m.functions().len(), 1);
}

#[test]
fn index_resolves_every_kind_of_definition() {
    let m = sample();
    assert_eq!(
        m.definition(id(2)),
        Some(Definition::Global {
            section: Section::Types,
            index: 1
        })
    );
    assert_eq!(m.definition(id(4)), Some(Definition::Function(0)));
    assert_eq!(
        m.definition(id(5)),
        Some(Definition::Label {
            function: 0,
            block: 0
        })
    );
    assert!(m.instruction(id(2)).unwrap().is("OpTypeFloat"));
    assert!(m.instruction(id(4)).is_none());
    assert_eq!(m.function(id(4)).unwrap().basic_blocks.len(), 1);
    assert!(!m.defines(id(9)));
}

#[test]
fn is_type_only_for_type_declarations() {
    let m = sample();
    assert!(m.is_type(id(1)));
    assert!(m.is_type(id(3)));
    assert!(!m.is_type(id(4)));
    assert!(!m.is_type(id(5)));
}

#[test]
fn short_type_names() {
    let m = sample();
    assert_eq!(m.type_name(id(1)), Some("void"));
    assert_eq!(m.type_name(id(2)), Some("float"));
    assert_eq!(m.type_name(id(6)), Some("<4 x float>"));
    assert_eq!(m.type_name(id(7)), None);
    assert_eq!(m.type_name(id(3)), None);
}

#[test]
fn bound_is_one_past_highest_id() {
    assert_eq!(sample().bound(), 8);
}

#[test]
fn traversal_synthesizes_function_framing() {
    let m = sample();
    let ops: Vec<String> = m.instructions().map(|i| i.op_name.clone()).collect();
    assert_eq!(
        ops,
        [
            "OpCapability",
            "OpName",
            "OpTypeVoid",
            "OpTypeFloat",
            "OpTypeVector",
            "OpTypeStruct",
            "OpTypeFunction",
            "OpFunction",
            "OpLabel",
            "OpReturn",
            "OpFunctionEnd",
        ]
    );

    let begin = m.functions()[0].begin_instruction();
    assert_eq!(begin.to_string(), "%4 = OpFunction %1 0 %3");
}

#[test]
fn instruction_display() {
    let inst = Instruction::new("OpName")
        .with_operand(id(4))
        .with_string("main");
    assert_eq!(inst.to_string(), "OpName %4 \"main\"");
}
