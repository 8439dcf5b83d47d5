use spvil_core::ids::id;
use spvil_core::test_utils::{fragment_shader, input_variable_module};
use spvil_core::{EnumKind, Instruction, InstructionTable, Operand, OperandKind};

use crate::{
    EmitOptions, Emitter, EncodeError, GENERATOR, HEADER_WORDS, MAGIC, VERSION, emit, emit_words,
    write_module,
};

fn encode(inst: Instruction) -> Result<Vec<u32>, EncodeError> {
    Emitter::new().instruction(&inst)
}

#[test]
fn input_variable_module_words() {
    let words = emit_words(&input_variable_module()).unwrap();
    #[rustfmt::skip]
    let expected = [
        MAGIC, VERSION, GENERATOR, 8, 0,
        0x0003_0005, 5, 0x0072_6176,
        0x0004_0005, 6, 0x6e69_616d, 0,
        0x0004_0047, 5, 30, 0,
        0x0002_0013, 1,
        0x0003_0021, 2, 1,
        0x0003_0016, 3, 32,
        0x0004_0020, 4, 1, 3,
        0x0004_003b, 4, 5, 1,
        0x0005_0036, 1, 6, 0, 2,
        0x0002_00f8, 7,
        0x0001_0038,
    ];
    assert_eq!(words, expected);
}

#[test]
fn header_length_matches_words_written() {
    let words = emit_words(&fragment_shader()).unwrap();
    let mut offset = HEADER_WORDS;
    let mut count = 0;
    while offset < words.len() {
        let len = (words[offset] >> 16) as usize;
        assert!(len > 0);
        offset += len;
        count += 1;
    }
    assert_eq!(offset, words.len());
    assert_eq!(count, fragment_shader().instructions().count());
}

#[test]
fn emit_is_idempotent() {
    let module = fragment_shader();
    assert_eq!(emit(&module).unwrap(), emit(&module).unwrap());
}

#[test]
fn write_module_matches_emit() {
    let module = fragment_shader();
    let mut out = Vec::new();
    write_module(&mut out, &module).unwrap();
    assert_eq!(out, emit(&module).unwrap());
    assert_eq!(out.len() % 4, 0);
}

#[test]
fn generator_option() {
    let module = input_variable_module();
    let words = Emitter::new()
        .options(EmitOptions { generator: 0x00ab_0002 })
        .words(&module)
        .unwrap();
    assert_eq!(words[2], 0x00ab_0002);
}

#[test]
fn variable_id_tail() {
    let words = encode(
        Instruction::new("OpTypeStruct")
            .with_result(id(9))
            .with_operand(id(2))
            .with_operand(id(3))
            .with_operand(id(4)),
    )
    .unwrap();
    assert_eq!(words, [0x0005_001e, 9, 2, 3, 4]);
}

#[test]
fn variable_tail_after_fixed_operands() {
    let words = encode(
        Instruction::new("OpEntryPoint")
            .with_enumerant("GLCompute")
            .with_operand(id(4))
            .with_string("main")
            .with_operand(id(7))
            .with_operand(id(8)),
    )
    .unwrap();
    assert_eq!(words, [0x0007_000f, 5, 4, 0x6e69_616d, 0, 7, 8]);
}

#[test]
fn empty_variable_tail() {
    let words = encode(Instruction::new("OpTypeStruct").with_result(id(9))).unwrap();
    assert_eq!(words, [0x0002_001e, 9]);
}

#[test]
fn optional_operand_may_be_omitted() {
    let load = Instruction::new("OpLoad")
        .with_type(id(1))
        .with_result(id(2))
        .with_operand(id(3));
    assert_eq!(encode(load.clone()).unwrap(), [0x0004_003d, 1, 2, 3]);

    let volatile = load.with_operand(Operand::Mask(1));
    assert_eq!(encode(volatile).unwrap(), [0x0005_003d, 1, 2, 3, 1]);
}

#[test]
fn enum_accepts_raw_literal() {
    let words = encode(Instruction::new("OpCapability").with_literal(1)).unwrap();
    assert_eq!(words, [0x0002_0011, 1]);
}

#[test]
fn mask_accepts_literal() {
    let words = encode(
        Instruction::new("OpSelectionMerge")
            .with_operand(id(5))
            .with_literal(2),
    )
    .unwrap();
    assert_eq!(words, [0x0003_00f7, 5, 2]);
}

#[test]
fn switch_targets_are_literal_id_pairs() {
    let switch = Instruction::new("OpSwitch")
        .with_operand(id(1))
        .with_operand(id(2))
        .with_literal(1)
        .with_operand(id(3))
        .with_literal(7)
        .with_operand(id(4));
    assert_eq!(
        encode(switch.clone()).unwrap(),
        [0x0007_00fb, 1, 2, 1, 3, 7, 4]
    );

    let dangling = switch.with_literal(9);
    let err = encode(dangling).unwrap_err();
    assert!(matches!(
        err,
        EncodeError::MissingOperand {
            index: 7,
            expected: OperandKind::Id,
            ..
        }
    ));
}

#[test]
fn switch_pair_order_is_checked() {
    let err = encode(
        Instruction::new("OpSwitch")
            .with_operand(id(1))
            .with_operand(id(2))
            .with_operand(id(3))
            .with_literal(1),
    )
    .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"`OpSwitch` operand 2: expected LiteralNumber, found an id"
    );
}

#[test]
fn group_member_decorate_pairs() {
    let words = encode(
        Instruction::new("OpGroupMemberDecorate")
            .with_operand(id(1))
            .with_operand(id(2))
            .with_literal(0)
            .with_operand(id(3))
            .with_literal(2),
    )
    .unwrap();
    assert_eq!(words, [0x0006_004b, 1, 2, 0, 3, 2]);
}

#[test]
fn decoration_parameters_follow_the_decoration() {
    let builtin = Instruction::new("OpDecorate")
        .with_operand(id(3))
        .with_enumerant("BuiltIn")
        .with_enumerant("FragCoord");
    assert_eq!(encode(builtin).unwrap(), [0x0004_0047, 3, 11, 15]);

    let linkage = Instruction::new("OpDecorate")
        .with_operand(id(3))
        .with_enumerant("LinkageAttributes")
        .with_string("f")
        .with_enumerant("Export");
    assert_eq!(encode(linkage).unwrap(), [0x0005_0047, 3, 41, 0x66, 0]);

    let member = Instruction::new("OpMemberDecorate")
        .with_operand(id(4))
        .with_literal(1)
        .with_enumerant("Offset")
        .with_literal(16);
    assert_eq!(encode(member).unwrap(), [0x0005_0048, 4, 1, 35, 16]);
}

#[test]
fn decoration_parameter_errors() {
    let missing = Instruction::new("OpDecorate")
        .with_operand(id(3))
        .with_enumerant("BuiltIn");
    assert!(matches!(
        encode(missing).unwrap_err(),
        EncodeError::MissingOperand {
            index: 2,
            expected: OperandKind::Enum(EnumKind::BuiltIn),
            ..
        }
    ));

    let surplus = Instruction::new("OpDecorate")
        .with_operand(id(3))
        .with_enumerant("Block")
        .with_literal(1);
    assert!(matches!(
        encode(surplus).unwrap_err(),
        EncodeError::TooManyOperands { found: 3, .. }
    ));

    let unknown = Instruction::new("OpDecorate")
        .with_operand(id(3))
        .with_enumerant("BuiltIn")
        .with_enumerant("Elsewhere");
    insta::assert_snapshot!(
        encode(unknown).unwrap_err().to_string(),
        @"`OpDecorate`: unknown BuiltIn enumerant `Elsewhere`"
    );
}

#[test]
fn unknown_decoration_takes_literals() {
    let words = encode(
        Instruction::new("OpDecorate")
            .with_operand(id(3))
            .with_literal(5000)
            .with_literal(1)
            .with_literal(2),
    )
    .unwrap();
    assert_eq!(words, [0x0005_0047, 3, 5000, 1, 2]);
}

#[test]
fn trailing_optional_string_and_enum() {
    let source = Instruction::new("OpSource")
        .with_enumerant("GLSL")
        .with_literal(450)
        .with_operand(id(1))
        .with_string("x");
    assert_eq!(encode(source).unwrap(), [0x0005_0003, 2, 450, 1, 0x78]);

    let image = Instruction::new("OpTypeImage")
        .with_result(id(2))
        .with_operand(id(1))
        .with_enumerant("2D")
        .with_literal(0)
        .with_literal(0)
        .with_literal(0)
        .with_literal(2)
        .with_enumerant("Rgba8");
    assert_eq!(
        encode(image.clone()).unwrap(),
        [0x0009_0019, 2, 1, 1, 0, 0, 0, 2, 4]
    );
    assert_eq!(
        encode(image.with_enumerant("WriteOnly")).unwrap(),
        [0x000a_0019, 2, 1, 1, 0, 0, 0, 2, 4, 1]
    );
}

#[test]
fn unknown_opcode() {
    let err = encode(Instruction::new("OpFrobnicate")).unwrap_err();
    assert!(matches!(err, EncodeError::UnknownOpcode(ref op) if op == "OpFrobnicate"));
}

#[test]
fn missing_result_id() {
    let err = encode(Instruction::new("OpTypeVoid")).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"`OpTypeVoid` requires a result id");
}

#[test]
fn missing_type_id() {
    let err = encode(Instruction::new("OpUndef").with_result(id(3))).unwrap_err();
    assert!(matches!(err, EncodeError::MissingTypeId(_)));
}

#[test]
fn operand_mismatch() {
    let err = encode(
        Instruction::new("OpTypeFloat")
            .with_result(id(1))
            .with_operand(id(32)),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        EncodeError::OperandMismatch {
            index: 0,
            expected: OperandKind::LiteralNumber,
            ..
        }
    ));
    insta::assert_snapshot!(
        err.to_string(),
        @"`OpTypeFloat` operand 0: expected LiteralNumber, found an id"
    );
}

#[test]
fn missing_required_operand() {
    let err = encode(
        Instruction::new("OpTypeInt")
            .with_result(id(1))
            .with_literal(32),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        EncodeError::MissingOperand {
            index: 1,
            expected: OperandKind::LiteralNumber,
            ..
        }
    ));
}

#[test]
fn too_many_operands() {
    let err = encode(
        Instruction::new("OpReturnValue")
            .with_operand(id(1))
            .with_operand(id(2)),
    )
    .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"`OpReturnValue` takes at most 1 operands, found 2"
    );
}

#[test]
fn unknown_enumerant() {
    let err = encode(Instruction::new("OpCapability").with_enumerant("Telepathy")).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"`OpCapability`: unknown Capability enumerant `Telepathy`"
    );
}

#[test]
fn instruction_too_long() {
    let mut inst = Instruction::new("OpTypeStruct").with_result(id(1));
    inst.operands = vec![Operand::Id(id(2)); 0xFFFF];
    let err = encode(inst).unwrap_err();
    assert!(matches!(
        err,
        EncodeError::InstructionTooLong { words: 0x10001, .. }
    ));
}

#[test]
fn custom_table() {
    let table = InstructionTable::from_json(
        r#"{
            "version": 66304,
            "instructions": {
                "OpTypeVoid": { "opcode": 19, "result": true, "class": "Type" }
            }
        }"#,
    )
    .unwrap();
    let emitter = Emitter::with_table(&table);
    let words = emitter
        .instruction(&Instruction::new("OpTypeVoid").with_result(id(1)))
        .unwrap();
    assert_eq!(words, [0x0002_0013, 1]);
    assert!(emitter.instruction(&Instruction::new("OpTypeBool")).is_err());
}
