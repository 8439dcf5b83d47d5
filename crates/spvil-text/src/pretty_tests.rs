use indoc::indoc;
use spvil_core::ids::id;
use spvil_core::test_utils::{build_module, fragment_shader, input_variable_module, struct_module};
use spvil_core::{Colors, DiagnosticKind, Instruction, Module, Operand};

use crate::{TextError, TextMode, TextOptions, encode_text, needed_types, write_pretty};

fn pretty(module: &Module) -> String {
    write_pretty(module, Colors::OFF).unwrap().0
}

#[test]
fn input_variable_module_pretty() {
    assert_eq!(
        pretty(&input_variable_module()),
        "@var = Input float Location(0)\n\ndefine void @main() {\n%7:\n}\n"
    );
}

#[test]
fn fragment_shader_pretty() {
    let (text, diagnostics) = write_pretty(&fragment_shader(), Colors::OFF).unwrap();
    insta::assert_snapshot!(text, @r#"
    OpSource GLSL, 450
    OpMemoryModel Logical, GLSL450
    OpEntryPoint Fragment, @main, "main", @frag, @color
    OpExecutionMode @main, OriginUpperLeft

    OpCapability Shader
    %1 = OpExtInstImport "GLSL.std.450"

    %13 = OpConstant float 1073741824

    @frag = Output <4 x float> Location(0)
    @color = Input <4 x float> Location(0)

    define void @main() {
    %5:
      %16 = OpLoad <4 x float> @color
      %17 = OpFunctionCall <4 x float> @scale, %16
      OpStore @frag, %17
      OpReturn
    }

    define <4 x float> @scale(<4 x float> @15) {
    %18:
      %19 = OpVectorTimesScalar <4 x float> @15, %13
      OpReturnValue %19
    }
    "#);

    assert_eq!(diagnostics.len(), 1);
    let diag = diagnostics.iter().next().unwrap();
    assert_eq!(diag.kind, DiagnosticKind::TruncatedSymbolName);
    assert_eq!(diag.message, r#"truncated symbol name "scale(vf4;" to "scale""#);
}

#[test]
fn unused_types_are_pruned() {
    let module = struct_module();
    let text = pretty(&module);
    insta::assert_snapshot!(text, @r"
    %6 = OpTypeArray float, %5
    %7 = OpTypeStruct %6, float

    %5 = OpConstant u32 4

    @data = Private %7

    define void @main() {
    %12:
      OpReturn
    }
    ");

    let needed = needed_types(&module).unwrap();
    for ty in [1, 2, 3, 4, 6, 7, 8, 9].map(id) {
        let declared = text.contains(&format!("{ty} = OpType"));
        assert_eq!(declared, needed.contains(ty), "{ty}");
    }
}

#[test]
fn only_the_returned_struct_is_declared() {
    let module = build_module(vec![
        Instruction::new("OpName").with_operand(id(6)).with_string("make"),
        Instruction::new("OpTypeFloat")
            .with_result(id(1))
            .with_literal(32),
        Instruction::new("OpTypeStruct")
            .with_result(id(2))
            .with_operand(id(1)),
        Instruction::new("OpTypeStruct")
            .with_result(id(3))
            .with_operand(id(1))
            .with_operand(id(1)),
        Instruction::new("OpTypeStruct")
            .with_result(id(4))
            .with_operand(id(1))
            .with_operand(id(1))
            .with_operand(id(1)),
        Instruction::new("OpTypeFunction")
            .with_result(id(5))
            .with_operand(id(3)),
        Instruction::new("OpConstantNull")
            .with_type(id(3))
            .with_result(id(7)),
        Instruction::new("OpFunction")
            .with_type(id(3))
            .with_result(id(6))
            .with_operand(Operand::Mask(0))
            .with_operand(id(5)),
        Instruction::new("OpLabel").with_result(id(8)),
        Instruction::new("OpReturnValue").with_operand(id(7)),
        Instruction::new("OpFunctionEnd"),
    ]);

    insta::assert_snapshot!(pretty(&module), @r"
    %3 = OpTypeStruct float, float

    %7 = OpConstantNull %3

    define %3 @make() {
    %8:
      OpReturnValue %7
    }
    ");
}

#[test]
fn blocks_are_separated() {
    let module = build_module(vec![
        Instruction::new("OpName").with_operand(id(3)).with_string("f"),
        Instruction::new("OpTypeVoid").with_result(id(1)),
        Instruction::new("OpTypeFunction")
            .with_result(id(2))
            .with_operand(id(1)),
        Instruction::new("OpFunction")
            .with_type(id(1))
            .with_result(id(3))
            .with_operand(Operand::Mask(0))
            .with_operand(id(2)),
        Instruction::new("OpLabel").with_result(id(4)),
        Instruction::new("OpBranch").with_operand(id(5)),
        Instruction::new("OpLabel").with_result(id(5)),
        Instruction::new("OpReturn"),
        Instruction::new("OpFunctionEnd"),
    ]);

    assert_eq!(
        pretty(&module),
        indoc! {"

            define void @f() {
            %4:
              OpBranch %5

            %5:
              OpReturn
            }
        "}
    );
}

#[test]
fn decorations_follow_result_ids() {
    let module = build_module(vec![
        Instruction::new("OpDecorate")
            .with_operand(id(2))
            .with_enumerant("ArrayStride")
            .with_literal(16),
        Instruction::new("OpDecorate")
            .with_operand(id(3))
            .with_enumerant("Block"),
        Instruction::new("OpTypeFloat")
            .with_result(id(1))
            .with_literal(32),
        Instruction::new("OpTypeRuntimeArray")
            .with_result(id(2))
            .with_operand(id(1)),
        Instruction::new("OpTypeStruct")
            .with_result(id(3))
            .with_operand(id(2)),
        Instruction::new("OpTypePointer")
            .with_result(id(4))
            .with_enumerant("Uniform")
            .with_operand(id(3)),
        Instruction::new("OpVariable")
            .with_type(id(4))
            .with_result(id(5))
            .with_enumerant("Uniform"),
    ]);

    insta::assert_snapshot!(pretty(&module), @r"
    %2 = OpTypeRuntimeArray ArrayStride(16) float
    %3 = OpTypeStruct Block %2

    @5 = Uniform %3
    ");
}

#[test]
fn numeric_enum_decoration_parameters_print_by_name() {
    let module = build_module(vec![
        Instruction::new("OpDecorate")
            .with_operand(id(3))
            .with_enumerant("BuiltIn")
            .with_literal(0),
        Instruction::new("OpTypeFloat")
            .with_result(id(1))
            .with_literal(32),
        Instruction::new("OpTypePointer")
            .with_result(id(2))
            .with_enumerant("Output")
            .with_operand(id(1)),
        Instruction::new("OpVariable")
            .with_type(id(2))
            .with_result(id(3))
            .with_enumerant("Output"),
    ]);

    assert_eq!(pretty(&module), "@3 = Output float BuiltIn(Position)\n");
}

#[test]
fn pretty_is_idempotent() {
    let module = fragment_shader();
    let options = TextOptions::default();
    let first = encode_text(&module, &options).unwrap();
    let second = encode_text(&module, &options).unwrap();
    assert_eq!(first, second);
    assert_eq!(options.mode, TextMode::Pretty);
}

#[test]
fn invalid_symbol_name_fails() {
    let module = build_module(vec![
        Instruction::new("OpName").with_operand(id(3)).with_string("(anon)"),
        Instruction::new("OpTypeVoid").with_result(id(1)),
        Instruction::new("OpTypeFunction")
            .with_result(id(2))
            .with_operand(id(1)),
        Instruction::new("OpFunction")
            .with_type(id(1))
            .with_result(id(3))
            .with_operand(Operand::Mask(0))
            .with_operand(id(2)),
        Instruction::new("OpLabel").with_result(id(4)),
        Instruction::new("OpReturn"),
        Instruction::new("OpFunctionEnd"),
    ]);

    let err = encode_text(&module, &TextOptions::default()).unwrap_err();
    assert_eq!(
        err,
        TextError::InvalidSymbolName {
            id: id(3),
            name: "(anon)".to_string(),
        }
    );
    // raw mode never looks at debug names
    assert!(encode_text(&module, &TextOptions::raw()).is_ok());
}

#[test]
fn global_without_pointer_type_fails() {
    let module = build_module(vec![
        Instruction::new("OpTypeFloat")
            .with_result(id(1))
            .with_literal(32),
        Instruction::new("OpVariable")
            .with_type(id(1))
            .with_result(id(2))
            .with_enumerant("Input"),
    ]);

    let err = write_pretty(&module, Colors::OFF).unwrap_err();
    insta::assert_snapshot!(err, @"malformed global variable `%2 = OpVariable %1 Input`: type is not a pointer");
}

#[test]
fn global_storage_class_must_match_pointer() {
    let module = build_module(vec![
        Instruction::new("OpTypeFloat")
            .with_result(id(1))
            .with_literal(32),
        Instruction::new("OpTypePointer")
            .with_result(id(2))
            .with_enumerant("Input")
            .with_operand(id(1)),
        Instruction::new("OpVariable")
            .with_type(id(2))
            .with_result(id(3))
            .with_enumerant("Output"),
    ]);

    let err = write_pretty(&module, Colors::OFF).unwrap_err();
    assert!(matches!(err, TextError::MalformedGlobal { .. }));
}

#[test]
fn colored_symbols_and_decorations() {
    let module = input_variable_module();
    let options = TextOptions::default().colors(Colors::ON);
    let out = encode_text(&module, &options).unwrap();

    let first = out.text.lines().next().unwrap();
    assert_eq!(
        first,
        "\x1b[34m@var\x1b[0m = Input float \x1b[2mLocation(0)\x1b[0m"
    );
}

#[test]
fn decoded_module_prints_the_same() {
    let module = fragment_shader();
    let bytes = spvil_bytecode::emit(&module).unwrap();
    let decoded = spvil_bytecode::decode(&bytes).unwrap();

    assert_eq!(pretty(&decoded), pretty(&module));
}
