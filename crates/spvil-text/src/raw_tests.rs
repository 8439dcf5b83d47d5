use indoc::indoc;
use spvil_core::ids::id;
use spvil_core::test_utils::{build_module, fragment_shader, input_variable_module};
use spvil_core::{Colors, Instruction};

use crate::{TextOptions, encode_text, write_raw};

#[test]
fn input_variable_module_raw() {
    let text = write_raw(&input_variable_module(), Colors::OFF);
    insta::assert_snapshot!(text, @r#"
    OpName %5, "var"
    OpName %6, "main"

    OpDecorate %5, Location, 0

    %1 = OpTypeVoid
    %2 = OpTypeFunction %1
    %3 = OpTypeFloat 32
    %4 = OpTypePointer Input, %3

    %5 = OpVariable %4 Input

    %6 = OpFunction %1 0, %2
    %7 = OpLabel
    OpFunctionEnd
    "#);
}

#[test]
fn fragment_shader_raw() {
    let text = write_raw(&fragment_shader(), Colors::OFF);
    insta::assert_snapshot!(text, @r#"
    OpSource GLSL, 450
    OpMemoryModel Logical, GLSL450
    OpEntryPoint Fragment, %4, "main", %9, %11
    OpExecutionMode %4, OriginUpperLeft

    OpCapability Shader
    %1 = OpExtInstImport "GLSL.std.450"

    OpName %4, "main"
    OpName %14, "scale(vf4;"
    OpName %9, "frag"
    OpName %11, "color"

    OpDecorate %9, Location, 0
    OpDecorate %11, Location, 0

    %2 = OpTypeVoid
    %3 = OpTypeFunction %2
    %6 = OpTypeFloat 32
    %7 = OpTypeVector %6, 4
    %8 = OpTypePointer Output, %7
    %10 = OpTypePointer Input, %7
    %12 = OpTypeFunction %7, %7

    %13 = OpConstant %6 1073741824

    %9 = OpVariable %8 Output
    %11 = OpVariable %10 Input

    %4 = OpFunction %2 0, %3
    %5 = OpLabel
      %16 = OpLoad %7 %11
      %17 = OpFunctionCall %7 %14, %16
      OpStore %9, %17
      OpReturn
    OpFunctionEnd

    %14 = OpFunction %7 0, %12
    %15 = OpFunctionParameter %7
    %18 = OpLabel
      %19 = OpVectorTimesScalar %7 %15, %13
      OpReturnValue %19
    OpFunctionEnd
    "#);
}

#[test]
fn strings_are_escaped() {
    let module = build_module(vec![
        Instruction::new("OpName")
            .with_operand(id(1))
            .with_string(r#"a"b\c"#),
        Instruction::new("OpTypeVoid").with_result(id(1)),
    ]);
    let text = write_raw(&module, Colors::OFF);
    assert_eq!(
        text,
        indoc! {r#"
            OpName %1, "a\"b\\c"

            %1 = OpTypeVoid
        "#}
    );
}

#[test]
fn empty_groups_leave_no_gaps() {
    let module = build_module(vec![
        Instruction::new("OpCapability").with_enumerant("Shader"),
        Instruction::new("OpTypeBool").with_result(id(1)),
    ]);
    let text = write_raw(&module, Colors::OFF);
    assert_eq!(text, "OpCapability Shader\n\n%1 = OpTypeBool\n");
}

#[test]
fn empty_module_is_empty_text() {
    let module = build_module(Vec::new());
    assert_eq!(write_raw(&module, Colors::OFF), "");
}

#[test]
fn raw_mode_through_encode_text() {
    let module = fragment_shader();
    let out = encode_text(&module, &TextOptions::raw()).unwrap();

    assert_eq!(out.text, write_raw(&module, Colors::OFF));
    assert!(out.diagnostics.is_empty());
    assert!(!out.text.contains('@'));
}

#[test]
fn raw_colors_only_strings() {
    let module = input_variable_module();
    let text = write_raw(&module, Colors::ON);
    assert!(text.starts_with("OpName %5, \x1b[32m\"var\"\x1b[0m\n"));
}
