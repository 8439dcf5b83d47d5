//! Sample modules shared by the test suites of the workspace crates.

use crate::ids::id;
use crate::{Instruction, Module, ModuleBuilder, Operand};

/// Build a module from `insts`, panicking on invalid input.
pub fn build_module(insts: impl IntoIterator<Item = Instruction>) -> Module {
    let mut builder = ModuleBuilder::new();
    builder.extend(insts).expect("sample instructions are valid");
    builder.build().expect("sample module is valid")
}

/// One `Input` float variable at location 0 and an empty `void main()`.
///
/// ```text
/// OpName %5 "var"
/// OpName %6 "main"
/// OpDecorate %5 Location 0
/// %1 = OpTypeVoid
/// %2 = OpTypeFunction %1
/// %3 = OpTypeFloat 32
/// %4 = OpTypePointer Input %3
/// %5 = OpVariable %4 Input
/// %6 = OpFunction %1 0, %2
/// %7 = OpLabel
/// OpFunctionEnd
/// ```
pub fn input_variable_module() -> Module {
    build_module(vec![
        Instruction::new("OpName").with_operand(id(5)).with_string("var"),
        Instruction::new("OpName").with_operand(id(6)).with_string("main"),
        Instruction::new("OpDecorate")
            .with_operand(id(5))
            .with_enumerant("Location")
            .with_literal(0),
        Instruction::new("OpTypeVoid").with_result(id(1)),
        Instruction::new("OpTypeFunction")
            .with_result(id(2))
            .with_operand(id(1)),
        Instruction::new("OpTypeFloat")
            .with_result(id(3))
            .with_literal(32),
        Instruction::new("OpTypePointer")
            .with_result(id(4))
            .with_enumerant("Input")
            .with_operand(id(3)),
        Instruction::new("OpVariable")
            .with_type(id(4))
            .with_result(id(5))
            .with_enumerant("Input"),
        Instruction::new("OpFunction")
            .with_type(id(1))
            .with_result(id(6))
            .with_operand(Operand::Mask(0))
            .with_operand(id(2)),
        Instruction::new("OpLabel").with_result(id(7)),
        Instruction::new("OpFunctionEnd"),
    ])
}

/// A fragment shader that scales its input color through a helper function.
///
/// The helper carries a mangled debug name, `scale(vf4;`.
pub fn fragment_shader() -> Module {
    build_module(vec![
        Instruction::new("OpCapability").with_enumerant("Shader"),
        Instruction::new("OpExtInstImport")
            .with_result(id(1))
            .with_string("GLSL.std.450"),
        Instruction::new("OpMemoryModel")
            .with_enumerant("Logical")
            .with_enumerant("GLSL450"),
        Instruction::new("OpEntryPoint")
            .with_enumerant("Fragment")
            .with_operand(id(4))
            .with_string("main")
            .with_operand(id(9))
            .with_operand(id(11)),
        Instruction::new("OpExecutionMode")
            .with_operand(id(4))
            .with_enumerant("OriginUpperLeft"),
        Instruction::new("OpSource")
            .with_enumerant("GLSL")
            .with_literal(450),
        Instruction::new("OpName").with_operand(id(4)).with_string("main"),
        Instruction::new("OpName")
            .with_operand(id(14))
            .with_string("scale(vf4;"),
        Instruction::new("OpName").with_operand(id(9)).with_string("frag"),
        Instruction::new("OpName").with_operand(id(11)).with_string("color"),
        Instruction::new("OpDecorate")
            .with_operand(id(9))
            .with_enumerant("Location")
            .with_literal(0),
        Instruction::new("OpDecorate")
            .with_operand(id(11))
            .with_enumerant("Location")
            .with_literal(0),
        Instruction::new("OpTypeVoid").with_result(id(2)),
        Instruction::new("OpTypeFunction")
            .with_result(id(3))
            .with_operand(id(2)),
        Instruction::new("OpTypeFloat")
            .with_result(id(6))
            .with_literal(32),
        Instruction::new("OpTypeVector")
            .with_result(id(7))
            .with_operand(id(6))
            .with_literal(4),
        Instruction::new("OpTypePointer")
            .with_result(id(8))
            .with_enumerant("Output")
            .with_operand(id(7)),
        Instruction::new("OpTypePointer")
            .with_result(id(10))
            .with_enumerant("Input")
            .with_operand(id(7)),
        Instruction::new("OpTypeFunction")
            .with_result(id(12))
            .with_operand(id(7))
            .with_operand(id(7)),
        Instruction::new("OpConstant")
            .with_type(id(6))
            .with_result(id(13))
            .with_literal(0x4000_0000),
        Instruction::new("OpVariable")
            .with_type(id(8))
            .with_result(id(9))
            .with_enumerant("Output"),
        Instruction::new("OpVariable")
            .with_type(id(10))
            .with_result(id(11))
            .with_enumerant("Input"),
        Instruction::new("OpFunction")
            .with_type(id(2))
            .with_result(id(4))
            .with_operand(Operand::Mask(0))
            .with_operand(id(3)),
        Instruction::new("OpLabel").with_result(id(5)),
        Instruction::new("OpLoad")
            .with_type(id(7))
            .with_result(id(16))
            .with_operand(id(11)),
        Instruction::new("OpFunctionCall")
            .with_type(id(7))
            .with_result(id(17))
            .with_operand(id(14))
            .with_operand(id(16)),
        Instruction::new("OpStore")
            .with_operand(id(9))
            .with_operand(id(17)),
        Instruction::new("OpReturn"),
        Instruction::new("OpFunctionEnd"),
        Instruction::new("OpFunction")
            .with_type(id(7))
            .with_result(id(14))
            .with_operand(Operand::Mask(0))
            .with_operand(id(12)),
        Instruction::new("OpFunctionParameter")
            .with_type(id(7))
            .with_result(id(15)),
        Instruction::new("OpLabel").with_result(id(18)),
        Instruction::new("OpVectorTimesScalar")
            .with_type(id(7))
            .with_result(id(19))
            .with_operand(id(15))
            .with_operand(id(13)),
        Instruction::new("OpReturnValue").with_operand(id(19)),
        Instruction::new("OpFunctionEnd"),
    ])
}

/// A private global of an unnamed struct type, next to an unused struct.
///
/// ```text
/// OpName %10 "data"
/// OpName %11 "main"
/// %1 = OpTypeVoid
/// %2 = OpTypeFunction %1
/// %3 = OpTypeFloat 32
/// %4 = OpTypeInt 32 0
/// %6 = OpTypeArray %3 %5
/// %7 = OpTypeStruct %6 %3
/// %8 = OpTypeStruct %3
/// %9 = OpTypePointer Private %7
/// %5 = OpConstant %4 4
/// %10 = OpVariable %9 Private
/// %11 = OpFunction %1 0, %2
/// %12 = OpLabel
/// OpReturn
/// OpFunctionEnd
/// ```
pub fn struct_module() -> Module {
    build_module(vec![
        Instruction::new("OpName").with_operand(id(10)).with_string("data"),
        Instruction::new("OpName").with_operand(id(11)).with_string("main"),
        Instruction::new("OpTypeVoid").with_result(id(1)),
        Instruction::new("OpTypeFunction")
            .with_result(id(2))
            .with_operand(id(1)),
        Instruction::new("OpTypeFloat")
            .with_result(id(3))
            .with_literal(32),
        Instruction::new("OpTypeInt")
            .with_result(id(4))
            .with_literal(32)
            .with_literal(0),
        Instruction::new("OpTypeArray")
            .with_result(id(6))
            .with_operand(id(3))
            .with_operand(id(5)),
        Instruction::new("OpTypeStruct")
            .with_result(id(7))
            .with_operand(id(6))
            .with_operand(id(3)),
        Instruction::new("OpTypeStruct")
            .with_result(id(8))
            .with_operand(id(3)),
        Instruction::new("OpTypePointer")
            .with_result(id(9))
            .with_enumerant("Private")
            .with_operand(id(7)),
        Instruction::new("OpConstant")
            .with_type(id(4))
            .with_result(id(5))
            .with_literal(4),
        Instruction::new("OpVariable")
            .with_type(id(9))
            .with_result(id(10))
            .with_enumerant("Private"),
        Instruction::new("OpFunction")
            .with_type(id(1))
            .with_result(id(11))
            .with_operand(Operand::Mask(0))
            .with_operand(id(2)),
        Instruction::new("OpLabel").with_result(id(12)),
        Instruction::new("OpReturn"),
        Instruction::new("OpFunctionEnd"),
    ])
}
