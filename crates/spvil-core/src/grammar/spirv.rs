//! Built-in SPIR-V 1.0 instruction table.
//!
//! Every 1.0 instruction is listed. Later versions and extensions can be
//! handled by loading a table with [`InstructionTable::from_json`].

use std::sync::LazyLock;

use super::enums::{EnumKind, MaskKind};
use super::types::{InstructionDesc, InstructionTable, OpClass, OperandKind};
use crate::Operand;

/// SPIR-V 1.0, as written into header word 1.
pub const SPIRV_VERSION: u32 = 0x0001_0000;

use OpClass::*;
use OperandKind::{Id, LiteralNumber as Lit, LiteralString as Str, OptionalId, OptionalString};
use OperandKind::{DecorationOperands as Params, VariableIds as Ids, VariableLiterals as Lits};
use OperandKind::{VariableIdLiteralPairs as IdLitPairs, VariableLiteralIdPairs as LitIdPairs};

const fn e(kind: EnumKind) -> OperandKind {
    OperandKind::Enum(kind)
}

const fn oe(kind: EnumKind) -> OperandKind {
    OperandKind::OptionalEnum(kind)
}

const fn m(kind: MaskKind) -> OperandKind {
    OperandKind::Mask(kind)
}

const fn om(kind: MaskKind) -> OperandKind {
    OperandKind::OptionalMask(kind)
}

/// Result shape: `(has_type, has_result)`.
type Shape = (bool, bool);
const NO: Shape = (false, false);
const R: Shape = (false, true);
const TR: Shape = (true, true);

type Row = (&'static str, u16, Shape, OpClass, &'static [OperandKind]);

const UNARY: &[OperandKind] = &[Id];
const BINARY: &[OperandKind] = &[Id, Id];
const TERNARY: &[OperandKind] = &[Id, Id, Id];
const QUATERNARY: &[OperandKind] = &[Id, Id, Id, Id];
const IDS5: &[OperandKind] = &[Id, Id, Id, Id, Id];
const IDS6: &[OperandKind] = &[Id, Id, Id, Id, Id, Id];

const IO: MaskKind = MaskKind::ImageOperands;
const SAMPLE_IMPLICIT: &[OperandKind] = &[Id, Id, om(IO), Ids];
const SAMPLE_EXPLICIT: &[OperandKind] = &[Id, Id, m(IO), Ids];
const SAMPLE_DREF_IMPLICIT: &[OperandKind] = &[Id, Id, Id, om(IO), Ids];
const SAMPLE_DREF_EXPLICIT: &[OperandKind] = &[Id, Id, Id, m(IO), Ids];

const GROUP_REDUCE: &[OperandKind] = &[Id, e(EnumKind::GroupOperation), Id];

#[rustfmt::skip]
const ROWS: &[Row] = &[
    ("OpNop", 0, NO, Body, &[]),
    ("OpUndef", 1, TR, Constant, &[]),
    ("OpSourceContinued", 2, NO, Initial, &[Str]),
    ("OpSource", 3, NO, Initial, &[e(EnumKind::SourceLanguage), Lit, OptionalId, OptionalString]),
    ("OpSourceExtension", 4, NO, Initial, &[Str]),
    ("OpName", 5, NO, Debug, &[Id, Str]),
    ("OpMemberName", 6, NO, Debug, &[Id, Lit, Str]),
    ("OpString", 7, R, Debug, &[Str]),
    ("OpLine", 8, NO, Debug, &[Id, Lit, Lit]),
    ("OpExtension", 10, NO, Initial, &[Str]),
    ("OpExtInstImport", 11, R, Initial, &[Str]),
    ("OpExtInst", 12, TR, Body, &[Id, Lit, Ids]),
    ("OpMemoryModel", 14, NO, Initial, &[e(EnumKind::AddressingModel), e(EnumKind::MemoryModel)]),
    ("OpEntryPoint", 15, NO, Initial, &[e(EnumKind::ExecutionModel), Id, Str, Ids]),
    ("OpExecutionMode", 16, NO, Initial, &[Id, e(EnumKind::ExecutionMode), Lits]),
    ("OpCapability", 17, NO, Initial, &[e(EnumKind::Capability)]),
    ("OpTypeVoid", 19, R, Type, &[]),
    ("OpTypeBool", 20, R, Type, &[]),
    ("OpTypeInt", 21, R, Type, &[Lit, Lit]),
    ("OpTypeFloat", 22, R, Type, &[Lit]),
    ("OpTypeVector", 23, R, Type, &[Id, Lit]),
    ("OpTypeMatrix", 24, R, Type, &[Id, Lit]),
    ("OpTypeImage", 25, R, Type, &[Id, e(EnumKind::Dim), Lit, Lit, Lit, Lit, e(EnumKind::ImageFormat), oe(EnumKind::AccessQualifier)]),
    ("OpTypeSampler", 26, R, Type, &[]),
    ("OpTypeSampledImage", 27, R, Type, &[Id]),
    ("OpTypeArray", 28, R, Type, &[Id, Id]),
    ("OpTypeRuntimeArray", 29, R, Type, &[Id]),
    ("OpTypeStruct", 30, R, Type, &[Ids]),
    ("OpTypeOpaque", 31, R, Type, &[Str]),
    ("OpTypePointer", 32, R, Type, &[e(EnumKind::StorageClass), Id]),
    ("OpTypeFunction", 33, R, Type, &[Id, Ids]),
    ("OpTypeEvent", 34, R, Type, &[]),
    ("OpTypeDeviceEvent", 35, R, Type, &[]),
    ("OpTypeReserveId", 36, R, Type, &[]),
    ("OpTypeQueue", 37, R, Type, &[]),
    ("OpTypePipe", 38, R, Type, &[e(EnumKind::AccessQualifier)]),
    ("OpTypeForwardPointer", 39, NO, Type, &[Id, e(EnumKind::StorageClass)]),
    ("OpConstantTrue", 41, TR, Constant, &[]),
    ("OpConstantFalse", 42, TR, Constant, &[]),
    ("OpConstant", 43, TR, Constant, &[Lits]),
    ("OpConstantComposite", 44, TR, Constant, &[Ids]),
    ("OpConstantSampler", 45, TR, Constant, &[e(EnumKind::SamplerAddressingMode), Lit, e(EnumKind::SamplerFilterMode)]),
    ("OpConstantNull", 46, TR, Constant, &[]),
    ("OpSpecConstantTrue", 48, TR, Constant, &[]),
    ("OpSpecConstantFalse", 49, TR, Constant, &[]),
    ("OpSpecConstant", 50, TR, Constant, &[Lits]),
    ("OpSpecConstantComposite", 51, TR, Constant, &[Ids]),
    ("OpSpecConstantOp", 52, TR, Constant, &[Lit, Ids]),
    ("OpFunction", 54, TR, FunctionBegin, &[m(MaskKind::FunctionControl), Id]),
    ("OpFunctionParameter", 55, TR, FunctionParameter, &[]),
    ("OpFunctionEnd", 56, NO, FunctionEnd, &[]),
    ("OpFunctionCall", 57, TR, Body, &[Id, Ids]),
    ("OpVariable", 59, TR, Variable, &[e(EnumKind::StorageClass), OptionalId]),
    ("OpImageTexelPointer", 60, TR, Body, TERNARY),
    ("OpLoad", 61, TR, Body, &[Id, om(MaskKind::MemoryAccess)]),
    ("OpStore", 62, NO, Body, &[Id, Id, om(MaskKind::MemoryAccess)]),
    ("OpCopyMemory", 63, NO, Body, &[Id, Id, om(MaskKind::MemoryAccess)]),
    ("OpCopyMemorySized", 64, NO, Body, &[Id, Id, Id, om(MaskKind::MemoryAccess)]),
    ("OpAccessChain", 65, TR, Body, &[Id, Ids]),
    ("OpInBoundsAccessChain", 66, TR, Body, &[Id, Ids]),
    ("OpPtrAccessChain", 67, TR, Body, &[Id, Id, Ids]),
    ("OpArrayLength", 68, TR, Body, &[Id, Lit]),
    ("OpGenericPtrMemSemantics", 69, TR, Body, UNARY),
    ("OpInBoundsPtrAccessChain", 70, TR, Body, &[Id, Id, Ids]),
    ("OpDecorate", 71, NO, Annotation, &[Id, e(EnumKind::Decoration), Params]),
    ("OpMemberDecorate", 72, NO, Annotation, &[Id, Lit, e(EnumKind::Decoration), Params]),
    ("OpDecorationGroup", 73, R, Annotation, &[]),
    ("OpGroupDecorate", 74, NO, Annotation, &[Id, Ids]),
    ("OpGroupMemberDecorate", 75, NO, Annotation, &[Id, IdLitPairs]),
    ("OpVectorExtractDynamic", 77, TR, Body, BINARY),
    ("OpVectorInsertDynamic", 78, TR, Body, TERNARY),
    ("OpVectorShuffle", 79, TR, Body, &[Id, Id, Lits]),
    ("OpCompositeConstruct", 80, TR, Body, &[Ids]),
    ("OpCompositeExtract", 81, TR, Body, &[Id, Lits]),
    ("OpCompositeInsert", 82, TR, Body, &[Id, Id, Lits]),
    ("OpCopyObject", 83, TR, Body, UNARY),
    ("OpTranspose", 84, TR, Body, UNARY),
    ("OpSampledImage", 86, TR, Body, BINARY),
    ("OpImageSampleImplicitLod", 87, TR, Body, SAMPLE_IMPLICIT),
    ("OpImageSampleExplicitLod", 88, TR, Body, SAMPLE_EXPLICIT),
    ("OpImageSampleDrefImplicitLod", 89, TR, Body, SAMPLE_DREF_IMPLICIT),
    ("OpImageSampleDrefExplicitLod", 90, TR, Body, SAMPLE_DREF_EXPLICIT),
    ("OpImageSampleProjImplicitLod", 91, TR, Body, SAMPLE_IMPLICIT),
    ("OpImageSampleProjExplicitLod", 92, TR, Body, SAMPLE_EXPLICIT),
    ("OpImageSampleProjDrefImplicitLod", 93, TR, Body, SAMPLE_DREF_IMPLICIT),
    ("OpImageSampleProjDrefExplicitLod", 94, TR, Body, SAMPLE_DREF_EXPLICIT),
    ("OpImageFetch", 95, TR, Body, SAMPLE_IMPLICIT),
    ("OpImageGather", 96, TR, Body, SAMPLE_DREF_IMPLICIT),
    ("OpImageDrefGather", 97, TR, Body, SAMPLE_DREF_IMPLICIT),
    ("OpImageRead", 98, TR, Body, SAMPLE_IMPLICIT),
    ("OpImageWrite", 99, NO, Body, SAMPLE_DREF_IMPLICIT),
    ("OpImage", 100, TR, Body, UNARY),
    ("OpImageQueryFormat", 101, TR, Body, UNARY),
    ("OpImageQueryOrder", 102, TR, Body, UNARY),
    ("OpImageQuerySizeLod", 103, TR, Body, BINARY),
    ("OpImageQuerySize", 104, TR, Body, UNARY),
    ("OpImageQueryLod", 105, TR, Body, BINARY),
    ("OpImageQueryLevels", 106, TR, Body, UNARY),
    ("OpImageQuerySamples", 107, TR, Body, UNARY),
    ("OpConvertFToU", 109, TR, Body, UNARY),
    ("OpConvertFToS", 110, TR, Body, UNARY),
    ("OpConvertSToF", 111, TR, Body, UNARY),
    ("OpConvertUToF", 112, TR, Body, UNARY),
    ("OpUConvert", 113, TR, Body, UNARY),
    ("OpSConvert", 114, TR, Body, UNARY),
    ("OpFConvert", 115, TR, Body, UNARY),
    ("OpQuantizeToF16", 116, TR, Body, UNARY),
    ("OpConvertPtrToU", 117, TR, Body, UNARY),
    ("OpSatConvertSToU", 118, TR, Body, UNARY),
    ("OpSatConvertUToS", 119, TR, Body, UNARY),
    ("OpConvertUToPtr", 120, TR, Body, UNARY),
    ("OpPtrCastToGeneric", 121, TR, Body, UNARY),
    ("OpGenericCastToPtr", 122, TR, Body, UNARY),
    ("OpGenericCastToPtrExplicit", 123, TR, Body, &[Id, e(EnumKind::StorageClass)]),
    ("OpBitcast", 124, TR, Body, UNARY),
    ("OpSNegate", 126, TR, Body, UNARY),
    ("OpFNegate", 127, TR, Body, UNARY),
    ("OpIAdd", 128, TR, Body, BINARY),
    ("OpFAdd", 129, TR, Body, BINARY),
    ("OpISub", 130, TR, Body, BINARY),
    ("OpFSub", 131, TR, Body, BINARY),
    ("OpIMul", 132, TR, Body, BINARY),
    ("OpFMul", 133, TR, Body, BINARY),
    ("OpUDiv", 134, TR, Body, BINARY),
    ("OpSDiv", 135, TR, Body, BINARY),
    ("OpFDiv", 136, TR, Body, BINARY),
    ("OpUMod", 137, TR, Body, BINARY),
    ("OpSRem", 138, TR, Body, BINARY),
    ("OpSMod", 139, TR, Body, BINARY),
    ("OpFRem", 140, TR, Body, BINARY),
    ("OpFMod", 141, TR, Body, BINARY),
    ("OpVectorTimesScalar", 142, TR, Body, BINARY),
    ("OpMatrixTimesScalar", 143, TR, Body, BINARY),
    ("OpVectorTimesMatrix", 144, TR, Body, BINARY),
    ("OpMatrixTimesVector", 145, TR, Body, BINARY),
    ("OpMatrixTimesMatrix", 146, TR, Body, BINARY),
    ("OpOuterProduct", 147, TR, Body, BINARY),
    ("OpDot", 148, TR, Body, BINARY),
    ("OpIAddCarry", 149, TR, Body, BINARY),
    ("OpISubBorrow", 150, TR, Body, BINARY),
    ("OpUMulExtended", 151, TR, Body, BINARY),
    ("OpSMulExtended", 152, TR, Body, BINARY),
    ("OpAny", 154, TR, Body, UNARY),
    ("OpAll", 155, TR, Body, UNARY),
    ("OpIsNan", 156, TR, Body, UNARY),
    ("OpIsInf", 157, TR, Body, UNARY),
    ("OpIsFinite", 158, TR, Body, UNARY),
    ("OpIsNormal", 159, TR, Body, UNARY),
    ("OpSignBitSet", 160, TR, Body, UNARY),
    ("OpLessOrGreater", 161, TR, Body, BINARY),
    ("OpOrdered", 162, TR, Body, BINARY),
    ("OpUnordered", 163, TR, Body, BINARY),
    ("OpLogicalEqual", 164, TR, Body, BINARY),
    ("OpLogicalNotEqual", 165, TR, Body, BINARY),
    ("OpLogicalOr", 166, TR, Body, BINARY),
    ("OpLogicalAnd", 167, TR, Body, BINARY),
    ("OpLogicalNot", 168, TR, Body, UNARY),
    ("OpSelect", 169, TR, Body, TERNARY),
    ("OpIEqual", 170, TR, Body, BINARY),
    ("OpINotEqual", 171, TR, Body, BINARY),
    ("OpUGreaterThan", 172, TR, Body, BINARY),
    ("OpSGreaterThan", 173, TR, Body, BINARY),
    ("OpUGreaterThanEqual", 174, TR, Body, BINARY),
    ("OpSGreaterThanEqual", 175, TR, Body, BINARY),
    ("OpULessThan", 176, TR, Body, BINARY),
    ("OpSLessThan", 177, TR, Body, BINARY),
    ("OpULessThanEqual", 178, TR, Body, BINARY),
    ("OpSLessThanEqual", 179, TR, Body, BINARY),
    ("OpFOrdEqual", 180, TR, Body, BINARY),
    ("OpFUnordEqual", 181, TR, Body, BINARY),
    ("OpFOrdNotEqual", 182, TR, Body, BINARY),
    ("OpFUnordNotEqual", 183, TR, Body, BINARY),
    ("OpFOrdLessThan", 184, TR, Body, BINARY),
    ("OpFUnordLessThan", 185, TR, Body, BINARY),
    ("OpFOrdGreaterThan", 186, TR, Body, BINARY),
    ("OpFUnordGreaterThan", 187, TR, Body, BINARY),
    ("OpFOrdLessThanEqual", 188, TR, Body, BINARY),
    ("OpFUnordLessThanEqual", 189, TR, Body, BINARY),
    ("OpFOrdGreaterThanEqual", 190, TR, Body, BINARY),
    ("OpFUnordGreaterThanEqual", 191, TR, Body, BINARY),
    ("OpShiftRightLogical", 194, TR, Body, BINARY),
    ("OpShiftRightArithmetic", 195, TR, Body, BINARY),
    ("OpShiftLeftLogical", 196, TR, Body, BINARY),
    ("OpBitwiseOr", 197, TR, Body, BINARY),
    ("OpBitwiseXor", 198, TR, Body, BINARY),
    ("OpBitwiseAnd", 199, TR, Body, BINARY),
    ("OpNot", 200, TR, Body, UNARY),
    ("OpBitFieldInsert", 201, TR, Body, QUATERNARY),
    ("OpBitFieldSExtract", 202, TR, Body, TERNARY),
    ("OpBitFieldUExtract", 203, TR, Body, TERNARY),
    ("OpBitReverse", 204, TR, Body, UNARY),
    ("OpBitCount", 205, TR, Body, UNARY),
    ("OpDPdx", 207, TR, Body, UNARY),
    ("OpDPdy", 208, TR, Body, UNARY),
    ("OpFwidth", 209, TR, Body, UNARY),
    ("OpDPdxFine", 210, TR, Body, UNARY),
    ("OpDPdyFine", 211, TR, Body, UNARY),
    ("OpFwidthFine", 212, TR, Body, UNARY),
    ("OpDPdxCoarse", 213, TR, Body, UNARY),
    ("OpDPdyCoarse", 214, TR, Body, UNARY),
    ("OpFwidthCoarse", 215, TR, Body, UNARY),
    ("OpEmitVertex", 218, NO, Body, &[]),
    ("OpEndPrimitive", 219, NO, Body, &[]),
    ("OpEmitStreamVertex", 220, NO, Body, UNARY),
    ("OpEndStreamPrimitive", 221, NO, Body, UNARY),
    ("OpControlBarrier", 224, NO, Body, TERNARY),
    ("OpMemoryBarrier", 225, NO, Body, BINARY),
    ("OpAtomicLoad", 227, TR, Body, TERNARY),
    ("OpAtomicStore", 228, NO, Body, QUATERNARY),
    ("OpAtomicExchange", 229, TR, Body, QUATERNARY),
    ("OpAtomicCompareExchange", 230, TR, Body, IDS6),
    ("OpAtomicCompareExchangeWeak", 231, TR, Body, IDS6),
    ("OpAtomicIIncrement", 232, TR, Body, TERNARY),
    ("OpAtomicIDecrement", 233, TR, Body, TERNARY),
    ("OpAtomicIAdd", 234, TR, Body, QUATERNARY),
    ("OpAtomicISub", 235, TR, Body, QUATERNARY),
    ("OpAtomicSMin", 236, TR, Body, QUATERNARY),
    ("OpAtomicUMin", 237, TR, Body, QUATERNARY),
    ("OpAtomicSMax", 238, TR, Body, QUATERNARY),
    ("OpAtomicUMax", 239, TR, Body, QUATERNARY),
    ("OpAtomicAnd", 240, TR, Body, QUATERNARY),
    ("OpAtomicOr", 241, TR, Body, QUATERNARY),
    ("OpAtomicXor", 242, TR, Body, QUATERNARY),
    ("OpPhi", 245, TR, Body, &[Ids]),
    ("OpLoopMerge", 246, NO, Body, &[Id, Id, m(MaskKind::LoopControl)]),
    ("OpSelectionMerge", 247, NO, Body, &[Id, m(MaskKind::SelectionControl)]),
    ("OpLabel", 248, R, Label, &[]),
    ("OpBranch", 249, NO, Body, &[Id]),
    ("OpBranchConditional", 250, NO, Body, &[Id, Id, Id, Lits]),
    ("OpSwitch", 251, NO, Body, &[Id, Id, LitIdPairs]),
    ("OpKill", 252, NO, Body, &[]),
    ("OpReturn", 253, NO, Body, &[]),
    ("OpReturnValue", 254, NO, Body, &[Id]),
    ("OpUnreachable", 255, NO, Body, &[]),
    ("OpLifetimeStart", 256, NO, Body, &[Id, Lit]),
    ("OpLifetimeStop", 257, NO, Body, &[Id, Lit]),
    ("OpGroupAsyncCopy", 259, TR, Body, IDS6),
    ("OpGroupWaitEvents", 260, NO, Body, TERNARY),
    ("OpGroupAll", 261, TR, Body, BINARY),
    ("OpGroupAny", 262, TR, Body, BINARY),
    ("OpGroupBroadcast", 263, TR, Body, TERNARY),
    ("OpGroupIAdd", 264, TR, Body, GROUP_REDUCE),
    ("OpGroupFAdd", 265, TR, Body, GROUP_REDUCE),
    ("OpGroupFMin", 266, TR, Body, GROUP_REDUCE),
    ("OpGroupUMin", 267, TR, Body, GROUP_REDUCE),
    ("OpGroupSMin", 268, TR, Body, GROUP_REDUCE),
    ("OpGroupFMax", 269, TR, Body, GROUP_REDUCE),
    ("OpGroupUMax", 270, TR, Body, GROUP_REDUCE),
    ("OpGroupSMax", 271, TR, Body, GROUP_REDUCE),
    ("OpReadPipe", 274, TR, Body, QUATERNARY),
    ("OpWritePipe", 275, TR, Body, QUATERNARY),
    ("OpReservedReadPipe", 276, TR, Body, IDS6),
    ("OpReservedWritePipe", 277, TR, Body, IDS6),
    ("OpReserveReadPipePackets", 278, TR, Body, QUATERNARY),
    ("OpReserveWritePipePackets", 279, TR, Body, QUATERNARY),
    ("OpCommitReadPipe", 280, NO, Body, QUATERNARY),
    ("OpCommitWritePipe", 281, NO, Body, QUATERNARY),
    ("OpIsValidReserveId", 282, TR, Body, UNARY),
    ("OpGetNumPipePackets", 283, TR, Body, TERNARY),
    ("OpGetMaxPipePackets", 284, TR, Body, TERNARY),
    ("OpGroupReserveReadPipePackets", 285, TR, Body, IDS5),
    ("OpGroupReserveWritePipePackets", 286, TR, Body, IDS5),
    ("OpGroupCommitReadPipe", 287, NO, Body, IDS5),
    ("OpGroupCommitWritePipe", 288, NO, Body, IDS5),
    ("OpEnqueueMarker", 291, TR, Body, QUATERNARY),
    ("OpEnqueueKernel", 292, TR, Body, &[Id, Id, Id, Id, Id, Id, Id, Id, Id, Id, Ids]),
    ("OpGetKernelNDrangeSubGroupCount", 293, TR, Body, IDS5),
    ("OpGetKernelNDrangeMaxSubGroupSize", 294, TR, Body, IDS5),
    ("OpGetKernelWorkGroupSize", 295, TR, Body, QUATERNARY),
    ("OpGetKernelPreferredWorkGroupSizeMultiple", 296, TR, Body, QUATERNARY),
    ("OpRetainEvent", 297, NO, Body, UNARY),
    ("OpReleaseEvent", 298, NO, Body, UNARY),
    ("OpCreateUserEvent", 299, TR, Body, &[]),
    ("OpIsValidEvent", 300, TR, Body, UNARY),
    ("OpSetUserEventStatus", 301, NO, Body, BINARY),
    ("OpCaptureEventProfilingInfo", 302, NO, Body, TERNARY),
    ("OpGetDefaultQueue", 303, TR, Body, &[]),
    ("OpBuildNDRange", 304, TR, Body, TERNARY),
    ("OpImageSparseSampleImplicitLod", 305, TR, Body, SAMPLE_IMPLICIT),
    ("OpImageSparseSampleExplicitLod", 306, TR, Body, SAMPLE_EXPLICIT),
    ("OpImageSparseSampleDrefImplicitLod", 307, TR, Body, SAMPLE_DREF_IMPLICIT),
    ("OpImageSparseSampleDrefExplicitLod", 308, TR, Body, SAMPLE_DREF_EXPLICIT),
    ("OpImageSparseSampleProjImplicitLod", 309, TR, Body, SAMPLE_IMPLICIT),
    ("OpImageSparseSampleProjExplicitLod", 310, TR, Body, SAMPLE_EXPLICIT),
    ("OpImageSparseSampleProjDrefImplicitLod", 311, TR, Body, SAMPLE_DREF_IMPLICIT),
    ("OpImageSparseSampleProjDrefExplicitLod", 312, TR, Body, SAMPLE_DREF_EXPLICIT),
    ("OpImageSparseFetch", 313, TR, Body, SAMPLE_IMPLICIT),
    ("OpImageSparseGather", 314, TR, Body, SAMPLE_DREF_IMPLICIT),
    ("OpImageSparseDrefGather", 315, TR, Body, SAMPLE_DREF_IMPLICIT),
    ("OpImageSparseTexelsResident", 316, TR, Body, UNARY),
    ("OpNoLine", 317, NO, Debug, &[]),
    ("OpAtomicFlagTestAndSet", 318, TR, Body, TERNARY),
    ("OpAtomicFlagClear", 319, NO, Body, TERNARY),
    ("OpImageSparseRead", 320, TR, Body, SAMPLE_IMPLICIT),
];

const NO_PARAMS: &[OperandKind] = &[];
const ONE_LITERAL: &[OperandKind] = &[Lit];
const ANY_LITERALS: &[OperandKind] = &[Lits];
const BUILT_IN: &[OperandKind] = &[e(EnumKind::BuiltIn)];
const FUNC_PARAM_ATTR: &[OperandKind] = &[e(EnumKind::FunctionParameterAttribute)];
const FP_ROUNDING_MODE: &[OperandKind] = &[e(EnumKind::FPRoundingMode)];
const FP_FAST_MATH_MODE: &[OperandKind] = &[m(MaskKind::FPFastMathMode)];
const LINKAGE_ATTRIBUTES: &[OperandKind] = &[Str, e(EnumKind::LinkageType)];

/// Parameter kinds of the decoration `decoration` names.
///
/// Values the decoration table does not know, and a missing decoration, take
/// any number of literals.
pub fn decoration_operands(decoration: Option<&Operand>) -> &'static [OperandKind] {
    let name = match decoration {
        Some(Operand::Enumerant(name)) => Some(name.as_str()),
        Some(Operand::Literal(value)) => EnumKind::Decoration.name_of(*value),
        _ => None,
    };
    match name {
        Some(
            "SpecId" | "ArrayStride" | "MatrixStride" | "Stream" | "Location" | "Component"
            | "Index" | "Binding" | "DescriptorSet" | "Offset" | "XfbBuffer" | "XfbStride"
            | "InputAttachmentIndex" | "Alignment",
        ) => ONE_LITERAL,
        Some("BuiltIn") => BUILT_IN,
        Some("FuncParamAttr") => FUNC_PARAM_ATTR,
        Some("FPRoundingMode") => FP_ROUNDING_MODE,
        Some("FPFastMathMode") => FP_FAST_MATH_MODE,
        Some("LinkageAttributes") => LINKAGE_ATTRIBUTES,
        Some(other) if EnumKind::Decoration.value_of(other).is_some() => NO_PARAMS,
        _ => ANY_LITERALS,
    }
}

static SPIRV: LazyLock<InstructionTable> = LazyLock::new(|| {
    let instructions = ROWS
        .iter()
        .map(
            |&(name, opcode, (has_type, has_result), class, operands)| InstructionDesc {
                name: name.to_string(),
                opcode,
                has_type,
                has_result,
                class,
                operands: operands.to_vec(),
            },
        )
        .collect();
    InstructionTable::new(SPIRV_VERSION, instructions).expect("built-in table is well formed")
});

impl InstructionTable {
    /// The built-in SPIR-V 1.0 table.
    pub fn spirv() -> &'static InstructionTable {
        &SPIRV
    }
}
