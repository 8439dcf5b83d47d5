//! Named enumerant and mask tables.
//!
//! Enumerants are single-value constants (`StorageClass Input` = 1). Masks are
//! multi-flag values combined with `|`; the encoder only ever sees their
//! resolved integer, name resolution happens in the front-end via
//! [`MaskKind::resolve`].

use super::json::GrammarError;

/// Kinds of named single-value enumerants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumKind {
    SourceLanguage,
    ExecutionModel,
    AddressingModel,
    MemoryModel,
    ExecutionMode,
    StorageClass,
    Dim,
    ImageFormat,
    AccessQualifier,
    SamplerAddressingMode,
    SamplerFilterMode,
    Decoration,
    BuiltIn,
    FunctionParameterAttribute,
    FPRoundingMode,
    LinkageType,
    GroupOperation,
    Capability,
}

const SOURCE_LANGUAGE: &[(&str, u32)] = &[
    ("Unknown", 0),
    ("ESSL", 1),
    ("GLSL", 2),
    ("OpenCL_C", 3),
    ("OpenCL_CPP", 4),
];

const EXECUTION_MODEL: &[(&str, u32)] = &[
    ("Vertex", 0),
    ("TessellationControl", 1),
    ("TessellationEvaluation", 2),
    ("Geometry", 3),
    ("Fragment", 4),
    ("GLCompute", 5),
    ("Kernel", 6),
];

const ADDRESSING_MODEL: &[(&str, u32)] = &[("Logical", 0), ("Physical32", 1), ("Physical64", 2)];

const MEMORY_MODEL: &[(&str, u32)] = &[("Simple", 0), ("GLSL450", 1), ("OpenCL", 2)];

const EXECUTION_MODE: &[(&str, u32)] = &[
    ("Invocations", 0),
    ("SpacingEqual", 1),
    ("SpacingFractionalEven", 2),
    ("SpacingFractionalOdd", 3),
    ("VertexOrderCw", 4),
    ("VertexOrderCcw", 5),
    ("PixelCenterInteger", 6),
    ("OriginUpperLeft", 7),
    ("OriginLowerLeft", 8),
    ("EarlyFragmentTests", 9),
    ("PointMode", 10),
    ("Xfb", 11),
    ("DepthReplacing", 12),
    ("DepthGreater", 14),
    ("DepthLess", 15),
    ("DepthUnchanged", 16),
    ("LocalSize", 17),
    ("LocalSizeHint", 18),
    ("InputPoints", 19),
    ("InputLines", 20),
    ("InputLinesAdjacency", 21),
    ("Triangles", 22),
    ("InputTrianglesAdjacency", 23),
    ("Quads", 24),
    ("Isolines", 25),
    ("OutputVertices", 26),
    ("OutputPoints", 27),
    ("OutputLineStrip", 28),
    ("OutputTriangleStrip", 29),
    ("VecTypeHint", 30),
    ("ContractionOff", 31),
];

const STORAGE_CLASS: &[(&str, u32)] = &[
    ("UniformConstant", 0),
    ("Input", 1),
    ("Uniform", 2),
    ("Output", 3),
    ("Workgroup", 4),
    ("CrossWorkgroup", 5),
    ("Private", 6),
    ("Function", 7),
    ("Generic", 8),
    ("PushConstant", 9),
    ("AtomicCounter", 10),
    ("Image", 11),
];

const DIM: &[(&str, u32)] = &[
    ("1D", 0),
    ("2D", 1),
    ("3D", 2),
    ("Cube", 3),
    ("Rect", 4),
    ("Buffer", 5),
    ("SubpassData", 6),
];

const IMAGE_FORMAT: &[(&str, u32)] = &[
    ("Unknown", 0),
    ("Rgba32f", 1),
    ("Rgba16f", 2),
    ("R32f", 3),
    ("Rgba8", 4),
    ("Rgba8Snorm", 5),
    ("Rg32f", 6),
    ("Rg16f", 7),
    ("R11fG11fB10f", 8),
    ("R16f", 9),
    ("Rgba16", 10),
    ("Rgb10A2", 11),
    ("Rg16", 12),
    ("Rg8", 13),
    ("R16", 14),
    ("R8", 15),
    ("Rgba16Snorm", 16),
    ("Rg16Snorm", 17),
    ("Rg8Snorm", 18),
    ("R16Snorm", 19),
    ("R8Snorm", 20),
    ("Rgba32i", 21),
    ("Rgba16i", 22),
    ("Rgba8i", 23),
    ("R32i", 24),
    ("Rg32i", 25),
    ("Rg16i", 26),
    ("Rg8i", 27),
    ("R16i", 28),
    ("R8i", 29),
    ("Rgba32ui", 30),
    ("Rgba16ui", 31),
    ("Rgba8ui", 32),
    ("R32ui", 33),
    ("Rgb10a2ui", 34),
    ("Rg32ui", 35),
    ("Rg16ui", 36),
    ("Rg8ui", 37),
    ("R16ui", 38),
    ("R8ui", 39),
];

const ACCESS_QUALIFIER: &[(&str, u32)] = &[("ReadOnly", 0), ("WriteOnly", 1), ("ReadWrite", 2)];

const SAMPLER_ADDRESSING_MODE: &[(&str, u32)] = &[
    ("None", 0),
    ("ClampToEdge", 1),
    ("Clamp", 2),
    ("Repeat", 3),
    ("RepeatMirrored", 4),
];

const SAMPLER_FILTER_MODE: &[(&str, u32)] = &[("Nearest", 0), ("Linear", 1)];

const DECORATION: &[(&str, u32)] = &[
    ("RelaxedPrecision", 0),
    ("SpecId", 1),
    ("Block", 2),
    ("BufferBlock", 3),
    ("RowMajor", 4),
    ("ColMajor", 5),
    ("ArrayStride", 6),
    ("MatrixStride", 7),
    ("GLSLShared", 8),
    ("GLSLPacked", 9),
    ("CPacked", 10),
    ("BuiltIn", 11),
    ("NoPerspective", 13),
    ("Flat", 14),
    ("Patch", 15),
    ("Centroid", 16),
    ("Sample", 17),
    ("Invariant", 18),
    ("Restrict", 19),
    ("Aliased", 20),
    ("Volatile", 21),
    ("Constant", 22),
    ("Coherent", 23),
    ("NonWritable", 24),
    ("NonReadable", 25),
    ("Uniform", 26),
    ("SaturatedConversion", 28),
    ("Stream", 29),
    ("Location", 30),
    ("Component", 31),
    ("Index", 32),
    ("Binding", 33),
    ("DescriptorSet", 34),
    ("Offset", 35),
    ("XfbBuffer", 36),
    ("XfbStride", 37),
    ("FuncParamAttr", 38),
    ("FPRoundingMode", 39),
    ("FPFastMathMode", 40),
    ("LinkageAttributes", 41),
    ("NoContraction", 42),
    ("InputAttachmentIndex", 43),
    ("Alignment", 44),
];

const BUILT_IN: &[(&str, u32)] = &[
    ("Position", 0),
    ("PointSize", 1),
    ("ClipDistance", 3),
    ("CullDistance", 4),
    ("VertexId", 5),
    ("InstanceId", 6),
    ("PrimitiveId", 7),
    ("InvocationId", 8),
    ("Layer", 9),
    ("ViewportIndex", 10),
    ("TessLevelOuter", 11),
    ("TessLevelInner", 12),
    ("TessCoord", 13),
    ("PatchVertices", 14),
    ("FragCoord", 15),
    ("PointCoord", 16),
    ("FrontFacing", 17),
    ("SampleId", 18),
    ("SamplePosition", 19),
    ("SampleMask", 20),
    ("FragDepth", 22),
    ("HelperInvocation", 23),
    ("NumWorkgroups", 24),
    ("WorkgroupSize", 25),
    ("WorkgroupId", 26),
    ("LocalInvocationId", 27),
    ("GlobalInvocationId", 28),
    ("LocalInvocationIndex", 29),
    ("WorkDim", 30),
    ("GlobalSize", 31),
    ("EnqueuedWorkgroupSize", 32),
    ("GlobalOffset", 33),
    ("GlobalLinearId", 34),
    ("SubgroupSize", 36),
    ("SubgroupMaxSize", 37),
    ("NumSubgroups", 38),
    ("NumEnqueuedSubgroups", 39),
    ("SubgroupId", 40),
    ("SubgroupLocalInvocationId", 41),
    ("VertexIndex", 42),
    ("InstanceIndex", 43),
];

const FUNCTION_PARAMETER_ATTRIBUTE: &[(&str, u32)] = &[
    ("Zext", 0),
    ("Sext", 1),
    ("ByVal", 2),
    ("Sret", 3),
    ("NoAlias", 4),
    ("NoCapture", 5),
    ("NoWrite", 6),
    ("NoReadWrite", 7),
];

const FP_ROUNDING_MODE: &[(&str, u32)] = &[("RTE", 0), ("RTZ", 1), ("RTP", 2), ("RTN", 3)];

const LINKAGE_TYPE: &[(&str, u32)] = &[("Export", 0), ("Import", 1)];

const GROUP_OPERATION: &[(&str, u32)] = &[
    ("Reduce", 0),
    ("InclusiveScan", 1),
    ("ExclusiveScan", 2),
];

const CAPABILITY: &[(&str, u32)] = &[
    ("Matrix", 0),
    ("Shader", 1),
    ("Geometry", 2),
    ("Tessellation", 3),
    ("Addresses", 4),
    ("Linkage", 5),
    ("Kernel", 6),
    ("Vector16", 7),
    ("Float16Buffer", 8),
    ("Float16", 9),
    ("Float64", 10),
    ("Int64", 11),
    ("Int64Atomics", 12),
    ("ImageBasic", 13),
    ("ImageReadWrite", 14),
    ("ImageMipmap", 15),
    ("Pipes", 17),
    ("Groups", 18),
    ("DeviceEnqueue", 19),
    ("LiteralSampler", 20),
    ("AtomicStorage", 21),
    ("Int16", 22),
    ("TessellationPointSize", 23),
    ("GeometryPointSize", 24),
    ("ImageGatherExtended", 25),
    ("StorageImageMultisample", 27),
    ("UniformBufferArrayDynamicIndexing", 28),
    ("SampledImageArrayDynamicIndexing", 29),
    ("StorageBufferArrayDynamicIndexing", 30),
    ("StorageImageArrayDynamicIndexing", 31),
    ("ClipDistance", 32),
    ("CullDistance", 33),
    ("ImageCubeArray", 34),
    ("SampleRateShading", 35),
    ("ImageRect", 36),
    ("SampledRect", 37),
    ("GenericPointer", 38),
    ("Int8", 39),
    ("InputAttachment", 40),
    ("SparseResidency", 41),
    ("MinLod", 42),
    ("Sampled1D", 43),
    ("Image1D", 44),
    ("SampledCubeArray", 45),
    ("SampledBuffer", 46),
    ("ImageBuffer", 47),
    ("ImageMSArray", 48),
    ("StorageImageExtendedFormats", 49),
    ("ImageQuery", 50),
    ("DerivativeControl", 51),
    ("InterpolationFunction", 52),
    ("TransformFeedback", 53),
    ("GeometryStreams", 54),
    ("StorageImageReadWithoutFormat", 55),
    ("StorageImageWriteWithoutFormat", 56),
    ("MultiViewport", 57),
];

impl EnumKind {
    pub const ALL: [EnumKind; 18] = [
        Self::SourceLanguage,
        Self::ExecutionModel,
        Self::AddressingModel,
        Self::MemoryModel,
        Self::ExecutionMode,
        Self::StorageClass,
        Self::Dim,
        Self::ImageFormat,
        Self::AccessQualifier,
        Self::SamplerAddressingMode,
        Self::SamplerFilterMode,
        Self::Decoration,
        Self::BuiltIn,
        Self::FunctionParameterAttribute,
        Self::FPRoundingMode,
        Self::LinkageType,
        Self::GroupOperation,
        Self::Capability,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::SourceLanguage => "SourceLanguage",
            Self::ExecutionModel => "ExecutionModel",
            Self::AddressingModel => "AddressingModel",
            Self::MemoryModel => "MemoryModel",
            Self::ExecutionMode => "ExecutionMode",
            Self::StorageClass => "StorageClass",
            Self::Dim => "Dim",
            Self::ImageFormat => "ImageFormat",
            Self::AccessQualifier => "AccessQualifier",
            Self::SamplerAddressingMode => "SamplerAddressingMode",
            Self::SamplerFilterMode => "SamplerFilterMode",
            Self::Decoration => "Decoration",
            Self::BuiltIn => "BuiltIn",
            Self::FunctionParameterAttribute => "FunctionParameterAttribute",
            Self::FPRoundingMode => "FPRoundingMode",
            Self::LinkageType => "LinkageType",
            Self::GroupOperation => "GroupOperation",
            Self::Capability => "Capability",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// The constants table for this kind, in value order.
    pub fn values(self) -> &'static [(&'static str, u32)] {
        match self {
            Self::SourceLanguage => SOURCE_LANGUAGE,
            Self::ExecutionModel => EXECUTION_MODEL,
            Self::AddressingModel => ADDRESSING_MODEL,
            Self::MemoryModel => MEMORY_MODEL,
            Self::ExecutionMode => EXECUTION_MODE,
            Self::StorageClass => STORAGE_CLASS,
            Self::Dim => DIM,
            Self::ImageFormat => IMAGE_FORMAT,
            Self::AccessQualifier => ACCESS_QUALIFIER,
            Self::SamplerAddressingMode => SAMPLER_ADDRESSING_MODE,
            Self::SamplerFilterMode => SAMPLER_FILTER_MODE,
            Self::Decoration => DECORATION,
            Self::BuiltIn => BUILT_IN,
            Self::FunctionParameterAttribute => FUNCTION_PARAMETER_ATTRIBUTE,
            Self::FPRoundingMode => FP_ROUNDING_MODE,
            Self::LinkageType => LINKAGE_TYPE,
            Self::GroupOperation => GROUP_OPERATION,
            Self::Capability => CAPABILITY,
        }
    }

    /// Numeric value of a named enumerant.
    pub fn value_of(self, name: &str) -> Option<u32> {
        self.values()
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, v)| v)
    }

    /// Name of a numeric value; `None` for values this table does not know.
    pub fn name_of(self, value: u32) -> Option<&'static str> {
        self.values()
            .iter()
            .find(|(_, v)| *v == value)
            .map(|&(n, _)| n)
    }
}

/// Kinds of multi-flag masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskKind {
    FunctionControl,
    SelectionControl,
    LoopControl,
    MemoryAccess,
    ImageOperands,
    FPFastMathMode,
}

const FUNCTION_CONTROL: &[(&str, u32)] = &[
    ("None", 0x0),
    ("Inline", 0x1),
    ("DontInline", 0x2),
    ("Pure", 0x4),
    ("Const", 0x8),
];

const SELECTION_CONTROL: &[(&str, u32)] = &[("None", 0x0), ("Flatten", 0x1), ("DontFlatten", 0x2)];

const LOOP_CONTROL: &[(&str, u32)] = &[("None", 0x0), ("Unroll", 0x1), ("DontUnroll", 0x2)];

const MEMORY_ACCESS: &[(&str, u32)] = &[
    ("None", 0x0),
    ("Volatile", 0x1),
    ("Aligned", 0x2),
    ("Nontemporal", 0x4),
];

const IMAGE_OPERANDS: &[(&str, u32)] = &[
    ("None", 0x0),
    ("Bias", 0x1),
    ("Lod", 0x2),
    ("Grad", 0x4),
    ("ConstOffset", 0x8),
    ("Offset", 0x10),
    ("ConstOffsets", 0x20),
    ("Sample", 0x40),
    ("MinLod", 0x80),
];

const FP_FAST_MATH_MODE: &[(&str, u32)] = &[
    ("None", 0x0),
    ("NotNaN", 0x1),
    ("NotInf", 0x2),
    ("NSZ", 0x4),
    ("AllowRecip", 0x8),
    ("Fast", 0x10),
];

impl MaskKind {
    pub const ALL: [MaskKind; 6] = [
        Self::FunctionControl,
        Self::SelectionControl,
        Self::LoopControl,
        Self::MemoryAccess,
        Self::ImageOperands,
        Self::FPFastMathMode,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::FunctionControl => "FunctionControl",
            Self::SelectionControl => "SelectionControl",
            Self::LoopControl => "LoopControl",
            Self::MemoryAccess => "MemoryAccess",
            Self::ImageOperands => "ImageOperands",
            Self::FPFastMathMode => "FPFastMathMode",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    pub fn flags(self) -> &'static [(&'static str, u32)] {
        match self {
            Self::FunctionControl => FUNCTION_CONTROL,
            Self::SelectionControl => SELECTION_CONTROL,
            Self::LoopControl => LOOP_CONTROL,
            Self::MemoryAccess => MEMORY_ACCESS,
            Self::ImageOperands => IMAGE_OPERANDS,
            Self::FPFastMathMode => FP_FAST_MATH_MODE,
        }
    }

    /// Resolve `Flag|Flag|…` (or a bare number) to the combined integer.
    pub fn resolve(self, text: &str) -> Result<u32, GrammarError> {
        let mut value = 0;
        for part in text.split('|').map(str::trim) {
            if let Ok(n) = part.parse::<u32>() {
                value |= n;
                continue;
            }
            let flag = self
                .flags()
                .iter()
                .find(|(n, _)| *n == part)
                .map(|&(_, v)| v)
                .ok_or_else(|| GrammarError::UnknownEnumerant {
                    kind: self.name(),
                    name: part.to_string(),
                })?;
            value |= flag;
        }
        Ok(value)
    }
}
