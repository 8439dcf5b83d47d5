//! Fixed values of the binary format.

/// Header word 0.
pub const MAGIC: u32 = 0x0723_0203;

/// Header word 1: SPIR-V 1.0.
pub const VERSION: u32 = spvil_core::grammar::SPIRV_VERSION;

/// Header word 2: tool id in the high half, tool version in the low half.
/// spvil has no registered tool id, so the high half stays zero.
pub const GENERATOR: u32 = 0x0000_0001;

/// Header length in words.
pub const HEADER_WORDS: usize = 5;

/// Largest word count an instruction header can carry.
pub const MAX_WORD_COUNT: usize = 0xFFFF;
