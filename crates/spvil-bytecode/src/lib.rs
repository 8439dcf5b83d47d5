#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! SPIR-V binary form of spvil modules.
//!
//! - [`emit`] / [`Emitter`]: module to little-endian word stream
//! - [`decode`] / [`Decoder`]: word stream back to a module
//!
//! Both directions are driven by the same [`InstructionTable`](spvil_core::InstructionTable).

mod constants;
mod decode;
mod emit;
mod header;
mod strings;

#[cfg(test)]
mod emit_tests;
#[cfg(test)]
mod strings_tests;

pub use constants::{GENERATOR, HEADER_WORDS, MAGIC, MAX_WORD_COUNT, VERSION};
pub use decode::{DecodeError, Decoder, decode, decode_words, words_from_bytes};
pub use emit::{
    EmitOptions, Emitter, EncodeError, emit, emit_words, encode_instruction, words_to_bytes,
    write_module,
};
pub use header::Header;
pub use strings::{pack_string, string_word_count, unpack_string};
