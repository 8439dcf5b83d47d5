//! Module header (5 words).
//!
//! Layout:
//! - 0: magic
//! - 1: version
//! - 2: generator
//! - 3: id bound
//! - 4: instruction schema (reserved, always 0)

use crate::constants::{GENERATOR, HEADER_WORDS, MAGIC, VERSION};
use crate::decode::DecodeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub magic: u32,
    pub version: u32,
    pub generator: u32,
    pub bound: u32,
    pub schema: u32,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            generator: GENERATOR,
            bound: 0,
            schema: 0,
        }
    }
}

impl Header {
    pub fn new(version: u32, generator: u32, bound: u32) -> Self {
        Self {
            version,
            generator,
            bound,
            ..Self::default()
        }
    }

    /// Decode from the first five words of a stream.
    pub fn from_words(words: &[u32]) -> Result<Self, DecodeError> {
        let Some(&[magic, version, generator, bound, schema]) =
            words.first_chunk::<HEADER_WORDS>()
        else {
            return Err(DecodeError::TooShort(words.len()));
        };
        let header = Self {
            magic,
            version,
            generator,
            bound,
            schema,
        };
        if !header.validate_magic() {
            return Err(DecodeError::InvalidMagic(magic));
        }
        Ok(header)
    }

    pub fn to_words(&self) -> [u32; HEADER_WORDS] {
        [
            self.magic,
            self.version,
            self.generator,
            self.bound,
            self.schema,
        ]
    }

    /// Little-endian byte form.
    pub fn to_bytes(&self) -> [u8; HEADER_WORDS * 4] {
        let mut bytes = [0u8; HEADER_WORDS * 4];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.to_words()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        bytes
    }

    pub fn validate_magic(&self) -> bool {
        self.magic == MAGIC
    }
}
