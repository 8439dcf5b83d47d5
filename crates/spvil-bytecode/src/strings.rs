//! Literal string packing.
//!
//! UTF-8 bytes plus a terminating NUL, four bytes per word, first byte in the
//! low-order position. Unused bytes of the last word are zero.

/// Words needed for a string of `len` bytes: `ceil((len + 1) / 4)`.
pub fn string_word_count(len: usize) -> usize {
    len / 4 + 1
}

pub fn pack_string(s: &str) -> Vec<u32> {
    let bytes = s.as_bytes();
    let mut words = Vec::with_capacity(string_word_count(bytes.len()));
    // The trailing chunk always has room for the NUL: exact multiples of
    // four get an extra all-zero word.
    for chunk in bytes.chunks(4) {
        let mut buf = [0u8; 4];
        buf[..chunk.len()].copy_from_slice(chunk);
        words.push(u32::from_le_bytes(buf));
    }
    if bytes.len() % 4 == 0 {
        words.push(0);
    }
    words
}

/// Read a packed string from the front of `words`.
///
/// Returns the raw bytes (without the NUL) and the number of words consumed,
/// or `None` when no word contains a terminator.
pub fn unpack_string(words: &[u32]) -> Option<(Vec<u8>, usize)> {
    let mut bytes = Vec::new();
    for (i, word) in words.iter().enumerate() {
        for b in word.to_le_bytes() {
            if b == 0 {
                return Some((bytes, i + 1));
            }
            bytes.push(b);
        }
    }
    None
}
