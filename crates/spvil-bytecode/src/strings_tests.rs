use super::*;

#[test]
fn word_count_formula() {
    for (len, words) in [(0, 1), (1, 1), (3, 1), (4, 2), (7, 2), (8, 3)] {
        assert_eq!(string_word_count(len), words, "len {len}");
        let s = "x".repeat(len);
        assert_eq!(pack_string(&s).len(), words, "len {len}");
    }
}

#[test]
fn packs_little_endian_with_zero_padding() {
    assert_eq!(pack_string("main"), [0x6e69_616d, 0]);
    assert_eq!(pack_string("GLSL.std.450"), [0x4c53_4c47, 0x6474_732e, 0x3035_342e, 0]);
    assert_eq!(pack_string("ab"), [0x0000_6261]);
}

#[test]
fn unpack_reads_to_terminator() {
    let mut words = pack_string("hello");
    words.push(0xdead_beef);
    let (bytes, used) = unpack_string(&words).unwrap();
    assert_eq!(bytes, b"hello");
    assert_eq!(used, 2);
}

#[test]
fn unpack_unterminated() {
    assert_eq!(unpack_string(&[0x6161_6161]), None);
    assert_eq!(unpack_string(&[]), None);
}
