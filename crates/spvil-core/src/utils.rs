/// Longest leading bare identifier: `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Returns the empty string when the first character already fails.
///
/// # Examples
/// ```
/// use spvil_core::utils::identifier_prefix;
/// assert_eq!(identifier_prefix("foo(vf4;"), "foo");
/// assert_eq!(identifier_prefix("main"), "main");
/// assert_eq!(identifier_prefix("4ever"), "");
/// ```
pub fn identifier_prefix(s: &str) -> &str {
    let mut end = 0;
    for (i, c) in s.char_indices() {
        let ok = if i == 0 {
            c.is_ascii_alphabetic() || c == '_'
        } else {
            c.is_ascii_alphanumeric() || c == '_'
        };
        if !ok {
            break;
        }
        end = i + c.len_utf8();
    }
    &s[..end]
}

/// Strip one pair of surrounding double quotes, if present.
///
/// Front-ends differ in whether `OpName` payloads keep their quoting.
pub fn strip_quotes(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

/// Quote a string literal for the text forms, escaping `"` and `\`.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
