//! Lexical helpers shared by the decoder and encoder.

/// Number of leading ASCII spaces in `line`.
///
/// Tabs are not indentation in this format; a line starting with a tab has
/// an indent of 0 followed by content.
pub fn indent_of(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

/// Strips one matching pair of surrounding `"` or `'` from `value`.
///
/// Values without a matching pair, including a lone quote on one side, are
/// returned unchanged.
///
/// ```rust
/// use kit_core::codec::text::unquote;
///
/// assert_eq!(unquote("\"Diamond Sword\""), "Diamond Sword");
/// assert_eq!(unquote("'single'"), "single");
/// assert_eq!(unquote("\"unbalanced"), "\"unbalanced");
/// ```
pub fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Returns the trimmed text after `key:` when `content` starts with it.
///
/// `content` is expected to already be trimmed of indentation.
pub fn value_after<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    content
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix(':'))
        .map(str::trim)
}
