/// Whether `c` separates tokens.
///
/// This is the `\s` class of ECMAScript regular expressions (its WhiteSpace and
/// LineTerminator sets). It differs from `char::is_whitespace` in two places:
/// U+FEFF (byte order mark) is a separator, U+0085 (next line) is not.
pub fn is_separator_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}
