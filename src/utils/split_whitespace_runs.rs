use crate::utils::is_separator_whitespace;

/// Splits `text` on every run of whitespace.
///
/// Whitespace is decided by `is_separator_whitespace`. Unlike `str::split_whitespace`,
/// empty pieces are kept at the edges: leading or trailing whitespace produces an empty
/// token, and an empty (or all-whitespace) string produces empty tokens rather than none.
///
/// ### Example:
/// ```text
/// "a  b"  -> ["a", "b"]
/// " a b " -> ["", "a", "b", ""]
/// ""      -> [""]
/// "   "   -> ["", ""]
/// ```
pub fn split_whitespace_runs(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut token_start = 0;
    let mut in_whitespace = false;

    for (position, c) in text.char_indices() {
        if is_separator_whitespace(c) {
            if !in_whitespace {
                tokens.push(&text[token_start..position]);
                in_whitespace = true;
            }
        } else if in_whitespace {
            token_start = position;
            in_whitespace = false;
        }
    }

    if in_whitespace {
        tokens.push("");
    } else {
        tokens.push(&text[token_start..]);
    }

    tokens
}
