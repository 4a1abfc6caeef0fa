//! Template escaping for embedding in generated string literals

/// Escape template text for use inside a double-quoted Java literal.
///
/// Line breaks become `\r` and `\n`, then double quotes become `\"`.
/// Backslashes are left alone, so a template may carry its own Java escapes
/// (`\t`, `\u00e9`). A template whose own backslash would pair with an inserted
/// quote escape or with the closing quote is caught by [`dangling_escape`].
pub fn escape_template(input: &str) -> String {
    input
        .replace('\r', "\\r")
        .replace('\n', "\\n")
        .replace('"', "\\\"")
}

/// Find a backslash that would break the escaped literal.
///
/// Returns the byte offset of the last backslash in an odd-length run that
/// ends the template or is followed by a quote. Either way the run swallows
/// a quote the literal needs.
///
/// ```
/// use logbundle_core::dangling_escape;
///
/// assert_eq!(dangling_escape("tab\\there"), None);
/// assert_eq!(dangling_escape("ends with \\"), Some(10));
/// assert_eq!(dangling_escape("say \\\"hi"), Some(4));
/// assert_eq!(dangling_escape("two \\\\\" fine"), None);
/// ```
pub fn dangling_escape(input: &str) -> Option<usize> {
    let mut run = 0usize;
    for (offset, c) in input.char_indices() {
        match c {
            '\\' => run += 1,
            '"' if run % 2 == 1 => return Some(offset - 1),
            _ => run = 0,
        }
    }
    (run % 2 == 1).then(|| input.len() - 1)
}
