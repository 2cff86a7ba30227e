//! Escape handling for GIFT text

/// Remove GIFT escapes from `text`.
///
/// Every `\x` pair becomes `x`, except `\n` which becomes a line break. A trailing lone
/// backslash is kept as is.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some(escaped) => out.push(escaped),
            None => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(unescape("What is 2 + 2?"), "What is 2 + 2?");
    }

    #[test]
    fn test_structural_escapes() {
        assert_eq!(unescape(r"\{a\} \= \~ \# \:"), "{a} = ~ # :");
    }

    #[test]
    fn test_newline_escape() {
        assert_eq!(unescape(r"one\ntwo"), "one\ntwo");
    }

    #[test]
    fn test_escaped_backslash() {
        assert_eq!(unescape(r"C:\\dir"), r"C:\dir");
    }

    #[test]
    fn test_trailing_backslash() {
        assert_eq!(unescape("end\\"), "end\\");
    }
}
