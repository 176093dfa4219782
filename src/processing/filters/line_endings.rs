/// Converts every `CRLF` and lone `CR` to `LF`.
///
/// # Examples
/// ```
/// use filecombine::processing::filters::normalize_line_endings;
///
/// assert_eq!(normalize_line_endings("a\r\nb\rc\nd"), "a\nb\nc\nd");
/// ```
pub fn normalize_line_endings(content: &str) -> String {
    if !content.contains('\r') {
        return content.to_string();
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_endings() {
        let input = "Line 1\nLine 2\r\nLine 3\rLine 4";
        assert_eq!(normalize_line_endings(input), "Line 1\nLine 2\nLine 3\nLine 4");
    }

    #[test]
    fn test_lf_only_is_noop() {
        let input = "already\nunix\n\n";
        assert_eq!(normalize_line_endings(input), input);
    }

    #[test]
    fn test_cr_before_crlf() {
        // "\r\r\n" is a lone CR followed by a CRLF: two line breaks.
        assert_eq!(normalize_line_endings("a\r\r\nb"), "a\n\nb");
    }
}
