/// Strips trailing whitespace from each `LF`-separated line.
///
/// Only `LF` is treated as a line separator, so a `CR` left at the end of a
/// line is removed as whitespace rather than kept as a line ending. The
/// information separators `U+001C`..`U+001F` count as whitespace too.
///
/// # Examples
/// ```
/// use filecombine::processing::filters::remove_trailing_whitespace;
///
/// assert_eq!(remove_trailing_whitespace("a \nb\t\n"), "a\nb\n");
/// ```
pub fn remove_trailing_whitespace(content: &str) -> String {
    content
        .split('\n')
        .map(|line| line.trim_end_matches(is_trailing_whitespace))
        .collect::<Vec<&str>>()
        .join("\n")
}

fn is_trailing_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
