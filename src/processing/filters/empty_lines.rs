use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Collapses every run of three or more `LF` characters to exactly two.
///
/// # Examples
/// ```
/// use filecombine::processing::filters::collapse_blank_runs;
///
/// assert_eq!(collapse_blank_runs("a\n\n\n\n\nb\n\n"), "a\n\nb\n\n");
/// ```
pub fn collapse_blank_runs(content: &str) -> String {
    BLANK_RUN_RE.replace_all(content, "\n\n").into_owned()
}

/// Keeps at most one blank line between blocks and removes leading newlines.
///
/// # Examples
/// ```
/// use filecombine::processing::filters::remove_extra_empty_lines;
///
/// assert_eq!(remove_extra_empty_lines("\n\nL1\n\n\n\nL2"), "L1\n\nL2");
/// ```
pub fn remove_extra_empty_lines(content: &str) -> String {
    collapse_blank_runs(content)
        .trim_start_matches('\n')
        .to_string()
}
