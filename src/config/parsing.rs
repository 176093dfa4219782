// src/config/parsing.rs

/// Parses a whitespace-separated extension list such as `".txt .MD"`.
///
/// Entries are trimmed and lowercased. A missing or blank string yields `None`,
/// which disables extension filtering.
///
/// # Examples
/// ```
/// use filecombine::config::parse_extensions;
///
/// assert_eq!(
///     parse_extensions(Some(" .txt  .MD ")),
///     Some(vec![".txt".to_string(), ".md".to_string()])
/// );
/// assert_eq!(parse_extensions(Some("   ")), None);
/// assert_eq!(parse_extensions(None), None);
/// ```
pub fn parse_extensions(input: Option<&str>) -> Option<Vec<String>> {
    input
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.split_whitespace().map(|e| e.to_lowercase()).collect())
}

/// Normalizes a vector of extension strings to trimmed lowercase, dropping empty entries.
pub fn normalize_extensions(exts: Option<Vec<String>>) -> Option<Vec<String>> {
    exts.map(|v| {
        v.into_iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    })
}
