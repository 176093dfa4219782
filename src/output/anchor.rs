// src/output/anchor.rs

use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED_ANCHOR_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9а-яё_\-]").unwrap());

/// Derives a markdown fragment identifier from a file name.
///
/// The name is lowercased, spaces and periods become hyphens, `#` is removed,
/// every character outside lowercase ASCII/Cyrillic letters, digits, `_` and
/// `-` is dropped, and leading/trailing hyphens are trimmed. Distinct names
/// may produce the same anchor; collisions are not deduplicated.
///
/// # Examples
/// ```
/// use filecombine::output::normalize_anchor;
///
/// assert_eq!(normalize_anchor("file1.txt"), "file1-txt");
/// assert_eq!(normalize_anchor("My Notes #2.md"), "my-notes-2-md");
/// assert_eq!(normalize_anchor("Отчёт.txt"), "отчёт-txt");
/// ```
pub fn normalize_anchor(name: &str) -> String {
    let replaced = name.to_lowercase().replace([' ', '.'], "-").replace('#', "");
    DISALLOWED_ANCHOR_CHARS_RE
        .replace_all(&replaced, "")
        .trim_matches('-')
        .to_string()
}
