//! Provides a trait and implementations for transforming file content.
//!
//! Each filter is a pure `&str -> String` transform. The preprocessing stage
//! chains the enabled filters in a fixed order, see
//! [`crate::config::PreprocessOptions::filters`].

use std::fmt;

mod empty_lines;
mod line_endings;
mod trailing_whitespace;

// Re-export the standalone functions
pub use empty_lines::{collapse_blank_runs, remove_extra_empty_lines};
pub use line_endings::normalize_line_endings;
pub use trailing_whitespace::remove_trailing_whitespace;

/// A trait for content transformation filters.
///
/// Filters are applied sequentially to the content of each record.
pub trait ContentFilter: Send + Sync {
    /// Applies the filter to the given content string.
    fn apply(&self, content: &str) -> String;
    /// Returns a descriptive name for the filter.
    fn name(&self) -> &'static str;
}

// Implement Debug manually for Box<dyn ContentFilter> by using the name method.
impl fmt::Debug for Box<dyn ContentFilter> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContentFilter").field(&self.name()).finish()
    }
}

// --- Filter Implementations ---

/// Filter converting `CRLF` and lone `CR` line endings to `LF`.
#[derive(Debug)]
pub struct NormalizeLineEndingsFilter;

impl ContentFilter for NormalizeLineEndingsFilter {
    fn apply(&self, content: &str) -> String {
        line_endings::normalize_line_endings(content)
    }
    fn name(&self) -> &'static str {
        "NormalizeLineEndingsFilter"
    }
}

/// Filter stripping trailing whitespace from every `LF`-separated line.
#[derive(Debug)]
pub struct RemoveTrailingWhitespaceFilter;

impl ContentFilter for RemoveTrailingWhitespaceFilter {
    fn apply(&self, content: &str) -> String {
        trailing_whitespace::remove_trailing_whitespace(content)
    }
    fn name(&self) -> &'static str {
        "RemoveTrailingWhitespaceFilter"
    }
}

/// Filter keeping at most one blank line between blocks and dropping leading newlines.
#[derive(Debug)]
pub struct RemoveExtraEmptyLinesFilter;

impl ContentFilter for RemoveExtraEmptyLinesFilter {
    fn apply(&self, content: &str) -> String {
        empty_lines::remove_extra_empty_lines(content)
    }
    fn name(&self) -> &'static str {
        "RemoveExtraEmptyLinesFilter"
    }
}
