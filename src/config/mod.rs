//! Defines the option types that drive a combination.
//!
//! Raw caller input (CLI flags, form fields) is parsed and validated here into
//! strongly typed options. The engine only ever sees these validated types, so
//! it never has to re-check sort modes, formats, or extension syntax.

use crate::errors::Error;
use crate::processing::filters::{
    ContentFilter, NormalizeLineEndingsFilter, RemoveExtraEmptyLinesFilter,
    RemoveTrailingWhitespaceFilter,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub use builder::CombineOptionsBuilder;
pub use parsing::{normalize_extensions, parse_extensions};
pub use validation::{validate_extensions, validate_max_depth, validate_scan_root};
mod builder;
mod parsing;
mod validation;

/// Ordering applied to records before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Ascending by name, case-insensitive.
    #[default]
    Name,
    /// Oldest first.
    DateAsc,
    /// Newest first.
    DateDesc,
}

impl SortMode {
    /// The wire name echoed in document metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Name => "name",
            SortMode::DateAsc => "date_asc",
            SortMode::DateDesc => "date_desc",
        }
    }
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortMode::Name),
            "date_asc" => Ok(SortMode::DateAsc),
            "date_desc" => Ok(SortMode::DateDesc),
            other => Err(Error::InvalidSortMode(other.to_string())),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoding of the combined document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Structured markdown with a table of contents.
    #[default]
    Markdown,
    /// Pretty-printed JSON object.
    Json,
    /// Block-style YAML mapping.
    Yaml,
}

impl OutputFormat {
    /// The wire name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    /// The `Content-Type` used when serving a document in this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "text/markdown; charset=utf-8",
            OutputFormat::Json => "application/json",
            OutputFormat::Yaml => "application/yaml",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    /// Parses a format name, ignoring case (Unicode lowercasing).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(Error::InvalidOutputFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content transforms applied to each record before sorting and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreprocessOptions {
    /// Remove runs of blank lines beyond one, and leading newlines.
    pub remove_extra_empty_lines: bool,
    /// Convert `CRLF` and lone `CR` to `LF`.
    pub normalize_line_endings: bool,
    /// Strip trailing whitespace from every line.
    pub remove_trailing_whitespace: bool,
}

impl PreprocessOptions {
    /// Returns `true` when no transform is enabled.
    pub fn is_noop(&self) -> bool {
        !(self.remove_extra_empty_lines
            || self.normalize_line_endings
            || self.remove_trailing_whitespace)
    }

    /// Builds the enabled filters in their fixed application order:
    /// line endings, then trailing whitespace, then empty lines.
    pub fn filters(&self) -> Vec<Box<dyn ContentFilter>> {
        let mut filters: Vec<Box<dyn ContentFilter>> = Vec::new();
        if self.normalize_line_endings {
            filters.push(Box::new(NormalizeLineEndingsFilter));
        }
        if self.remove_trailing_whitespace {
            filters.push(Box::new(RemoveTrailingWhitespaceFilter));
        }
        if self.remove_extra_empty_lines {
            filters.push(Box::new(RemoveExtraEmptyLinesFilter));
        }
        filters
    }
}

/// Validated options for one combination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CombineOptions {
    /// Record ordering.
    pub sort_mode: SortMode,
    /// Lowercase extension suffixes, each starting with `.`. `None` keeps every record.
    pub extensions: Option<Vec<String>>,
    /// Content transforms.
    pub preprocessing: PreprocessOptions,
    /// Output encoding.
    pub output_format: OutputFormat,
}

/// Validated options for a recursive folder scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Directory to scan.
    pub root: PathBuf,
    /// Maximum directory levels below the root to descend. `0` means unlimited.
    pub max_depth: usize,
    /// Lowercase extension suffixes applied while scanning.
    pub extensions: Option<Vec<String>>,
}

impl ScanOptions {
    /// Validates raw scan input.
    ///
    /// # Errors
    /// Returns `Error::NotADirectory` if `root` is not an existing directory,
    /// `Error::InvalidMaxDepth` for a negative depth, and
    /// `Error::InvalidExtension` for an extension without a leading dot.
    pub fn new(
        root: impl Into<PathBuf>,
        max_depth: i64,
        extensions: Option<Vec<String>>,
    ) -> Result<Self, Error> {
        let root = root.into();
        validate_scan_root(&root)?;
        let max_depth = validate_max_depth(max_depth)?;
        let extensions = normalize_extensions(extensions);
        if let Some(exts) = &extensions {
            validate_extensions(exts)?;
        }
        Ok(Self {
            root,
            max_depth,
            extensions,
        })
    }
}
