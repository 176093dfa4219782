// src/config/builder.rs

use super::{
    normalize_extensions, parse_extensions, validate_extensions, CombineOptions, OutputFormat,
    PreprocessOptions, SortMode,
};
use crate::cli::Cli;
use crate::errors::Result;

/// A builder for creating [`CombineOptions`] from raw, unvalidated input.
///
/// Sort mode and output format are taken as strings so that every front end
/// (CLI flags, HTTP form fields, library callers) goes through the same
/// validation. Unset values fall back to `name` and `markdown`.
///
/// # Examples
///
/// ```
/// use filecombine::config::{CombineOptionsBuilder, OutputFormat, SortMode};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = CombineOptionsBuilder::new()
///     .sort_mode("date_desc")
///     .extensions_str(".txt .MD")
///     .output_format("JSON")
///     .remove_trailing_whitespace(true)
///     .build()?;
///
/// assert_eq!(options.sort_mode, SortMode::DateDesc);
/// assert_eq!(options.output_format, OutputFormat::Json);
/// assert_eq!(options.extensions, Some(vec![".txt".to_string(), ".md".to_string()]));
/// assert!(options.preprocessing.remove_trailing_whitespace);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct CombineOptionsBuilder {
    sort_mode: Option<String>,
    extensions: Option<Vec<String>>,
    output_format: Option<String>,
    remove_extra_empty_lines: Option<bool>,
    normalize_line_endings: Option<bool>,
    remove_trailing_whitespace: Option<bool>,
}

impl CombineOptionsBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from parsed command-line arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            sort_mode: Some(cli.sort_mode.clone()),
            extensions: cli.extensions.clone(),
            output_format: Some(cli.output_format.clone()),
            remove_extra_empty_lines: Some(cli.remove_extra_empty_lines),
            normalize_line_endings: Some(cli.normalize_line_endings),
            remove_trailing_whitespace: Some(cli.remove_trailing_whitespace),
        }
    }

    /// Sets the sort mode (`name`, `date_asc` or `date_desc`).
    pub fn sort_mode(mut self, mode: impl Into<String>) -> Self {
        self.sort_mode = Some(mode.into());
        self
    }

    /// Sets the extension filter from a list of suffixes.
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    /// Sets the extension filter from a whitespace-separated string. A blank string disables filtering.
    pub fn extensions_str(mut self, extensions: &str) -> Self {
        self.extensions = parse_extensions(Some(extensions));
        self
    }

    /// Sets the output format (`markdown`, `json` or `yaml`, any case).
    pub fn output_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = Some(format.into());
        self
    }

    /// Enables or disables collapsing of extra empty lines.
    pub fn remove_extra_empty_lines(mut self, enabled: bool) -> Self {
        self.remove_extra_empty_lines = Some(enabled);
        self
    }

    /// Enables or disables line ending normalization.
    pub fn normalize_line_endings(mut self, enabled: bool) -> Self {
        self.normalize_line_endings = Some(enabled);
        self
    }

    /// Enables or disables trailing whitespace removal.
    pub fn remove_trailing_whitespace(mut self, enabled: bool) -> Self {
        self.remove_trailing_whitespace = Some(enabled);
        self
    }

    /// Validates the collected input and builds the options.
    ///
    /// # Errors
    /// Returns a validation error for an unknown sort mode or output format,
    /// or for an extension that does not start with `.`.
    pub fn build(self) -> Result<CombineOptions> {
        let sort_mode = match self.sort_mode.as_deref() {
            Some(mode) => mode.parse::<SortMode>()?,
            None => SortMode::default(),
        };
        let output_format = match self.output_format.as_deref() {
            Some(format) => format.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };
        let extensions = normalize_extensions(self.extensions);
        if let Some(exts) = &extensions {
            validate_extensions(exts)?;
        }

        let options = CombineOptions {
            sort_mode,
            extensions,
            preprocessing: PreprocessOptions {
                remove_extra_empty_lines: self.remove_extra_empty_lines.unwrap_or(false),
                normalize_line_endings: self.normalize_line_endings.unwrap_or(false),
                remove_trailing_whitespace: self.remove_trailing_whitespace.unwrap_or(false),
            },
            output_format,
        };
        log::debug!("Built combine options: {:?}", options);
        Ok(options)
    }
}
