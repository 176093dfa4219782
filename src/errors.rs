//! Defines application-specific error types.
//!
//! Errors fall into two families. Validation errors describe bad input that a
//! caller must reject before the combination engine runs (unknown sort modes,
//! malformed extensions, missing folders). Everything else is an internal
//! failure of a single invocation, such as a serializer or I/O error.

use thiserror::Error;

/// A convenient `Result` alias used throughout `filecombine`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by `filecombine`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    // --- Validation Errors ---
    /// The sort mode is not one of `name`, `date_asc`, `date_desc`.
    #[error("Invalid sort_mode: {0}")]
    InvalidSortMode(String),

    /// The output format is not one of `markdown`, `json`, `yaml`.
    #[error("Invalid output_format: {0}")]
    InvalidOutputFormat(String),

    /// An extension filter entry does not start with a dot.
    #[error("Extension '{0}' must start with a dot.")]
    InvalidExtension(String),

    /// A negative folder depth was requested.
    #[error("max_depth must be a non-negative integer (0 for unlimited depth), got {0}")]
    InvalidMaxDepth(i64),

    /// The folder to scan does not exist or is not a directory.
    #[error("Folder path '{0}' does not exist or is not a directory.")]
    NotADirectory(String),

    /// An upload request carried no files.
    #[error("No files uploaded.")]
    NoFilesUploaded,

    /// An uploaded file part had no file name.
    #[error("Uploaded file part '{0}' has no file name.")]
    MissingFileName(String),

    /// A form field could not be parsed, e.g. a boolean that is not `true`/`false`.
    #[error("Invalid value for '{field}': {value}")]
    InvalidFieldValue {
        /// The form field name.
        field: String,
        /// The rejected raw value.
        value: String,
    },

    // --- Internal Errors ---
    /// Error occurring during file or directory access.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The JSON renderer failed to serialize the document.
    #[error("Failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML renderer failed to serialize the document.
    #[error("Failed to render YAML output: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A background task running the engine did not complete.
    #[error("Combination task failed: {0}")]
    TaskFailed(String),
}

impl Error {
    /// Returns `true` for errors caused by invalid caller input.
    ///
    /// The HTTP service maps these to `400 Bad Request` and the CLI exits with
    /// status 2; all other variants are internal failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidSortMode(_)
                | Error::InvalidOutputFormat(_)
                | Error::InvalidExtension(_)
                | Error::InvalidMaxDepth(_)
                | Error::NotADirectory(_)
                | Error::NoFilesUploaded
                | Error::MissingFileName(_)
                | Error::InvalidFieldValue { .. }
        )
    }
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
