// src/constants.rs

/// Title used by every renderer.
pub const DOCUMENT_TITLE: &str = "Combined Files";

/// Sentence emitted when no records reach the renderers.
pub const EMPTY_RESULT_MESSAGE: &str = "No files found matching the criteria.";

/// Heading of the markdown table of contents.
pub const TOC_HEADING: &str = "Table of Contents";

/// Horizontal rule separating markdown sections.
pub const SECTION_SEPARATOR: &str = "---";

/// Date format used in the markdown "Last modified" line.
pub const MARKDOWN_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default port for `filecombine serve`.
pub const DEFAULT_PORT: u16 = 8000;

/// Origins allowed by the HTTP service when none are configured.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:8501",
    "http://127.0.0.1:8501",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
];

/// Request body limit for the upload endpoint (multipart overhead included).
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;
