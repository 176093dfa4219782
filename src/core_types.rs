//! Defines the core data structure used throughout the combination pipeline.
//!
//! A `FileRecord` is the engine's unit of input: one file's decoded text plus
//! the metadata the renderers need. Records are built by collaborators (the
//! upload decoder and the folder scanner) and consumed by [`crate::combine`].

use chrono::NaiveDateTime;

/// One file's decoded content and metadata.
///
/// # Examples
///
/// ```
/// use filecombine::core_types::FileRecord;
/// use chrono::NaiveDate;
///
/// let uploaded_at = NaiveDate::from_ymd_opt(2023, 1, 1)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
/// let record = FileRecord::new("notes.txt", "Hello", uploaded_at);
///
/// assert_eq!(record.name, "notes.txt");
/// assert!(record.relative_path.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Display identifier. May contain `/` separators for scanned files.
    pub name: String,
    /// Full decoded text content. Invalid bytes were replaced with U+FFFD upstream.
    pub content: String,
    /// Upload time or filesystem modification time, in local naive time.
    pub last_modified: NaiveDateTime,
    /// Path relative to the scan root. Only set for records produced by a folder scan.
    pub relative_path: Option<String>,
}

impl FileRecord {
    /// Creates a record without a `relative_path`.
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        last_modified: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            last_modified,
            relative_path: None,
        }
    }

    /// Sets the path relative to the scan root.
    pub fn with_relative_path(mut self, relative_path: impl Into<String>) -> Self {
        self.relative_path = Some(relative_path.into());
        self
    }

    /// Builds a record from raw uploaded bytes.
    ///
    /// Content that is not valid UTF-8 is decoded with replacement characters
    /// rather than rejected. The upload time becomes `last_modified`.
    ///
    /// # Examples
    ///
    /// ```
    /// use filecombine::core_types::FileRecord;
    /// use chrono::Local;
    ///
    /// let record = FileRecord::from_upload("bad.txt", b"ok\xFFok", Local::now().naive_local());
    /// assert_eq!(record.content, "ok\u{FFFD}ok");
    /// ```
    pub fn from_upload(name: impl Into<String>, bytes: &[u8], uploaded_at: NaiveDateTime) -> Self {
        Self::new(name, String::from_utf8_lossy(bytes).into_owned(), uploaded_at)
    }
}
