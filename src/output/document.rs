//! The intermediate document shared by the JSON and YAML renderers.
//!
//! Both structured formats serialize the same [`CombinedDocument`], so field
//! order, field presence and timestamp formatting cannot drift between them.

use crate::config::SortMode;
use crate::constants::{DOCUMENT_TITLE, EMPTY_RESULT_MESSAGE};
use crate::core_types::FileRecord;
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

/// Top-level structured document: `metadata` followed by `files`.
#[derive(Debug, Serialize)]
pub struct CombinedDocument<'a> {
    pub metadata: DocumentMetadata<'a>,
    pub files: Vec<FileEntry<'a>>,
}

/// Document-level metadata.
#[derive(Debug, Serialize)]
pub struct DocumentMetadata<'a> {
    pub title: &'static str,
    pub total_files: usize,
    pub sort_mode: SortMode,
    /// Echo of the extension filter, `null` when none was given.
    pub filter_extensions: Option<&'a [String]>,
    pub generated_at: String,
}

/// One rendered record.
#[derive(Debug, Serialize)]
pub struct FileEntry<'a> {
    pub name: &'a str,
    pub last_modified: String,
    pub content: &'a str,
    /// Only present for records produced by a folder scan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<&'a str>,
}

/// The `{error: ...}` document emitted when no records reach the renderers.
#[derive(Debug, Serialize)]
pub struct EmptyResult {
    pub error: &'static str,
}

impl Default for EmptyResult {
    fn default() -> Self {
        Self {
            error: EMPTY_RESULT_MESSAGE,
        }
    }
}

impl<'a> CombinedDocument<'a> {
    /// Builds the document from records that are already filtered, preprocessed and sorted.
    pub fn build(
        records: &'a [FileRecord],
        sort_mode: SortMode,
        filter_extensions: Option<&'a [String]>,
        generated_at: NaiveDateTime,
    ) -> Self {
        let files = records
            .iter()
            .map(|record| FileEntry {
                name: &record.name,
                last_modified: format_timestamp(&record.last_modified),
                content: &record.content,
                relative_path: record.relative_path.as_deref(),
            })
            .collect();

        Self {
            metadata: DocumentMetadata {
                title: DOCUMENT_TITLE,
                total_files: records.len(),
                sort_mode,
                filter_extensions,
                generated_at: format_generation_time(&generated_at),
            },
            files,
        }
    }
}

/// Formats a record timestamp as ISO-8601.
///
/// Microseconds are appended only when the sub-second part is non-zero, so
/// whole-second timestamps render as `2023-01-01T12:00:00`.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    let micros = (ts.nanosecond() % 1_000_000_000) / 1_000;
    if micros == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Formats the generation time as ISO-8601 with microsecond precision.
pub fn format_generation_time(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
