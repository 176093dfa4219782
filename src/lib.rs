//! `filecombine` is a library and command-line tool for merging a set of text
//! files into one document: structured markdown with a table of contents, or a
//! JSON or YAML object that carries the same data for machine consumption.
//!
//! As a library, it provides a small, four-stage pipeline:
//! 1.  **Filter**: Keep records whose name ends with one of the requested extensions.
//! 2.  **Preprocess**: Normalize line endings, trailing whitespace and blank lines.
//! 3.  **Sort**: Order by name or by modification time.
//! 4.  **Render**: Produce the markdown, JSON or YAML document.
//!
//! Records come from collaborators: [`FileRecord::from_upload`] for uploaded
//! bytes and [`scan::scan_directory`] for a folder on disk.
//!
//! # Example: Library Usage
//!
//! ```
//! use filecombine::{combine_at, CombineOptionsBuilder, FileRecord};
//! use chrono::NaiveDate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let day = |d| NaiveDate::from_ymd_opt(2023, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//! // 1. Build records, e.g. from uploaded bytes.
//! let records = vec![
//!     FileRecord::from_upload("a.txt", b"Hello", day(1)),
//!     FileRecord::from_upload("b.md", b"# Notes", day(2)),
//! ];
//!
//! // 2. Validate options.
//! let options = CombineOptionsBuilder::new()
//!     .extensions_str(".txt")
//!     .output_format("json")
//!     .build()?;
//!
//! // 3. Combine with a fixed generation time.
//! let output = combine_at(records, &options, day(9))?;
//!
//! let doc: serde_json::Value = serde_json::from_str(&output)?;
//! assert_eq!(doc["metadata"]["total_files"], 1);
//! assert_eq!(doc["files"][0]["name"], "a.txt");
//! # Ok(())
//! # }
//! ```

// Make modules public if they contain public types used in the API
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod scan;
pub mod sorting;
#[cfg(feature = "web")]
pub mod web;

// Re-export key public types for easier use as a library
pub use config::{CombineOptions, CombineOptionsBuilder, OutputFormat, ScanOptions, SortMode};
pub use core_types::FileRecord;
pub use errors::{Error, Result};
pub use processing::filters;

use chrono::{Local, NaiveDateTime};
use log::debug;
use output::RenderContext;

/// Combines records into one document, stamping it with the current local time.
///
/// This is the primary entry point of the engine. See [`combine_at`] for the
/// stage-by-stage behavior.
///
/// # Errors
/// Returns `Error::Json` or `Error::Yaml` if the structured serializer fails.
pub fn combine(records: Vec<FileRecord>, options: &CombineOptions) -> Result<String> {
    combine_at(records, options, Local::now().naive_local())
}

/// Combines records into one document with an explicit generation time.
///
/// The stages run in a fixed order:
/// - records whose name does not end with a requested extension are dropped;
/// - if nothing survives, the format's "no files" document is returned and
///   no further stage runs;
/// - the enabled content filters are applied;
/// - records are sorted by `options.sort_mode`;
/// - the document is rendered in `options.output_format`.
///
/// `generated_at` only appears in JSON and YAML metadata, so passing a fixed
/// value makes the output fully reproducible.
///
/// # Errors
/// Returns `Error::Json` or `Error::Yaml` if the structured serializer fails.
pub fn combine_at(
    records: Vec<FileRecord>,
    options: &CombineOptions,
    generated_at: NaiveDateTime,
) -> Result<String> {
    let total_in = records.len();
    let mut records = filtering::filter_records(records, options.extensions.as_deref());
    debug!(
        "Combining {} of {} records (sort: {}, format: {})",
        records.len(),
        total_in,
        options.sort_mode,
        options.output_format
    );

    let ctx = RenderContext {
        sort_mode: options.sort_mode,
        filter_extensions: options.extensions.as_deref(),
        generated_at,
    };

    if records.is_empty() {
        return output::render(&[], options.output_format, &ctx);
    }

    processing::preprocess_records(&mut records, &options.preprocessing);
    sorting::sort_records(&mut records, options.sort_mode);
    output::render(&records, options.output_format, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreprocessOptions;
    use chrono::NaiveDate;
    use serde_json::Value;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn options(format: OutputFormat) -> CombineOptions {
        CombineOptions {
            output_format: format,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input_markdown() -> anyhow::Result<()> {
        let out = combine(Vec::new(), &options(OutputFormat::Markdown))?;
        assert_eq!(out, "# Combined Files\n\nNo files found matching the criteria.\n");
        Ok(())
    }

    #[test]
    fn test_extension_filter_json() -> anyhow::Result<()> {
        let records = vec![
            FileRecord::new("a.txt", "A", day(1)),
            FileRecord::new("b.md", "B", day(2)),
        ];
        let opts = CombineOptions {
            extensions: Some(vec![".txt".to_string()]),
            ..options(OutputFormat::Json)
        };
        let out = combine_at(records, &opts, day(9))?;
        let doc: Value = serde_json::from_str(&out)?;
        assert_eq!(doc["metadata"]["total_files"], 1);
        assert_eq!(doc["files"][0]["name"], "a.txt");
        assert_eq!(doc["metadata"]["filter_extensions"][0], ".txt");
        Ok(())
    }

    #[test]
    fn test_everything_filtered_out_is_empty_result() -> anyhow::Result<()> {
        let records = vec![FileRecord::new("a.rs", "fn main() {}", day(1))];
        let opts = CombineOptions {
            extensions: Some(vec![".py".to_string()]),
            ..options(OutputFormat::Json)
        };
        let out = combine_at(records, &opts, day(9))?;
        assert_eq!(out, "{\n  \"error\": \"No files found matching the criteria.\"\n}");
        Ok(())
    }

    #[test]
    fn test_preprocessing_applies_before_render() -> anyhow::Result<()> {
        let records = vec![
            FileRecord::new("x.txt", "L1\n\n\n\nL2", day(1)),
            FileRecord::new("y.txt", "a \r\nb\t\r\n", day(2)),
        ];
        let opts = CombineOptions {
            preprocessing: PreprocessOptions {
                remove_extra_empty_lines: true,
                normalize_line_endings: true,
                remove_trailing_whitespace: true,
            },
            ..options(OutputFormat::Json)
        };
        let out = combine_at(records, &opts, day(9))?;
        let doc: Value = serde_json::from_str(&out)?;
        assert_eq!(doc["files"][0]["content"], "L1\n\nL2");
        assert_eq!(doc["files"][1]["content"], "a\nb\n");
        Ok(())
    }

    #[test]
    fn test_sort_mode_applied_and_echoed() -> anyhow::Result<()> {
        let records = vec![
            FileRecord::new("old.txt", "", day(1)),
            FileRecord::new("new.txt", "", day(3)),
            FileRecord::new("mid.txt", "", day(2)),
        ];
        let opts = CombineOptions {
            sort_mode: SortMode::DateDesc,
            ..options(OutputFormat::Json)
        };
        let out = combine_at(records, &opts, day(9))?;
        let doc: Value = serde_json::from_str(&out)?;
        assert_eq!(doc["metadata"]["sort_mode"], "date_desc");
        assert_eq!(doc["metadata"]["generated_at"], "2023-01-09T00:00:00.000000");
        let names: Vec<_> = doc["files"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["new.txt", "mid.txt", "old.txt"]);
        Ok(())
    }

    #[test]
    fn test_json_preserves_content_exactly() -> anyhow::Result<()> {
        let content = "tabs\tand \"quotes\"\r\nunicode ✓\n";
        let records = vec![FileRecord::new("q.txt", content, day(1))];
        let out = combine_at(records, &options(OutputFormat::Json), day(9))?;
        let doc: Value = serde_json::from_str(&out)?;
        assert_eq!(doc["files"][0]["content"], content);
        Ok(())
    }

    #[test]
    fn test_markdown_output_deterministic() -> anyhow::Result<()> {
        let build = || {
            vec![
                FileRecord::new("b.txt", "B", day(2)),
                FileRecord::new("a.txt", "A", day(1)),
            ]
        };
        let opts = options(OutputFormat::Markdown);
        let first = combine(build(), &opts)?;
        let second = combine(build(), &opts)?;
        assert_eq!(first, second);
        assert!(first.contains("1. [a.txt](#a-txt)\n2. [b.txt](#b-txt)"));
        Ok(())
    }
}
