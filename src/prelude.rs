//! The `filecombine` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the `filecombine` library. By importing everything from this prelude, you can
//! easily get started with using `filecombine` programmatically.
//!
//! # Example
//!
//! ```
//! use filecombine::prelude::*;
//! use chrono::Local;
//! # fn main() -> Result<()> {
//!
//! let options = CombineOptionsBuilder::new().sort_mode("date_desc").build()?;
//! let records = vec![FileRecord::new("a.txt", "Hello", Local::now().naive_local())];
//! let markdown = combine(records, &options)?;
//! assert!(markdown.starts_with("# Combined Files"));
//!
//! # Ok(())
//! # }
//! ```

pub use crate::config::{
    CombineOptions, CombineOptionsBuilder, OutputFormat, PreprocessOptions, ScanOptions, SortMode,
};
pub use crate::core_types::FileRecord;
pub use crate::errors::{Error, Result};
pub use crate::filtering::{filter_records, passes_extension_filter};
pub use crate::output::{render, renderer_for, RenderContext, Renderer};
pub use crate::processing::{
    filters::{
        normalize_line_endings, remove_extra_empty_lines, remove_trailing_whitespace,
        ContentFilter, NormalizeLineEndingsFilter, RemoveExtraEmptyLinesFilter,
        RemoveTrailingWhitespaceFilter,
    },
    preprocess_records,
};
pub use crate::scan::scan_directory;
pub use crate::sorting::sort_records;
pub use crate::{combine, combine_at};
