//! Handles the preprocessing stage of the combination pipeline.
//!
//! This stage rewrites each record's `content` with the enabled filters. It
//! never touches names, timestamps or relative paths, so it has no effect on
//! filtering or sorting.

use crate::config::PreprocessOptions;
use crate::core_types::FileRecord;
use log::debug;

pub mod filters;

/// Applies the enabled content filters to every record, in place.
///
/// Filters run in their fixed order (line endings, trailing whitespace, empty
/// lines). With no filters enabled the records are left untouched.
///
/// # Examples
///
/// ```
/// use filecombine::config::PreprocessOptions;
/// use filecombine::core_types::FileRecord;
/// use filecombine::processing::preprocess_records;
/// use chrono::Local;
///
/// let mut records = vec![FileRecord::new("a.txt", "x \r\ny", Local::now().naive_local())];
/// let options = PreprocessOptions {
///     normalize_line_endings: true,
///     remove_trailing_whitespace: true,
///     ..Default::default()
/// };
/// preprocess_records(&mut records, &options);
/// assert_eq!(records[0].content, "x\ny");
/// ```
pub fn preprocess_records(records: &mut [FileRecord], options: &PreprocessOptions) {
    let filters = options.filters();
    if filters.is_empty() {
        return;
    }

    for record in records.iter_mut() {
        for filter in &filters {
            record.content = filter.apply(&record.content);
            debug!("Applied filter '{}' to {}", filter.name(), record.name);
        }
    }
}
