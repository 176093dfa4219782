//! The sort stage of the combination pipeline.

use crate::config::SortMode;
use crate::core_types::FileRecord;

/// Reorders records in place according to `mode`.
///
/// All modes use a stable sort, so records with equal keys keep their input
/// order. This holds for `DateDesc` as well: ties are not reversed.
///
/// # Examples
///
/// ```
/// use filecombine::config::SortMode;
/// use filecombine::core_types::FileRecord;
/// use filecombine::sorting::sort_records;
/// use chrono::Local;
///
/// let now = Local::now().naive_local();
/// let mut records = vec![
///     FileRecord::new("b.txt", "", now),
///     FileRecord::new("A.txt", "", now),
/// ];
/// sort_records(&mut records, SortMode::Name);
/// assert_eq!(records[0].name, "A.txt");
/// ```
pub fn sort_records(records: &mut [FileRecord], mode: SortMode) {
    match mode {
        SortMode::Name => records.sort_by_cached_key(|r| r.name.to_lowercase()),
        SortMode::DateAsc => records.sort_by(|a, b| a.last_modified.cmp(&b.last_modified)),
        SortMode::DateDesc => records.sort_by(|a, b| b.last_modified.cmp(&a.last_modified)),
    }
}
