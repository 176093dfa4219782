// src/filtering/extension.rs

use crate::core_types::FileRecord;

/// Checks if a file name passes the extension suffix filter.
///
/// The filter entries are suffixes such as `.txt` or `.tar.gz`. A name passes
/// if it ends with any of them. The comparison is case-insensitive on both
/// sides. An absent or empty filter passes every name.
///
/// # Examples
///
/// ```
/// use filecombine::filtering::passes_extension_filter;
///
/// let exts = vec![".txt".to_string(), ".md".to_string()];
///
/// assert!(passes_extension_filter("notes.TXT", Some(exts.as_slice())));
/// assert!(passes_extension_filter("docs/readme.md", Some(exts.as_slice())));
/// assert!(!passes_extension_filter("main.rs", Some(exts.as_slice())));
/// assert!(passes_extension_filter("Makefile", None));
/// ```
pub fn passes_extension_filter(name: &str, extensions: Option<&[String]>) -> bool {
    match extensions {
        Some(exts) if !exts.is_empty() => {
            let lower_name = name.to_lowercase();
            exts.iter()
                .any(|ext| lower_name.ends_with(&ext.to_lowercase()))
        }
        _ => true, // No filter configured
    }
}

/// Keeps only the records whose `name` passes the extension filter.
///
/// Relative input order is preserved. Filtering is keyed on `name`, never on
/// `relative_path`.
pub fn filter_records(records: Vec<FileRecord>, extensions: Option<&[String]>) -> Vec<FileRecord> {
    match extensions {
        Some(exts) if !exts.is_empty() => records
            .into_iter()
            .filter(|record| {
                let keep = passes_extension_filter(&record.name, Some(exts));
                if !keep {
                    log::debug!("Filtered out by extension: {}", record.name);
                }
                keep
            })
            .collect(),
        _ => records,
    }
}
