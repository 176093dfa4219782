//! Builds file records from a directory tree.
//!
//! This is the folder collaborator of the engine: it walks a root directory,
//! reads every matching file as text and records its modification time and
//! path relative to the root.

use crate::config::ScanOptions;
use crate::core_types::FileRecord;
use crate::errors::{io_error_with_path, Result};
use crate::filtering::passes_extension_filter;
use chrono::{DateTime, Local};
use log::{debug, trace};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively scans `options.root` and returns one record per matching file.
///
/// - `max_depth == 0` walks the whole tree. Otherwise files at most
///   `max_depth` directory levels below the root are included, where files
///   directly inside the root are at level 0.
/// - The extension filter is applied to file names while scanning.
/// - Content is decoded as UTF-8 with replacement characters.
/// - `name` and `relative_path` are both the `/`-separated path relative to the root.
/// - Entries that cannot be accessed because of permissions are skipped.
///
/// Records are returned in file-name order within each directory; the engine
/// applies its own sort afterwards.
///
/// # Errors
/// Returns `Error::Io` if a file can be listed but reading its content or
/// metadata fails for a reason other than missing permissions.
///
/// # Examples
///
/// ```
/// use filecombine::config::ScanOptions;
/// use filecombine::scan::scan_directory;
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = tempdir()?;
/// fs::create_dir(dir.path().join("sub"))?;
/// fs::write(dir.path().join("a.txt"), "A")?;
/// fs::write(dir.path().join("sub").join("b.txt"), "B")?;
///
/// let options = ScanOptions::new(dir.path(), 0, None)?;
/// let records = scan_directory(&options)?;
///
/// let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
/// assert_eq!(names, vec!["a.txt", "sub/b.txt"]);
/// assert_eq!(records[1].relative_path.as_deref(), Some("sub/b.txt"));
/// # Ok(())
/// # }
/// ```
pub fn scan_directory(options: &ScanOptions) -> Result<Vec<FileRecord>> {
    let mut walker = WalkDir::new(&options.root)
        .follow_links(true)
        .sort_by_file_name();
    if options.max_depth > 0 {
        // walkdir counts the root as depth 0 and its children as depth 1.
        walker = walker.max_depth(options.max_depth + 1);
    }

    let mut records = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping inaccessible entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !passes_extension_filter(&file_name, options.extensions.as_deref()) {
            trace!("Skipping by extension: {}", entry.path().display());
            continue;
        }

        if let Some(record) = read_record(entry.path(), &options.root)? {
            records.push(record);
        }
    }

    debug!(
        "Scan of '{}' complete: {} files",
        options.root.display(),
        records.len()
    );
    Ok(records)
}

/// Reads one file into a record. Returns `Ok(None)` for permission errors.
fn read_record(path: &Path, root: &Path) -> Result<Option<FileRecord>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            debug!("Skipping unreadable file '{}': {}", path.display(), e);
            return Ok(None);
        }
        Err(e) => return Err(io_error_with_path(e, path)),
    };

    let modified = fs::metadata(path)
        .and_then(|md| md.modified())
        .map_err(|e| io_error_with_path(e, path))?;
    let last_modified = DateTime::<Local>::from(modified).naive_local();

    let relative = relative_display_path(path, root);
    let content = String::from_utf8_lossy(&bytes).into_owned();
    Ok(Some(
        FileRecord::new(relative.clone(), content, last_modified).with_relative_path(relative),
    ))
}

/// Formats `path` relative to `root` using `/` separators on every platform.
fn relative_display_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
