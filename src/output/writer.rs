// src/output/writer.rs

//! Manages the output destination (stdout or file) for the command-line front end.

use crate::errors::{io_error_with_path, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Represents the destination for the combined document.
#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Write to the specified file path.
    File(PathBuf),
}

impl OutputDestination {
    /// Chooses a file destination when a path is given, stdout otherwise.
    pub fn from_option(path: Option<String>) -> Self {
        match path {
            Some(p) if !p.trim().is_empty() => OutputDestination::File(PathBuf::from(p)),
            _ => OutputDestination::Stdout,
        }
    }
}

/// Creates the appropriate output writer for a destination.
///
/// # Errors
/// Returns an error if a file cannot be created for writing.
pub fn setup_output_writer(destination: &OutputDestination) -> Result<Box<dyn Write + Send>> {
    let writer: Box<dyn Write + Send> = match destination {
        OutputDestination::Stdout => Box::new(io::stdout()),
        OutputDestination::File(path) => {
            let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
            Box::new(BufWriter::new(file)) // Use BufWriter for file I/O
        }
    };
    Ok(writer)
}

/// Writes a finished document to the destination and flushes it.
///
/// A trailing newline is appended when writing to stdout and the document
/// does not already end with one, so terminal prompts start on a fresh line.
/// Files receive the document byte for byte.
pub fn write_document(document: &str, destination: &OutputDestination) -> Result<()> {
    let mut writer = setup_output_writer(destination)?;
    let describe = |e: io::Error| match destination {
        OutputDestination::File(path) => io_error_with_path(e, path),
        OutputDestination::Stdout => io_error_with_path(e, "<stdout>"),
    };

    writer.write_all(document.as_bytes()).map_err(describe)?;
    if *destination == OutputDestination::Stdout && !document.ends_with('\n') {
        writer.write_all(b"\n").map_err(describe)?;
    }
    writer.flush().map_err(describe)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_from_option() {
        assert_eq!(OutputDestination::from_option(None), OutputDestination::Stdout);
        assert_eq!(
            OutputDestination::from_option(Some("  ".to_string())),
            OutputDestination::Stdout
        );
        assert_eq!(
            OutputDestination::from_option(Some("out.md".to_string())),
            OutputDestination::File(PathBuf::from("out.md"))
        );
    }

    #[test]
    fn test_write_document_to_file_is_exact() -> anyhow::Result<()> {
        let temp_file = NamedTempFile::new()?;
        let destination = OutputDestination::File(temp_file.path().to_path_buf());

        write_document("{\n  \"a\": 1\n}", &destination)?;

        let content = std::fs::read_to_string(temp_file.path())?;
        assert_eq!(content, "{\n  \"a\": 1\n}");
        Ok(())
    }

    #[test]
    fn test_setup_output_writer_missing_dir_fails() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let destination = OutputDestination::File(temp.path().join("no/such/dir/out.md"));
        let result = setup_output_writer(&destination);
        assert!(matches!(result, Err(crate::errors::Error::Io { .. })));
        Ok(())
    }
}
