// src/config/validation.rs

use crate::errors::{Error, Result};
use std::path::Path;

/// Checks that every extension begins with a dot.
pub fn validate_extensions(extensions: &[String]) -> Result<()> {
    match extensions.iter().find(|ext| !ext.starts_with('.')) {
        Some(bad) => Err(Error::InvalidExtension(bad.clone())),
        None => Ok(()),
    }
}

/// Converts a raw depth into a scan depth. `0` means unlimited.
pub fn validate_max_depth(max_depth: i64) -> Result<usize> {
    usize::try_from(max_depth).map_err(|_| Error::InvalidMaxDepth(max_depth))
}

/// Checks that the scan root exists and is a directory.
pub fn validate_scan_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(Error::NotADirectory(root.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_extensions_need_leading_dot() {
        assert!(validate_extensions(&[".txt".to_string(), ".md".to_string()]).is_ok());
        let err = validate_extensions(&[".txt".to_string(), "md".to_string()]).unwrap_err();
        assert!(matches!(err, Error::InvalidExtension(ref e) if e == "md"));
    }

    #[test]
    fn test_max_depth() {
        assert_eq!(validate_max_depth(0).unwrap(), 0);
        assert_eq!(validate_max_depth(3).unwrap(), 3);
        assert!(matches!(
            validate_max_depth(-5),
            Err(Error::InvalidMaxDepth(-5))
        ));
    }

    #[test]
    fn test_scan_root_must_be_directory() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file = temp.path().join("file.txt");
        std::fs::write(&file, "x")?;

        assert!(validate_scan_root(temp.path()).is_ok());
        assert!(matches!(
            validate_scan_root(&file),
            Err(Error::NotADirectory(_))
        ));
        Ok(())
    }
}
