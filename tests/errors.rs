// tests/errors.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, filecombine_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_error_missing_folder() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    filecombine_cmd()
        .arg("non_existent_path_hopefully")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Folder path 'non_existent_path_hopefully' does not exist or is not a directory.",
        ));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_file_instead_of_folder() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "A")?;

    filecombine_cmd()
        .arg("a.txt")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not a directory"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_invalid_sort_mode() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    filecombine_cmd()
        .args(["--sort", "size"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid sort_mode: size"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_invalid_output_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    filecombine_cmd()
        .args(["-f", "XML"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid output_format: xml"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_extension_without_dot() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    filecombine_cmd()
        .args(["-e", "txt"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Extension 'txt' must start with a dot."));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_negative_max_depth() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    filecombine_cmd()
        .args(["--max-depth", "-1"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max_depth must be a non-negative integer"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_unwritable_output_is_internal_failure() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "A")?;

    filecombine_cmd()
        .arg(".")
        .args(["-o", "missing/dir/out.md"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("I/O error accessing path"));

    temp.close()?;
    Ok(())
}
