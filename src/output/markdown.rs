// src/output/markdown.rs

use super::anchor::normalize_anchor;
use crate::constants::{
    DOCUMENT_TITLE, EMPTY_RESULT_MESSAGE, MARKDOWN_DATE_FORMAT, SECTION_SEPARATOR, TOC_HEADING,
};
use crate::core_types::FileRecord;
use crate::processing::filters::collapse_blank_runs;
use std::fmt::Write;

/// The fixed markdown document produced when there is nothing to combine.
pub fn empty_markdown() -> String {
    format!("# {}\n\n{}\n", DOCUMENT_TITLE, EMPTY_RESULT_MESSAGE)
}

/// Renders records as a markdown document with a table of contents.
///
/// Layout: title, a numbered table of contents linking to each record's
/// anchor, then one section per record with its name, modification date and
/// content between horizontal rules. Runs of three or more newlines in the
/// assembled text are collapsed to two. `relative_path` is not rendered.
pub fn render_markdown(records: &[FileRecord]) -> String {
    let mut out = String::new();

    // write! into a String cannot fail.
    let _ = write!(out, "# {}\n\n## {}\n", DOCUMENT_TITLE, TOC_HEADING);
    for (index, record) in records.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. [{}](#{})",
            index + 1,
            record.name,
            normalize_anchor(&record.name)
        );
    }
    let _ = writeln!(out, "\n{}", SECTION_SEPARATOR);

    for record in records {
        let _ = write!(
            out,
            "\n{sep}\n## {name}\n*Last modified: {date}*\n\n{content}\n\n{sep}",
            sep = SECTION_SEPARATOR,
            name = record.name,
            date = record.last_modified.format(MARKDOWN_DATE_FORMAT),
            content = record.content,
        );
    }

    collapse_blank_runs(&out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(name: &str, content: &str, hour: u32) -> FileRecord {
        let ts = NaiveDate::from_ymd_opt(2023, 10, 27)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        FileRecord::new(name, content, ts)
    }

    #[test]
    fn test_empty_markdown() {
        assert_eq!(
            empty_markdown(),
            "# Combined Files\n\nNo files found matching the criteria.\n"
        );
    }

    #[test]
    fn test_render_single_record_exact() {
        let output = render_markdown(&[record("file1.txt", "Content of file 1.", 10)]);
        let expected = "# Combined Files\n\n\
                        ## Table of Contents\n\
                        1. [file1.txt](#file1-txt)\n\
                        \n---\n\
                        \n---\n\
                        ## file1.txt\n\
                        *Last modified: 2023-10-27 10:00:00*\n\n\
                        Content of file 1.\n\n---";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_toc_numbering_follows_order() {
        let output = render_markdown(&[
            record("b.txt", "B", 10),
            record("a_file.txt", "A", 11),
        ]);
        assert!(output.contains("1. [b.txt](#b-txt)\n2. [a_file.txt](#a_file-txt)\n"));
        let pos_b = output.find("## b.txt").unwrap();
        let pos_a = output.find("## a_file.txt").unwrap();
        assert!(pos_b < pos_a);
    }

    #[test]
    fn test_render_collapses_newline_runs() {
        // Content ending in newlines and an empty record both produce runs of 3+.
        let output = render_markdown(&[record("a.txt", "x\n\n\n\n", 10), record("e.txt", "", 11)]);
        assert!(!output.contains("\n\n\n"));
        assert!(output.contains("x\n\n---"));
        assert!(output.contains("*Last modified: 2023-10-27 11:00:00*\n\n---"));
    }

    #[test]
    fn test_render_omits_relative_path() {
        let rec = record("name.txt", "body", 10).with_relative_path("hidden/rel/path.txt");
        let output = render_markdown(&[rec]);
        assert!(!output.contains("hidden/rel/path.txt"));
    }
}
