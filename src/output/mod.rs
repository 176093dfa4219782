//! The render stage of the combination pipeline.
//!
//! Each [`OutputFormat`] has a [`Renderer`]. Markdown is assembled as text;
//! JSON and YAML serialize the same [`document::CombinedDocument`] and differ
//! only in the serializer.

use crate::config::{OutputFormat, SortMode};
use crate::core_types::FileRecord;
use crate::errors::Result;
use chrono::NaiveDateTime;
use log::debug;

mod anchor;
pub mod document;
pub mod markdown;
pub mod writer; // Manages the output destination

pub use anchor::normalize_anchor;
use document::{CombinedDocument, EmptyResult};

/// Inputs a renderer needs besides the records themselves.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Echoed into structured metadata.
    pub sort_mode: SortMode,
    /// Echoed into structured metadata.
    pub filter_extensions: Option<&'a [String]>,
    /// Generation time recorded in structured metadata.
    pub generated_at: NaiveDateTime,
}

/// A trait for producing the final document in one output format.
pub trait Renderer: Send + Sync {
    /// Renders already filtered, preprocessed and sorted records.
    fn render(&self, records: &[FileRecord], ctx: &RenderContext<'_>) -> Result<String>;
    /// Renders the "no files matched" document.
    fn render_empty(&self) -> Result<String>;
}

/// Renders structured markdown.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, records: &[FileRecord], _ctx: &RenderContext<'_>) -> Result<String> {
        Ok(markdown::render_markdown(records))
    }

    fn render_empty(&self) -> Result<String> {
        Ok(markdown::empty_markdown())
    }
}

/// Renders a pretty-printed JSON object with 2-space indentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, records: &[FileRecord], ctx: &RenderContext<'_>) -> Result<String> {
        let doc = CombinedDocument::build(
            records,
            ctx.sort_mode,
            ctx.filter_extensions,
            ctx.generated_at,
        );
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    fn render_empty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&EmptyResult::default())?)
    }
}

/// Renders a block-style YAML mapping with keys in insertion order.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlRenderer;

impl Renderer for YamlRenderer {
    fn render(&self, records: &[FileRecord], ctx: &RenderContext<'_>) -> Result<String> {
        let doc = CombinedDocument::build(
            records,
            ctx.sort_mode,
            ctx.filter_extensions,
            ctx.generated_at,
        );
        Ok(serde_yaml::to_string(&doc)?)
    }

    fn render_empty(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&EmptyResult::default())?)
    }
}

/// Returns the renderer for an output format.
pub fn renderer_for(format: OutputFormat) -> &'static dyn Renderer {
    match format {
        OutputFormat::Markdown => &MarkdownRenderer,
        OutputFormat::Json => &JsonRenderer,
        OutputFormat::Yaml => &YamlRenderer,
    }
}

/// Renders records in the requested format.
///
/// An empty slice produces the format's empty-result document.
pub fn render(
    records: &[FileRecord],
    format: OutputFormat,
    ctx: &RenderContext<'_>,
) -> Result<String> {
    let renderer = renderer_for(format);
    if records.is_empty() {
        debug!("Rendering empty {} result", format);
        return renderer.render_empty();
    }
    debug!("Rendering {} records as {}", records.len(), format);
    renderer.render(records, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::Value;

    fn ts(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn ctx(exts: Option<&[String]>) -> RenderContext<'_> {
        RenderContext {
            sort_mode: SortMode::DateDesc,
            filter_extensions: exts,
            generated_at: ts(9),
        }
    }

    #[test]
    fn test_empty_json_exact() -> Result<()> {
        let out = render(&[], OutputFormat::Json, &ctx(None))?;
        assert_eq!(
            out,
            "{\n  \"error\": \"No files found matching the criteria.\"\n}"
        );
        Ok(())
    }

    #[test]
    fn test_empty_yaml_exact() -> Result<()> {
        let out = render(&[], OutputFormat::Yaml, &ctx(None))?;
        assert_eq!(out, "error: No files found matching the criteria.\n");
        Ok(())
    }

    #[test]
    fn test_json_structure_and_key_order() -> Result<()> {
        let exts = vec![".txt".to_string()];
        let records = vec![FileRecord::new("file1.txt", "Line 1\nLine 2", ts(1))];
        let out = render(&records, OutputFormat::Json, &ctx(Some(exts.as_slice())))?;

        let expected = "{\n  \"metadata\": {\n    \"title\": \"Combined Files\",\n    \"total_files\": 1,\n    \"sort_mode\": \"date_desc\",\n    \"filter_extensions\": [\n      \".txt\"\n    ],\n    \"generated_at\": \"2023-01-09T12:00:00.000000\"\n  },\n  \"files\": [\n    {\n      \"name\": \"file1.txt\",\n      \"last_modified\": \"2023-01-01T12:00:00\",\n      \"content\": \"Line 1\\nLine 2\"\n    }\n  ]\n}";
        assert_eq!(out, expected);
        Ok(())
    }

    #[test]
    fn test_json_non_ascii_literal() -> Result<()> {
        let records = vec![FileRecord::new("отчёт.md", "Привет, мир ✓", ts(1))];
        let out = render(&records, OutputFormat::Json, &ctx(None))?;
        assert!(out.contains("\"name\": \"отчёт.md\""));
        assert!(out.contains("Привет, мир ✓"));
        assert!(!out.contains("\\u"));
        Ok(())
    }

    #[test]
    fn test_json_filter_extensions_null_when_absent() -> Result<()> {
        let records = vec![FileRecord::new("a.txt", "", ts(1))];
        let out = render(&records, OutputFormat::Json, &ctx(None))?;
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert!(parsed["metadata"]["filter_extensions"].is_null());
        Ok(())
    }

    #[test]
    fn test_yaml_block_style_and_order() -> Result<()> {
        let records = vec![
            FileRecord::new("sub/b.txt", "Line A\nLine B", ts(2)).with_relative_path("sub/b.txt"),
        ];
        let out = render(&records, OutputFormat::Yaml, &ctx(None))?;

        assert!(out.starts_with("metadata:\n  title: Combined Files\n  total_files: 1\n"));
        let pos_meta = out.find("metadata:").unwrap();
        let pos_files = out.find("files:").unwrap();
        assert!(pos_meta < pos_files);
        let pos_name = out.find("name: sub/b.txt").unwrap();
        let pos_rel = out.find("relative_path: sub/b.txt").unwrap();
        assert!(pos_name < pos_rel);
        // Block style, not flow style.
        assert!(!out.contains('{'));

        let parsed: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(parsed["files"][0]["content"].as_str(), Some("Line A\nLine B"));
        Ok(())
    }

    #[test]
    fn test_yaml_non_ascii_literal() -> Result<()> {
        let records = vec![FileRecord::new("файл.txt", "содержимое", ts(1))];
        let out = render(&records, OutputFormat::Yaml, &ctx(None))?;
        assert!(out.contains("файл.txt"));
        assert!(out.contains("содержимое"));
        Ok(())
    }

    #[test]
    fn test_yaml_ambiguous_scalars_read_back_as_strings() -> Result<()> {
        let contents = ["yes", "on", "No", "2023-01-01", "1.5"];
        let records: Vec<_> = contents
            .iter()
            .enumerate()
            .map(|(i, c)| FileRecord::new(format!("f{}.txt", i), *c, ts(1)))
            .collect();
        let out = render(&records, OutputFormat::Yaml, &ctx(None))?;

        let parsed: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        for (i, expected) in contents.iter().enumerate() {
            assert_eq!(parsed["files"][i]["content"].as_str(), Some(*expected));
            assert_eq!(
                parsed["files"][i]["last_modified"].as_str(),
                Some("2023-01-01T12:00:00")
            );
        }
        assert_eq!(
            parsed["metadata"]["generated_at"].as_str(),
            Some("2023-01-09T12:00:00.000000")
        );
        Ok(())
    }

    #[test]
    fn test_empty_markdown_via_renderer() -> Result<()> {
        let out = render(&[], OutputFormat::Markdown, &ctx(None))?;
        assert_eq!(out, "# Combined Files\n\nNo files found matching the criteria.\n");
        Ok(())
    }
}
