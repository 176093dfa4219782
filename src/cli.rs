// src/cli.rs

use clap::{Parser, Subcommand};

/// Combines the text files of a folder into one markdown, JSON or YAML document.
///
/// filecombine walks a directory, keeps the files whose names end with the
/// requested extensions, optionally normalizes their content, sorts them by name
/// or modification time, and renders a single document. Markdown output carries
/// a linked table of contents; JSON and YAML carry the same data with metadata.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the folder to combine.
    #[arg(default_value = ".")]
    pub folder: String,

    // --- Filtering Options ---
    /// Include only files ending with these extensions, e.g. ".txt .md" (case-insensitive, repeatable).
    #[arg(short = 'e', long = "ext", value_name = "EXT", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Maximum directory levels below the folder to descend (0 for unlimited).
    #[arg(short = 'd', long, value_name = "DEPTH", default_value_t = 0, allow_negative_numbers = true)]
    pub max_depth: i64,

    // --- Content Processing Options ---
    /// Convert CRLF and CR line endings to LF.
    #[arg(short = 'n', long, action = clap::ArgAction::SetTrue)]
    pub normalize_line_endings: bool,

    /// Strip trailing whitespace from every line.
    #[arg(short = 't', long, action = clap::ArgAction::SetTrue)]
    pub remove_trailing_whitespace: bool,

    /// Collapse runs of blank lines and drop leading newlines.
    #[arg(short = 'l', long, action = clap::ArgAction::SetTrue)]
    pub remove_extra_empty_lines: bool,

    // --- Output Options ---
    /// Sort order: name, date_asc or date_desc.
    #[arg(short = 's', long = "sort", value_name = "MODE", default_value = "name")]
    pub sort_mode: String,

    /// Output format: markdown, json or yaml.
    #[arg(short = 'f', long = "format", value_name = "FORMAT", default_value = "markdown")]
    pub output_format: String,

    /// Write output to the specified file instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output_file: Option<String>,
}

/// Subcommands that replace the default combine run.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP service exposing the upload and folder endpoints.
    #[cfg(feature = "web")]
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on.
        #[arg(short, long, default_value_t = crate::constants::DEFAULT_PORT)]
        port: u16,

        /// Origins allowed to call the service from a browser (repeatable).
        /// Defaults to localhost and 127.0.0.1 on ports 8501 and 3000.
        #[arg(long = "allow-origin", value_name = "ORIGIN", num_args = 1..)]
        allow_origins: Option<Vec<String>>,
    },
}
