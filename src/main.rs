// src/main.rs

use anyhow::Result;
use clap::Parser;
use filecombine::cli::{Cli, Commands};
use filecombine::config::{CombineOptionsBuilder, ScanOptions};
use filecombine::errors::Error;
use filecombine::output::writer::{write_document, OutputDestination};
use filecombine::scan::scan_directory;
use std::process::ExitCode;

#[cfg(feature = "web")]
use filecombine::web;

// Wrapper struct to handle subcommands without breaking the library's Cli struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct AppArgs {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    cli: Cli,
}

fn main() -> Result<ExitCode> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "filecombine=debug".parse()?
                } else {
                    "filecombine=info".parse()?
                },
            ),
        )
        .init();

    log::debug!("Starting filecombine v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let args = AppArgs::parse();

    // --- Handle Subcommands (Web Server) ---
    #[cfg(feature = "web")]
    if let Some(Commands::Serve {
        host,
        port,
        allow_origins,
    }) = args.command
    {
        let origins = allow_origins.unwrap_or_else(|| {
            filecombine::constants::DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect()
        });
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(web::start_server(&host, port, origins))?;
        return Ok(ExitCode::SUCCESS);
    }

    // --- Configuration & Execution ---
    match run(&args.cli) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_validation() => {
            eprintln!("Error: {}", e);
            Ok(ExitCode::from(2))
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let options = CombineOptionsBuilder::from_cli(cli).build()?;
    let scan_options = ScanOptions::new(
        cli.folder.as_str(),
        cli.max_depth,
        options.extensions.clone(),
    )?;
    log::debug!("Configuration built successfully.");

    let records = scan_directory(&scan_options)?;
    log::info!(
        "Combining {} files from '{}'",
        records.len(),
        scan_options.root.display()
    );
    let document = filecombine::combine(records, &options)?;

    let destination = OutputDestination::from_option(cli.output_file.clone());
    write_document(&document, &destination)
}
