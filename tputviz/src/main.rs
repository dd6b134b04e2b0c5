//! # tputviz - Main Entry Point
//!
//! Supports two operational modes:
//! - **TUI** (`tputviz results.txt`): interactive chart in the terminal
//! - **Headless** (`--headless --export chart.json`): lay out and export only
//!
//! Both modes share one pipeline: read → parse → layout → render/export.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use tputviz::chart::build_chart;
use tputviz::cli::{prompt_for_path, Args};
use tputviz::domain::{ChartError, ParseError};
use tputviz::export::ChartExporter;
use tputviz::format::parse_file;
use tputviz::tui;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;
const EXIT_DATAERR: i32 = 65;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e:#}");
            code
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    let bad_data = err
        .chain()
        .any(|cause| cause.is::<ParseError>() || cause.is::<ChartError>());
    if bad_data {
        EXIT_DATAERR
    } else if err.to_string().to_lowercase().contains("missing required argument") {
        EXIT_USAGE
    } else {
        EXIT_ERROR
    }
}

/// FILE argument, or ask for it on stderr when omitted.
fn resolve_input(args: &Args) -> Result<PathBuf> {
    if let Some(ref file) = args.file {
        return Ok(file.clone());
    }

    let stdin = io::stdin();
    prompt_for_path(stdin.lock(), io::stderr())
        .context("Failed to read result file path")?
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required argument: FILE\n\n\
                 Usage:\n  \
                 tputviz results.txt\n\n\
                 Run 'tputviz --help' for more options"
            )
        })
}

fn run() -> Result<()> {
    let args = Args::parse();
    let quiet = args.quiet;

    let input = resolve_input(&args)?;
    let result = parse_file(&input)
        .with_context(|| format!("Failed to read results from {}", input.display()))?;
    let chart = build_chart(&result)
        .with_context(|| format!("Failed to lay out {}", input.display()))?;
    info!("Laid out {} bars from {}", chart.bar_count(), input.display());

    if !quiet {
        println!("tputviz v{}", env!("CARGO_PKG_VERSION"));
        println!("input: {}", input.display());
        println!("measurements: {}", result.measurements.len());
    }

    if let Some(ref export_path) = args.export {
        let file = File::create(export_path).context("Failed to create chart output file")?;
        ChartExporter::new()
            .export(&chart, BufWriter::new(file))
            .context("Failed to export chart")?;

        if !quiet {
            println!("saved: {}", export_path.display());
        }
    }

    if !args.headless {
        tui::run(chart, args.theme.into()).context("Chart view failed")?;
    }

    Ok(())
}
