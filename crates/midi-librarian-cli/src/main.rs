//! MIDI Librarian CLI
//!
//! Regenerates `file_list.json` and `soundfont_list.json` for a MIDI player
//! project, or checks that they are current.

mod cli;
mod logging;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use midi_librarian_core::{build_indexes, check_indexes, LibraryLayout};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when the run completed but some directory failed or is stale.
fn run(cli: &Cli) -> Result<bool> {
    let root = cli.root();
    tracing::info!(root = %root.display(), "Project root");

    let layout = match &cli.config {
        Some(path) => LibraryLayout::load(path)
            .with_context(|| format!("Could not use layout file {}", path.display()))?,
        None => LibraryLayout::load_or_default(&root)?,
    };

    if cli.check {
        let report = check_indexes(&root, &layout);
        output::print_check(&report, cli.json)?;
        return Ok(report.is_current());
    }

    let report = build_indexes(&root, &layout).context("Indexing aborted")?;
    output::print_build(&report, cli.json)?;

    let failed: Vec<_> = report.failures().map(|o| o.collection.label()).collect();
    if !failed.is_empty() {
        tracing::warn!(collections = ?failed, "Some asset directories were not indexed");
        return Ok(false);
    }
    Ok(true)
}
