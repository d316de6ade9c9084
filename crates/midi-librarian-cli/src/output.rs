//! Report output

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use midi_librarian_core::{BuildReport, CheckReport, CheckStatus, DirectoryStatus};

pub fn print_build(report: &BuildReport, json: bool) -> Result<()> {
    if json {
        return print_json(report);
    }

    let mut out = std::io::stdout().lock();
    for outcome in &report.outcomes {
        match &outcome.status {
            DirectoryStatus::Indexed {
                index_path,
                entries,
            } => writeln!(
                out,
                "{}: {} file(s) -> {}",
                outcome.collection,
                entries.len(),
                index_path.display()
            )?,
            DirectoryStatus::Failed { message } => {
                writeln!(out, "{}: FAILED ({message})", outcome.collection)?
            }
        }
    }
    Ok(())
}

pub fn print_check(report: &CheckReport, json: bool) -> Result<()> {
    if json {
        return print_json(report);
    }

    let mut out = std::io::stdout().lock();
    for outcome in &report.outcomes {
        let state = match &outcome.status {
            CheckStatus::UpToDate => "up to date".to_string(),
            CheckStatus::Stale { expected, found } => match found {
                Some(found) => format!(
                    "stale ({} listed, {} on disk)",
                    found.len(),
                    expected.len()
                ),
                None => format!("stale (unparseable, {} on disk)", expected.len()),
            },
            CheckStatus::MissingIndex => "index missing".to_string(),
            CheckStatus::MissingDirectory => "directory missing".to_string(),
            CheckStatus::Unreadable { message } => format!("unreadable ({message})"),
        };
        writeln!(out, "{}: {state}", outcome.collection)?;
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
