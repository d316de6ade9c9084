//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// Regenerate the MIDI and SoundFont index files of a player project
#[derive(Debug, Parser)]
#[command(name = "midi-librarian", version, about)]
pub struct Cli {
    /// Project root containing `midi-player/` (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Layout file overriding directories, index names, or extensions.
    /// A relative path is resolved against the current working directory,
    /// not ROOT (defaults to `<ROOT>/midi-librarian.json` when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only verify that the index files are current; write nothing
    #[arg(long)]
    pub check: bool,

    /// Print the report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::WARN;
        }
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
