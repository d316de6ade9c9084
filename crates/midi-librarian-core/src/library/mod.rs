//! Asset Library Module
//!
//! Scans the MIDI and SoundFont directories and keeps their JSON index
//! files in step with what is on disk.

pub mod indexer;
pub mod models;
pub mod scanner;

pub use indexer::{build_indexes, check_indexes, render_index};
pub use models::*;
pub use scanner::{matches_extension, scan_collection};
