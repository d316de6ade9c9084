//! MIDI Librarian Core
//!
//! Generates the JSON index files a browser MIDI player reads to list its
//! songs and SoundFonts.
//!
//! ```no_run
//! use std::path::Path;
//! use midi_librarian_core::{build_indexes, LibraryLayout};
//!
//! let layout = LibraryLayout::default();
//! let report = build_indexes(Path::new("."), &layout)?;
//! assert!(report.is_success());
//! # Ok::<(), midi_librarian_core::CoreError>(())
//! ```

pub mod fs;
pub mod library;
pub mod settings;

mod error;
pub use error::*;

pub use library::{
    build_indexes, check_indexes, AssetCollection, BuildReport, CheckReport, CheckStatus,
    DirectoryOutcome, DirectoryStatus,
};
pub use settings::{CollectionLayout, LibraryLayout, LAYOUT_FILE};
