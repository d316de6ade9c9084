//! Asset Index Builder
//!
//! Regenerates the JSON index file of each asset directory from a fresh scan.
//! The index is a derived view: every run replaces it completely.

use std::path::Path;

use tracing::{error, info, warn};

use crate::fs::{atomic_write_bytes, ensure_directory, to_json_indented};
use crate::settings::LibraryLayout;
use crate::{CoreError, CoreResult};

use super::models::{
    AssetCollection, BuildReport, CheckOutcome, CheckReport, CheckStatus, DirectoryOutcome,
    DirectoryStatus,
};
use super::scanner::scan_collection;

/// Render an index document: a JSON array of names with four-space indentation
pub fn render_index(names: &[String]) -> CoreResult<Vec<u8>> {
    to_json_indented(names)
}

/// Rebuild the index file of every asset directory beneath `root`
///
/// A missing MIDI directory aborts the run before anything is created or
/// written. A SoundFont directory that cannot be created only fails that
/// collection; the MIDI index is still written.
pub fn build_indexes(root: &Path, layout: &LibraryLayout) -> CoreResult<BuildReport> {
    info!(root = %root.display(), "Building asset indexes");

    for collection in AssetCollection::ALL {
        let directory = layout.resolve(root, collection);
        if collection.is_required() && !directory.is_dir() {
            error!(
                directory = %directory.display(),
                "{} directory not found", collection
            );
            return Err(CoreError::MissingRequiredDirectory(directory));
        }
    }

    let mut report = BuildReport::default();
    for collection in AssetCollection::ALL {
        report.outcomes.push(index_collection(root, layout, collection));
    }

    Ok(report)
}

fn index_collection(
    root: &Path,
    layout: &LibraryLayout,
    collection: AssetCollection,
) -> DirectoryOutcome {
    let directory = layout.resolve(root, collection);
    let index_path = layout.index_path(root, collection);

    let mut outcome = DirectoryOutcome {
        collection,
        directory: directory.clone(),
        created: false,
        status: DirectoryStatus::Failed {
            message: String::new(),
        },
    };

    if !collection.is_required() {
        match ensure_directory(&directory) {
            Ok(created) => {
                if created {
                    info!(directory = %directory.display(), "Created {} directory", collection);
                }
                outcome.created = created;
            }
            Err(e) => {
                error!(error = %e, "Skipping {} index", collection);
                outcome.status = DirectoryStatus::Failed {
                    message: e.to_string(),
                };
                return outcome;
            }
        }
    }

    info!(directory = %directory.display(), "Scanning {} files", collection);
    outcome.status = match write_collection_index(&directory, &index_path, layout, collection) {
        Ok(entries) => {
            info!(
                index = %index_path.display(),
                count = entries.len(),
                "Generated {} index", collection
            );
            DirectoryStatus::Indexed {
                index_path,
                entries,
            }
        }
        Err(e) => {
            error!(error = %e, "Failed to index {} directory", collection);
            DirectoryStatus::Failed {
                message: e.to_string(),
            }
        }
    };
    outcome
}

fn write_collection_index(
    directory: &Path,
    index_path: &Path,
    layout: &LibraryLayout,
    collection: AssetCollection,
) -> CoreResult<Vec<String>> {
    let entries = scan_collection(directory, &layout.collection(collection).extensions)?;
    let bytes = render_index(&entries)?;
    atomic_write_bytes(index_path, &bytes).map_err(|e| CoreError::IndexWriteFailed {
        path: index_path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(entries)
}

/// Compare every index file with what `build_indexes` would write now
///
/// Read-only: never creates directories or touches index files.
pub fn check_indexes(root: &Path, layout: &LibraryLayout) -> CheckReport {
    let outcomes = AssetCollection::ALL
        .into_iter()
        .map(|collection| {
            let directory = layout.resolve(root, collection);
            let index_path = layout.index_path(root, collection);
            let extensions = &layout.collection(collection).extensions;
            let status = check_collection(&directory, &index_path, extensions);
            match &status {
                CheckStatus::UpToDate => info!("{} index is up to date", collection),
                other => warn!(status = ?other, "{} index is not current", collection),
            }
            CheckOutcome {
                collection,
                directory,
                status,
            }
        })
        .collect();

    CheckReport { outcomes }
}

fn check_collection(directory: &Path, index_path: &Path, extensions: &[String]) -> CheckStatus {
    if !directory.is_dir() {
        return CheckStatus::MissingDirectory;
    }

    let expected = match scan_collection(directory, extensions) {
        Ok(names) => names,
        Err(e) => {
            return CheckStatus::Unreadable {
                message: e.to_string(),
            }
        }
    };

    if !index_path.is_file() {
        return CheckStatus::MissingIndex;
    }

    let current = match std::fs::read(index_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            return CheckStatus::Unreadable {
                message: e.to_string(),
            }
        }
    };

    let rendered = match render_index(&expected) {
        Ok(bytes) => bytes,
        Err(e) => {
            return CheckStatus::Unreadable {
                message: e.to_string(),
            }
        }
    };

    if current == rendered {
        return CheckStatus::UpToDate;
    }

    CheckStatus::Stale {
        expected,
        found: serde_json::from_slice::<Vec<String>>(&current).ok(),
    }
}
