//! Library Models
//!
//! Asset collection kinds and the reports produced by build and check runs.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The class of media asset held by an asset directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetCollection {
    /// Standard MIDI files
    Music,
    /// SoundFont instrument banks
    SoundBank,
}

impl AssetCollection {
    /// All collections, in processing order
    pub const ALL: [AssetCollection; 2] = [AssetCollection::Music, AssetCollection::SoundBank];

    /// Human-readable label used in progress messages
    pub fn label(&self) -> &'static str {
        match self {
            AssetCollection::Music => "MIDI",
            AssetCollection::SoundBank => "SoundFont",
        }
    }

    /// A required collection aborts the run when its directory is absent.
    /// Optional collections get their directory created instead.
    pub fn is_required(&self) -> bool {
        matches!(self, AssetCollection::Music)
    }
}

impl fmt::Display for AssetCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Build Report
// =============================================================================

/// Result of indexing a single asset directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum DirectoryStatus {
    /// Index written successfully
    Indexed {
        index_path: PathBuf,
        entries: Vec<String>,
    },
    /// Indexing this directory was abandoned
    Failed { message: String },
}

/// Outcome for one asset directory in a build run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryOutcome {
    pub collection: AssetCollection,
    /// Absolute path of the asset directory
    pub directory: PathBuf,
    /// Whether the directory was created during this run
    pub created: bool,
    pub status: DirectoryStatus,
}

impl DirectoryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, DirectoryStatus::Indexed { .. })
    }
}

/// Per-directory results of `build_indexes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    pub outcomes: Vec<DirectoryOutcome>,
}

impl BuildReport {
    /// True when every directory was indexed
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(DirectoryOutcome::is_success)
    }

    pub fn outcome(&self, collection: AssetCollection) -> Option<&DirectoryOutcome> {
        self.outcomes.iter().find(|o| o.collection == collection)
    }

    pub fn failures(&self) -> impl Iterator<Item = &DirectoryOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}

// =============================================================================
// Check Report
// =============================================================================

/// Freshness of an index file relative to its directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum CheckStatus {
    UpToDate,
    /// On-disk index differs from what a build would write
    Stale {
        expected: Vec<String>,
        found: Option<Vec<String>>,
    },
    MissingIndex,
    MissingDirectory,
    Unreadable { message: String },
}

/// Outcome for one asset directory in a check run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutcome {
    pub collection: AssetCollection,
    pub directory: PathBuf,
    pub status: CheckStatus,
}

/// Per-directory results of `check_indexes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    /// True when every index matches its directory
    pub fn is_current(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| o.status == CheckStatus::UpToDate)
    }

    pub fn outcome(&self, collection: AssetCollection) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.collection == collection)
    }
}
