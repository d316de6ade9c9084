//! MIDI Librarian Error Definitions
//!
//! Defines error types used throughout the library.

use std::path::PathBuf;

use thiserror::Error;

/// Core library error types
#[derive(Error, Debug)]
pub enum CoreError {
    // =========================================================================
    // Asset Directory Errors
    // =========================================================================
    #[error("Required directory not found: {}", .0.display())]
    MissingRequiredDirectory(PathBuf),

    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreationFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scan directory {}: {message}", .path.display())]
    DirectoryScanFailed { path: PathBuf, message: String },

    // =========================================================================
    // Index Errors
    // =========================================================================
    #[error("Failed to write index {}: {message}", .path.display())]
    IndexWriteFailed { path: PathBuf, message: String },

    // =========================================================================
    // Layout Errors
    // =========================================================================
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Failed to load layout file {}: {message}", .path.display())]
    LayoutLoadFailed { path: PathBuf, message: String },

    // =========================================================================
    // General Errors
    // =========================================================================
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Core library result type
pub type CoreResult<T> = Result<T, CoreError>;
