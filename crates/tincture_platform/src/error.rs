//! Preference store error types

use thiserror::Error;

/// Errors from a [`PreferenceStore`](crate::PreferenceStore) implementation
#[derive(Error, Debug)]
pub enum StoreError {
    /// Store cannot be reached at all (no config directory, no backend)
    #[error("preference store unavailable: {0}")]
    Unavailable(String),

    /// Reading the stored preference failed
    #[error("failed to read preference: {0}")]
    Read(String),

    /// Writing the preference failed
    #[error("failed to write preference: {0}")]
    Write(String),

    /// Stored data exists but does not parse
    #[error("malformed preference data: {0}")]
    Malformed(String),
}

/// Result type for preference store operations
pub type Result<T> = std::result::Result<T, StoreError>;
