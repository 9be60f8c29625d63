//! Error types for identity parsing and master operations.

use thiserror::Error;

/// Errors raised while parsing identity types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdParseError {
    /// The string does not match the expected `Scheme~value[~version]` form.
    #[error("Invalid identifier format: {0}")]
    InvalidFormat(String),

    /// A required component was empty.
    #[error("Identifier {0} must not be empty")]
    EmptyField(&'static str),

    /// An instant in a version-correction string failed to parse.
    #[error("Invalid instant: {0}")]
    InvalidInstant(String),
}

/// Errors raised by bean master operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MasterError {
    /// No document matches the requested identity.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// An update targeted a version that is not the latest.
    #[error("Not the latest version: {0}")]
    NotLatestVersion(String),

    /// The identified version does not exist or conflicts with the store.
    #[error("Version conflict: {0}")]
    VersionConflict(String),

    /// The supplied document or request failed validation.
    #[error("Validation failed: {0}")]
    Validation(String),
}
