//! # Error Handling
//!
//! This module defines the centralized error type for the `cas-overlay`
//! library. It uses `thiserror` to build a single `Error` enum covering every
//! failure mode of the library, with messages that name the file or pattern
//! involved.
//!
//! ## Key Components
//!
//! - **`Error`**: Every failure the library can report. Variants carry the
//!   path, pattern or spec that triggered them.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! No operation retries. Any error aborts the running operation and leaves
//! the resource tree in whatever state it reached.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cas-overlay operations
#[derive(Error, Debug)]
pub enum Error {
    /// The `.cas-overlay.yaml` configuration could not be parsed or validated.
    ///
    /// Carries an optional hint about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An operation needed the CAS version but the configuration has none.
    #[error("No CAS version configured")]
    MissingVersion,

    /// The resources archive could not be read or expanded.
    #[error("Archive error for {}: {message}", path.display())]
    Archive { path: PathBuf, message: String },

    /// No artifact in the dependency set matched the requested pattern.
    #[error("No artifact matching '{pattern}' found")]
    ArtifactNotFound { pattern: String },

    /// A file could not be read while computing its fingerprint.
    #[error("Failed to fingerprint {}: {source}", path.display())]
    Fingerprint {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A copy, delete or directory creation failed.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// A path was not where it was expected to be.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// A key specification could not be understood.
    #[error("Invalid key specification '{spec}': {message}")]
    KeySpec { spec: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A semantic versioning parsing error, wrapped from `semver::Error`.
    #[error("Semver parsing error: {0}")]
    Semver(#[from] semver::Error),

    /// A zip archive error, wrapped from `zip::result::ZipError`.
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
