//! Default values for cas-overlay configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Configuration file looked up in the current directory
pub const CONFIG_FILE: &str = ".cas-overlay.yaml";

/// Local resource directory of a CAS overlay project
pub const RESOURCES_DIR: &str = "src/main/resources";

/// Artifact id of the jar carrying the default CAS web resources
pub const RESOURCES_ARTIFACT: &str = "cas-server-webapp-resources";

/// Returns the default directory scanned for resolved artifacts.
///
/// This is the local Maven repository (`~/.m2/repository`), falling back to
/// `.m2/repository` in the current directory when the home directory cannot
/// be determined.
///
/// This can be overridden by the `--repository` CLI flag or the
/// `CAS_OVERLAY_REPOSITORY` environment variable.
pub fn default_repository_root() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".m2")
        .join("repository")
}
