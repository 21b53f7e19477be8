//! # Resource Reconciliation
//!
//! Keeps a project's local resource tree in step with the reference tree
//! expanded from the upstream resources archive, without clobbering local
//! customizations.
//!
//! ## Operations
//!
//! - **`populate`**: Copies reference files that are missing locally. When a
//!   local file differs from its reference counterpart, the reference copy is
//!   written next to it with the [`MARKER_SUFFIX`](crate::path::MARKER_SUFFIX)
//!   appended to its name.
//! - **`clean`**: Re-expands the archive, deletes every marker file, deletes
//!   local files identical to their reference counterpart, then removes
//!   directories left empty (and the local root itself if nothing remains).
//! - **`diff`**: Read-only comparison of both trees.
//!
//! Files are compared by [`fingerprint`](crate::fingerprint::fingerprint),
//! never by timestamp. Every step runs sequentially and the first error
//! aborts the operation, leaving the tree as it was at that point.
//!
//! Progress is delivered to a [`Reporter`] one [`Event`] per file.

mod clean;
mod diff;
mod populate;

pub use clean::{clean, clean_tree};
pub use diff::{diff, Change, ChangeKind};
pub use populate::populate;

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::fingerprint::Fingerprint;

/// Why `clean` removed a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    /// The file was a preserved upstream copy
    Marker,
    /// The file was identical to its reference counterpart
    Unmodified,
}

/// Progress of a reconciliation, one per file or directory touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A reference file was copied to a path that did not exist locally
    Copied {
        path: String,
        fingerprint: Fingerprint,
    },
    /// The local file is customized; the reference copy was written to `marker`
    Preserved {
        path: String,
        marker: String,
        fingerprint: Fingerprint,
    },
    /// Local and reference files are identical
    InSync {
        path: String,
        fingerprint: Fingerprint,
    },
    /// A local file was deleted
    Removed { path: String, reason: RemovalReason },
    /// A local file was left in place by `clean`
    Kept { path: String },
    /// An empty directory was deleted; `.` is the local root
    RemovedDir { path: String },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Copied { path, fingerprint } => write!(f, "copied {} [{}]", path, fingerprint),
            Event::Preserved {
                path,
                marker,
                fingerprint,
            } => write!(
                f,
                "customized {}, upstream copy saved as {} [{}]",
                path, marker, fingerprint
            ),
            Event::InSync { path, fingerprint } => {
                write!(f, "unchanged {} [{}]", path, fingerprint)
            }
            Event::Removed {
                path,
                reason: RemovalReason::Marker,
            } => write!(f, "removed marker {}", path),
            Event::Removed {
                path,
                reason: RemovalReason::Unmodified,
            } => write!(f, "removed unmodified {}", path),
            Event::Kept { path } => write!(f, "kept {}", path),
            Event::RemovedDir { path } => write!(f, "removed empty directory {}", path),
        }
    }
}

/// Receives reconciliation progress
pub trait Reporter {
    fn report(&mut self, event: &Event);
}

impl<F: FnMut(&Event)> Reporter for F {
    fn report(&mut self, event: &Event) {
        self(event)
    }
}

/// Forwards events to the `log` facade.
///
/// Mutations are logged at `info`, no-ops at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, event: &Event) {
        match event {
            Event::InSync { .. } | Event::Kept { .. } => debug!("{}", event),
            _ => info!("{}", event),
        }
    }
}

/// Counts of what a reconciliation did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub copied: usize,
    pub preserved: usize,
    pub in_sync: usize,
    pub removed_files: usize,
    pub removed_dirs: usize,
    pub kept: usize,
}

impl Summary {
    fn record(&mut self, event: &Event) {
        match event {
            Event::Copied { .. } => self.copied += 1,
            Event::Preserved { .. } => self.preserved += 1,
            Event::InSync { .. } => self.in_sync += 1,
            Event::Removed { .. } => self.removed_files += 1,
            Event::Kept { .. } => self.kept += 1,
            Event::RemovedDir { .. } => self.removed_dirs += 1,
        }
    }
}

/// Record `event` in the summary and hand it to the reporter.
fn emit<R: Reporter + ?Sized>(reporter: &mut R, summary: &mut Summary, event: Event) {
    summary.record(&event);
    reporter.report(&event);
}

/// Every regular file under `root`, sorted. A missing root has none.
fn regular_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Filesystem {
            message: format!("Failed to walk '{}': {}", root.display(), e),
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
