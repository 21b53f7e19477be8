//! Read-only comparison of the reference and local trees

use std::collections::BTreeMap;
use std::path::Path;

use super::regular_files;
use crate::error::Result;
use crate::fingerprint::fingerprint;
use crate::path::{is_marker, relative_posix};

/// How a path differs between the two trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChangeKind {
    /// Present upstream, absent locally
    Missing,
    /// Present in both with different content
    Customized,
    /// Present locally only
    LocalOnly,
    /// A preserved upstream copy left over from `populate`
    StaleMarker,
}

/// A single differing path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub path: String,
    pub kind: ChangeKind,
}

/// Compare both trees without touching either. Identical files are omitted.
pub fn diff(reference_root: &Path, local_root: &Path) -> Result<Vec<Change>> {
    let mut changes = BTreeMap::new();

    for reference_file in regular_files(reference_root)? {
        let relative = relative_posix(reference_root, &reference_file)?;
        let local_file = local_root.join(&relative);
        if !local_file.is_file() {
            changes.insert(relative, ChangeKind::Missing);
        } else if fingerprint(&reference_file)? != fingerprint(&local_file)? {
            changes.insert(relative, ChangeKind::Customized);
        }
    }

    for local_file in regular_files(local_root)? {
        let relative = relative_posix(local_root, &local_file)?;
        if is_marker(&local_file) {
            changes.insert(relative, ChangeKind::StaleMarker);
        } else if !reference_root.join(&relative).is_file() {
            changes.insert(relative, ChangeKind::LocalOnly);
        }
    }

    Ok(changes
        .into_iter()
        .map(|(path, kind)| Change { path, kind })
        .collect())
}
