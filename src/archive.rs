//! Resources archive location and extraction
//!
//! The CAS distribution ships its default templates, messages and static
//! assets in a `cas-server-webapp-resources-<version>.jar`. This module finds
//! that jar in a resolved dependency set and expands it into a scratch
//! directory so the reconciler can compare it with the local resource tree.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use glob::Pattern;
use log::{debug, warn};
use walkdir::WalkDir;
use zip::ZipArchive;

use crate::error::{Error, Result};

/// File name pattern of the resources jar for `artifact` at `version`.
pub fn resources_pattern(artifact: &str, version: &str) -> String {
    format!("{}-{}.jar", artifact, version)
}

/// Expand every entry of the archive at `archive_path` into `destination`.
///
/// Existing files are overwritten. Returns the number of files written.
pub fn extract(archive_path: &Path, destination: &Path) -> Result<usize> {
    let file = File::open(archive_path).map_err(|e| Error::Archive {
        path: archive_path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(|e| Error::Archive {
        path: archive_path.to_path_buf(),
        message: e.to_string(),
    })?;

    fs::create_dir_all(destination).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to create directory '{}': {}",
            destination.display(),
            e
        ),
    })?;

    let mut written = 0;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let relative = match entry.enclosed_name() {
            Some(name) => name,
            None => {
                return Err(Error::Archive {
                    path: archive_path.to_path_buf(),
                    message: format!("entry '{}' escapes the destination", entry.name()),
                })
            }
        };
        let target = destination.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::Filesystem {
                message: format!("Failed to create directory '{}': {}", target.display(), e),
            })?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
                message: format!("Failed to create directory '{}': {}", parent.display(), e),
            })?;
        }
        let mut out = File::create(&target).map_err(|e| Error::Filesystem {
            message: format!("Failed to write file '{}': {}", target.display(), e),
        })?;
        io::copy(&mut entry, &mut out).map_err(|e| Error::Archive {
            path: archive_path.to_path_buf(),
            message: format!("Failed to expand '{}': {}", entry.name(), e),
        })?;
        written += 1;
    }

    debug!(
        "Extracted {} files from {} into {}",
        written,
        archive_path.display(),
        destination.display()
    );
    Ok(written)
}

/// Replace `destination` with a fresh expansion of the archive.
pub fn refresh(archive_path: &Path, destination: &Path) -> Result<usize> {
    if destination.exists() {
        fs::remove_dir_all(destination).map_err(|e| Error::Filesystem {
            message: format!(
                "Failed to remove directory '{}': {}",
                destination.display(),
                e
            ),
        })?;
    }
    extract(archive_path, destination)
}

/// A resolved dependency set: the artifact files available on disk
#[derive(Debug, Clone, Default)]
pub struct ArtifactSet {
    artifacts: Vec<PathBuf>,
}

impl ArtifactSet {
    /// Build a set from already-resolved artifact paths.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut artifacts: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        artifacts.sort();
        Self { artifacts }
    }

    /// Collect every `.jar` under `root`. A missing root yields an empty set.
    pub fn scan(root: &Path) -> Result<Self> {
        if !root.exists() {
            debug!("Artifact root {} does not exist", root.display());
            return Ok(Self::default());
        }

        let mut artifacts = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| Error::Filesystem {
                message: format!("Failed to scan '{}': {}", root.display(), e),
            })?;
            let is_jar = entry
                .path()
                .extension()
                .map(|ext| ext == "jar")
                .unwrap_or(false);
            if entry.file_type().is_file() && is_jar {
                artifacts.push(entry.into_path());
            }
        }
        Ok(Self::from_paths(artifacts))
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Find the artifact whose file name matches the glob `pattern`.
    pub fn find(&self, pattern: &str) -> Result<PathBuf> {
        let matcher = Pattern::new(pattern)?;
        let mut matches = self.artifacts.iter().filter(|path| {
            path.file_name()
                .map(|name| matcher.matches(&name.to_string_lossy()))
                .unwrap_or(false)
        });

        let first = matches.next().ok_or_else(|| Error::ArtifactNotFound {
            pattern: pattern.to_string(),
        })?;
        for extra in matches {
            warn!(
                "Ignoring {} (also matches '{}'), using {}",
                extra.display(),
                pattern,
                first.display()
            );
        }
        Ok(first.clone())
    }
}
