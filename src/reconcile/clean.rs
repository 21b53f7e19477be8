//! Strip the local tree down to genuinely customized resources

use std::fs;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use super::{emit, regular_files, Event, RemovalReason, Reporter, Summary};
use crate::archive;
use crate::error::{Error, Result};
use crate::fingerprint::fingerprint;
use crate::path::{is_marker, relative_posix};

/// Re-expand `archive_path` into `reference_root`, then [`clean_tree`].
///
/// The archive is expanded on every call so the comparison always runs
/// against the artifact currently in use.
pub fn clean<R: Reporter + ?Sized>(
    archive_path: &Path,
    reference_root: &Path,
    local_root: &Path,
    reporter: &mut R,
) -> Result<Summary> {
    archive::refresh(archive_path, reference_root)?;
    clean_tree(reference_root, local_root, reporter)
}

/// Remove marker files, unmodified files and empty directories from
/// `local_root`, deleting `local_root` itself if it ends up empty.
///
/// Files without a reference counterpart, or whose content differs from it,
/// are kept.
pub fn clean_tree<R: Reporter + ?Sized>(
    reference_root: &Path,
    local_root: &Path,
    reporter: &mut R,
) -> Result<Summary> {
    let mut summary = Summary::default();
    if !local_root.is_dir() {
        debug!("{} does not exist, nothing to clean", local_root.display());
        return Ok(summary);
    }

    let (markers, files): (Vec<_>, Vec<_>) = regular_files(local_root)?
        .into_iter()
        .partition(|path| is_marker(path));

    for marker in markers {
        let relative = relative_posix(local_root, &marker)?;
        remove_file(&marker)?;
        emit(
            reporter,
            &mut summary,
            Event::Removed {
                path: relative,
                reason: RemovalReason::Marker,
            },
        );
    }

    for local_file in files {
        let relative = relative_posix(local_root, &local_file)?;
        let reference_file = reference_root.join(&relative);

        let unmodified = reference_file.is_file()
            && fingerprint(&reference_file)? == fingerprint(&local_file)?;
        if unmodified {
            remove_file(&local_file)?;
            emit(
                reporter,
                &mut summary,
                Event::Removed {
                    path: relative,
                    reason: RemovalReason::Unmodified,
                },
            );
        } else {
            emit(reporter, &mut summary, Event::Kept { path: relative });
        }
    }

    remove_empty_directories(local_root, reporter, &mut summary)?;

    if is_empty_dir(local_root)? {
        fs::remove_dir(local_root).map_err(|e| Error::Filesystem {
            message: format!(
                "Failed to remove directory '{}': {}",
                local_root.display(),
                e
            ),
        })?;
        emit(
            reporter,
            &mut summary,
            Event::RemovedDir {
                path: ".".to_string(),
            },
        );
    }

    Ok(summary)
}

/// Remove every directory below `root` that holds no files at any depth.
///
/// Children are visited before their parents, so a parent emptied by the
/// removal of its children goes in the same pass.
fn remove_empty_directories<R: Reporter + ?Sized>(
    root: &Path,
    reporter: &mut R,
    summary: &mut Summary,
) -> Result<()> {
    let mut directories = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).contents_first(true) {
        let entry = entry.map_err(|e| Error::Filesystem {
            message: format!("Failed to walk '{}': {}", root.display(), e),
        })?;
        if entry.file_type().is_dir() {
            directories.push(entry.into_path());
        }
    }

    for directory in directories {
        if !is_empty_dir(&directory)? {
            continue;
        }
        fs::remove_dir(&directory).map_err(|e| Error::Filesystem {
            message: format!(
                "Failed to remove directory '{}': {}",
                directory.display(),
                e
            ),
        })?;
        let relative = relative_posix(root, &directory)?;
        emit(reporter, summary, Event::RemovedDir { path: relative });
    }
    Ok(())
}

fn is_empty_dir(path: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(path).map_err(|e| Error::Filesystem {
        message: format!("Failed to read directory '{}': {}", path.display(), e),
    })?;
    Ok(entries.next().is_none())
}

fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| Error::Filesystem {
        message: format!("Failed to delete file '{}': {}", path.display(), e),
    })
}
