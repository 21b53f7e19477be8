//! Copy reference resources into the local tree, preserving local edits

use std::fs;
use std::path::Path;

use super::{emit, regular_files, Event, Reporter, Summary};
use crate::error::{Error, Result};
use crate::fingerprint::fingerprint;
use crate::path::{marker_path, relative_posix};

/// Bring every reference file into `local_root`.
///
/// - Missing locally: copied as is.
/// - Identical locally: left alone.
/// - Different locally: the local file is untouched and the reference copy
///   is written beside it as `<name>.casorig`, replacing any earlier marker.
///
/// A missing `reference_root` means there is nothing to copy.
pub fn populate<R: Reporter + ?Sized>(
    reference_root: &Path,
    local_root: &Path,
    reporter: &mut R,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for reference_file in regular_files(reference_root)? {
        let relative = relative_posix(reference_root, &reference_file)?;
        let local_file = local_root.join(&relative);
        let reference_fingerprint = fingerprint(&reference_file)?;

        if !local_file.exists() {
            copy_file(&reference_file, &local_file)?;
            emit(
                reporter,
                &mut summary,
                Event::Copied {
                    path: relative,
                    fingerprint: reference_fingerprint,
                },
            );
            continue;
        }

        if fingerprint(&local_file)? == reference_fingerprint {
            emit(
                reporter,
                &mut summary,
                Event::InSync {
                    path: relative,
                    fingerprint: reference_fingerprint,
                },
            );
            continue;
        }

        let marker = marker_path(&local_file);
        copy_file(&reference_file, &marker)?;
        let marker = relative_posix(local_root, &marker)?;
        emit(
            reporter,
            &mut summary,
            Event::Preserved {
                path: relative,
                marker,
                fingerprint: reference_fingerprint,
            },
        );
    }

    Ok(summary)
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
            message: format!("Failed to create directory '{}': {}", parent.display(), e),
        })?;
    }
    fs::copy(from, to).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to copy '{}' to '{}': {}",
            from.display(),
            to.display(),
            e
        ),
    })?;
    Ok(())
}
