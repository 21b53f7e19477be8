//! Path manipulation utilities for resource trees

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Suffix appended to the pristine upstream copy of a customized resource.
pub const MARKER_SUFFIX: &str = ".casorig";

/// Render `path` relative to `root` with `/` separators.
///
/// Fails if `path` does not live under `root`.
pub fn relative_posix(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| Error::Path {
        message: format!(
            "'{}' is not inside '{}'",
            path.display(),
            root.display()
        ),
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            other => {
                return Err(Error::Path {
                    message: format!(
                        "unexpected component {:?} in '{}'",
                        other,
                        relative.display()
                    ),
                })
            }
        }
    }

    Ok(parts.join("/"))
}

/// Sibling of `path` whose file name carries [`MARKER_SUFFIX`].
pub fn marker_path(path: &Path) -> PathBuf {
    let mut name: OsString = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(MARKER_SUFFIX);
    path.with_file_name(name)
}

/// Whether the file name of `path` ends with [`MARKER_SUFFIX`].
pub fn is_marker(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().ends_with(MARKER_SUFFIX))
        .unwrap_or(false)
}
