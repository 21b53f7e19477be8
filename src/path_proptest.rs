//! Property-based tests for path manipulation functions.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{is_marker, marker_path, relative_posix, MARKER_SUFFIX};
    use proptest::prelude::*;
    use std::path::{Path, PathBuf};

    fn segments() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,12}", 1..5)
    }

    // ============================================================================
    // marker_path property tests
    // ============================================================================

    proptest! {
        /// Property: the marker file is always a sibling of the original
        #[test]
        fn marker_path_is_sibling(parts in segments()) {
            let path: PathBuf = parts.iter().collect();
            let marker = marker_path(&path);
            prop_assert_eq!(marker.parent(), path.parent());
        }

        /// Property: the marker file name is the original name plus the suffix
        #[test]
        fn marker_path_appends_suffix(parts in segments()) {
            let path: PathBuf = parts.iter().collect();
            let marker = marker_path(&path);
            let expected = format!("{}{}", parts[parts.len() - 1], MARKER_SUFFIX);
            prop_assert_eq!(
                marker.file_name().map(|n| n.to_string_lossy().into_owned()),
                Some(expected)
            );
            prop_assert!(is_marker(&marker));
        }
    }

    // ============================================================================
    // relative_posix property tests
    // ============================================================================

    proptest! {
        /// Property: joining segments under a root and relativising gives them back
        #[test]
        fn relative_posix_recovers_segments(parts in segments()) {
            let root = Path::new("/resources");
            let mut path = root.to_path_buf();
            for part in &parts {
                path.push(part);
            }
            let relative = relative_posix(root, &path).unwrap();
            prop_assert_eq!(relative, parts.join("/"));
        }

        /// Property: relative paths never start with a separator
        #[test]
        fn relative_posix_is_never_absolute(parts in segments()) {
            let root = Path::new("/resources");
            let path: PathBuf = std::iter::once("/resources".to_string())
                .chain(parts.iter().cloned())
                .collect();
            let relative = relative_posix(root, &path).unwrap();
            prop_assert!(!relative.starts_with('/'));
        }
    }
}
