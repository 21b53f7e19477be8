//! # Error Suggestions
//!
//! Helper functions for errors that tell the user what went wrong AND how
//! to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cas_overlay::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("Configuration file not found: {}", path.display());
//!
//! // Use:
//! return Err(suggestions::config_not_found(path));
//! ```

use std::path::Path;

/// Generate an error for when the configuration file is not found.
///
/// Includes hints about:
/// - Creating a new config file
/// - Using the -c/--config flag
/// - Using the CAS_OVERLAY_CONFIG environment variable
/// - Bypassing the config with --archive
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Configuration file not found: {path}\n\n\
         hint: Create a .cas-overlay.yaml file with at least 'version: <cas version>'\n\
         hint: Use -c/--config to specify a different path\n\
         hint: Set CAS_OVERLAY_CONFIG environment variable\n\
         hint: Pass --archive to use a resources jar directly",
        path = path.display()
    )
}

/// Generate an error for when the resources jar is not in the scanned directory.
pub fn archive_not_found(pattern: &str, root: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Resources archive '{pattern}' not found under {root}\n\n\
         hint: Resolve the dependency first (e.g. run the overlay build once)\n\
         hint: Use --repository to scan a different directory\n\
         hint: Use --archive to point at the jar directly",
        root = root.display()
    )
}

/// Generate an error for a configuration without a version.
pub fn version_missing(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "No CAS version set in {path}\n\n\
         hint: Add a line such as 'version: 7.0.0'",
        path = path.display()
    )
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
pub fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, a_char) in a_chars.iter().enumerate() {
        let mut current = vec![i + 1; b_chars.len() + 1];
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        previous = current;
    }

    previous[b_chars.len()]
}
