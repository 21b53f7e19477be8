//! # Overlay Configuration
//!
//! This module defines the data structure behind the `.cas-overlay.yaml`
//! file: the CAS version to build against, where the local resources live,
//! and any number of named lists (feature modules, extra repositories, ...).
//!
//! ## File Format
//!
//! ```yaml
//! version: 7.0.0
//! resources:
//!   local_dir: src/main/resources
//! features:
//!   - support-json-service-registry
//!   - support-oidc
//! repositories:
//!   - https://repo.example.org/maven/
//! ```
//!
//! Every top-level key other than `version` and `resources` is a named list.
//! Values are accumulated into sets, so listing a feature twice has no
//! effect. Lists can also be grown programmatically with
//! [`OverlayConfig::append`].

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{Error, Result};

/// Name of the list holding CAS feature modules
pub const FEATURES: &str = "features";
/// Name of the list holding extra Maven repositories
pub const REPOSITORIES: &str = "repositories";

const WELL_KNOWN_LISTS: [&str; 2] = [FEATURES, REPOSITORIES];

/// Where local resources live and which artifact provides the defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceSettings {
    /// Local resource directory, relative to the project root
    pub local_dir: PathBuf,
    /// Artifact id of the upstream resources jar
    pub artifact: String,
}

impl Default for ResourceSettings {
    fn default() -> Self {
        Self {
            local_dir: PathBuf::from(defaults::RESOURCES_DIR),
            artifact: defaults::RESOURCES_ARTIFACT.to_string(),
        }
    }
}

/// Version, resource settings and named lists of an overlay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(default)]
    resources: ResourceSettings,
    #[serde(flatten)]
    lists: BTreeMap<String, BTreeSet<String>>,
}

impl OverlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style version setter
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.set_version(version);
        self
    }

    /// Builder-style feature setter, appends to the `features` list
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.append(FEATURES, features);
        self
    }

    /// Builder-style resource settings setter
    pub fn with_resources(mut self, resources: ResourceSettings) -> Self {
        self.resources = resources;
        self
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The version, or [`Error::MissingVersion`] when none is set.
    pub fn require_version(&self) -> Result<&str> {
        self.version().ok_or(Error::MissingVersion)
    }

    pub fn resources(&self) -> &ResourceSettings {
        &self.resources
    }

    /// Append `values` to the list called `name`, creating it on first use.
    pub fn append<I, S>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lists
            .entry(name.to_string())
            .or_default()
            .extend(values.into_iter().map(Into::into));
    }

    /// Values of the list called `name`, sorted. Empty if it does not exist.
    pub fn list(&self, name: &str) -> impl Iterator<Item = &str> {
        self.lists
            .get(name)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.list(FEATURES)
    }

    /// Names of every defined list
    pub fn list_names(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    /// Check the version and feature names.
    ///
    /// List names that look like a typo of a well-known list are logged as
    /// warnings.
    pub fn validate(&self) -> Result<()> {
        if let Some(version) = &self.version {
            semver::Version::parse(version).map_err(|e| Error::ConfigParse {
                message: format!("invalid version '{}': {}", version, e),
                hint: Some("Use a full release identifier such as '7.0.0' or '7.1.0-RC2'".to_string()),
            })?;
        }

        for feature in self.features() {
            if !feature_name_regex().is_match(feature) {
                return Err(Error::ConfigParse {
                    message: format!("invalid feature name '{}'", feature),
                    hint: Some(
                        "Feature names are artifact suffixes such as 'support-oidc'".to_string(),
                    ),
                });
            }
        }

        for name in self.list_names() {
            if WELL_KNOWN_LISTS.contains(&name) {
                continue;
            }
            if let Some(similar) = crate::suggestions::find_similar(name, &WELL_KNOWN_LISTS) {
                warn!("Unknown list '{}', did you mean '{}'?", name, similar);
            }
        }

        Ok(())
    }
}

fn feature_name_regex() -> &'static Regex {
    static FEATURE_NAME: OnceLock<Regex> = OnceLock::new();
    FEATURE_NAME.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9.-]*$").expect("valid regex"))
}

/// Parse a YAML document into an [`OverlayConfig`].
pub fn parse(yaml_content: &str) -> Result<OverlayConfig> {
    if yaml_content.trim().is_empty() {
        return Ok(OverlayConfig::default());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(yaml_content)?;
    if value.is_null() {
        return Ok(OverlayConfig::default());
    }
    if let serde_yaml::Value::Mapping(map) = &value {
        for (key, entry) in map {
            let key = key.as_str().unwrap_or_default();
            if key == "version" || key == "resources" {
                continue;
            }
            let is_string_list = entry
                .as_sequence()
                .map(|items| items.iter().all(|item| item.is_string()))
                .unwrap_or(false);
            if !is_string_list {
                return Err(Error::ConfigParse {
                    message: format!("'{}' must be a list of strings", key),
                    hint: Some(format!("Write '{}: [a, b]'", key)),
                });
            }
        }
    } else {
        return Err(Error::ConfigParse {
            message: "the configuration must be a mapping".to_string(),
            hint: Some("Start the file with 'version: <cas version>'".to_string()),
        });
    }

    Ok(serde_yaml::from_value(value)?)
}

/// Read and parse the configuration file at `path`.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<OverlayConfig> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}
