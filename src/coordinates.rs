//! Dependency coordinates and repositories for a CAS overlay
//!
//! Translates the configured version and feature list into the Maven
//! coordinates a build must depend on, and lists the repositories those
//! coordinates resolve from.

use std::fmt;

use url::Url;

use crate::config::{OverlayConfig, REPOSITORIES};
use crate::error::{Error, Result};

/// Maven group of every CAS module
pub const CAS_GROUP: &str = "org.apereo.cas";

/// Artifact id of the CAS web application
pub const WEBAPP_ARTIFACT: &str = "cas-server-webapp";

const MAVEN_CENTRAL: &str = "https://repo1.maven.org/maven2/";
const SHIBBOLETH_RELEASES: &str = "https://build.shibboleth.net/maven/releases/";
const SONATYPE_SNAPSHOTS: &str = "https://oss.sonatype.org/content/repositories/snapshots/";

/// A `group:artifact:version` triple
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl Coordinate {
    pub fn cas(artifact: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: CAS_GROUP.to_string(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// The web application followed by one module per configured feature.
pub fn webapp_dependencies(config: &OverlayConfig) -> Result<Vec<Coordinate>> {
    let version = config.require_version()?;
    let mut coordinates = vec![Coordinate::cas(WEBAPP_ARTIFACT, version)];
    coordinates.extend(
        config
            .features()
            .map(|feature| Coordinate::cas(format!("cas-server-{}", feature), version)),
    );
    Ok(coordinates)
}

/// Coordinate of the resources jar matching the configured version.
pub fn resources_coordinate(config: &OverlayConfig) -> Result<Coordinate> {
    let version = config.require_version()?;
    Ok(Coordinate::cas(config.resources().artifact.clone(), version))
}

/// Repositories the coordinates resolve from, without duplicates.
///
/// The snapshot repository is only included for pre-release versions.
pub fn repositories(config: &OverlayConfig) -> Result<Vec<Url>> {
    let version = config.require_version()?;
    let prerelease = !semver::Version::parse(version)?.pre.is_empty();

    let mut candidates = vec![MAVEN_CENTRAL, SHIBBOLETH_RELEASES];
    if prerelease {
        candidates.push(SONATYPE_SNAPSHOTS);
    }

    let mut repositories: Vec<Url> = Vec::new();
    let configured = config.list(REPOSITORIES);
    for candidate in candidates.into_iter().chain(configured) {
        let url = Url::parse(candidate).map_err(|e| Error::ConfigParse {
            message: format!("invalid repository URL '{}': {}", candidate, e),
            hint: Some("Repositories must be absolute URLs such as https://repo.example.org/maven/".to_string()),
        })?;
        if !repositories.contains(&url) {
            repositories.push(url);
        }
    }
    Ok(repositories)
}
