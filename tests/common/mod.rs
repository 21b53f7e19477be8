//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new()
//!         .with_config(configs::MINIMAL)
//!         .with_jar("resources.jar", &[("a.txt", "X")]);
//!     fixture.command().arg("populate").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    #[allow(unused_imports)]
    pub use super::write_jar;
    pub use super::TestFixture;
}

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Version only.
    pub const MINIMAL: &str = "version: 7.0.0\n";

    /// Version, features and an extra repository.
    pub const WITH_FEATURES: &str = r#"
version: 7.0.0
features:
  - support-oidc
  - support-json-service-registry
repositories:
  - https://repo.example.org/maven/
"#;

    /// Features but no version.
    pub const NO_VERSION: &str = "features: [support-oidc]\n";

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "version: [unclosed";
}

/// Write a jar (zip) at `path` holding `entries` as (name, content) pairs.
pub fn write_jar(path: &Path, entries: &[(&str, &str)]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create jar directory");
    }
    let mut writer = ZipWriter::new(File::create(path).expect("Failed to create jar"));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("Failed to start jar entry");
        writer
            .write_all(content.as_bytes())
            .expect("Failed to write jar entry");
    }
    writer.finish().expect("Failed to finish jar");
}

/// A temporary project directory with optional config, jar and resources.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.cas-overlay.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".cas-overlay.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add a local resource under `src/main/resources`.
    pub fn with_resource(self, path: &str, content: &str) -> Self {
        self.with_file(&format!("src/main/resources/{}", path), content)
    }

    /// Add a jar at `path` (relative to the fixture).
    pub fn with_jar(self, path: &str, entries: &[(&str, &str)]) -> Self {
        write_jar(&self.temp_dir.path().join(path), entries);
        self
    }

    /// Add the CAS 7.0.0 resources jar to the fixture's `repo` directory.
    pub fn with_repository_jar(self, entries: &[(&str, &str)]) -> Self {
        self.with_jar(
            "repo/org/apereo/cas/cas-server-webapp-resources/7.0.0/cas-server-webapp-resources-7.0.0.jar",
            entries,
        )
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a local resource.
    pub fn resource(&self, path: &str) -> PathBuf {
        self.path().join("src/main/resources").join(path)
    }

    /// Read a local resource as a string.
    pub fn read_resource(&self, path: &str) -> String {
        std::fs::read_to_string(self.resource(path)).expect("Failed to read resource")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command running in this fixture with colors disabled and
    /// the fixture's `repo` directory as artifact repository.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cas-overlay");
        cmd.current_dir(self.path())
            .env_remove("CAS_OVERLAY_CONFIG")
            .env("CAS_OVERLAY_REPOSITORY", self.path().join("repo"))
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
