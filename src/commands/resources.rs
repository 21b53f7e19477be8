//! Options and setup shared by the resource commands
//!
//! Resolves, in order:
//! 1. The configuration file (optional when `--archive` is given).
//! 2. The resources jar: `--archive`, or a scan of the artifact repository
//!    for `<artifact>-<version>.jar`.
//! 3. The local resource directory: `--resources`, or the configured one.
//! 4. The scratch directory the jar is expanded into: `--scratch-dir`, or a
//!    temporary directory removed when the command finishes.

use anyhow::{bail, Context, Result};
use clap::Args;
use log::debug;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use cas_overlay::archive::{self, ArtifactSet};
use cas_overlay::config::{self, OverlayConfig};
use cas_overlay::defaults;
use cas_overlay::error::Error;
use cas_overlay::suggestions;

/// Options locating the upstream resources and the local resource tree
#[derive(Args, Debug, Clone)]
pub struct ResourceArgs {
    /// Path to the .cas-overlay.yaml configuration file.
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "CAS_OVERLAY_CONFIG",
        default_value = defaults::CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Resources jar to use instead of searching the artifact repository.
    #[arg(long, value_name = "JAR")]
    pub archive: Option<PathBuf>,

    /// Directory searched for the resources jar.
    ///
    /// Defaults to the local Maven repository (`~/.m2/repository`).
    #[arg(long, value_name = "DIR", env = "CAS_OVERLAY_REPOSITORY")]
    pub repository: Option<PathBuf>,

    /// Local resource directory (overrides the configured one).
    #[arg(long, value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// Directory the jar is expanded into. Its previous content is discarded.
    ///
    /// Defaults to a temporary directory removed afterwards.
    #[arg(long, value_name = "DIR")]
    pub scratch_dir: Option<PathBuf>,
}

/// Where the reference tree is expanded
pub enum Scratch {
    Temporary(TempDir),
    Fixed(PathBuf),
}

impl Scratch {
    pub fn path(&self) -> &Path {
        match self {
            Scratch::Temporary(dir) => dir.path(),
            Scratch::Fixed(path) => path,
        }
    }
}

/// Everything a resource command needs, resolved from [`ResourceArgs`]
pub struct ResourceContext {
    pub archive: PathBuf,
    pub local_root: PathBuf,
    pub scratch: Scratch,
}

impl ResourceContext {
    pub fn resolve(args: ResourceArgs) -> Result<Self> {
        let config = load_config(&args)?;

        let archive = match args.archive {
            Some(archive) => archive,
            None => locate_archive(&config, &args)?,
        };

        let local_root = args
            .resources
            .unwrap_or_else(|| config.resources().local_dir.clone());

        let scratch = match args.scratch_dir {
            Some(dir) => Scratch::Fixed(dir),
            None => Scratch::Temporary(
                TempDir::new().context("Failed to create a scratch directory")?,
            ),
        };
        ensure_disjoint(scratch.path(), &local_root)?;

        debug!(
            "archive={} local={} scratch={}",
            archive.display(),
            local_root.display(),
            scratch.path().display()
        );
        Ok(Self {
            archive,
            local_root,
            scratch,
        })
    }

    /// Expand the archive afresh into the scratch directory.
    pub fn expand_reference(&self) -> Result<usize> {
        archive::refresh(&self.archive, self.scratch.path()).with_context(|| {
            format!(
                "Failed to expand {} into {}",
                self.archive.display(),
                self.scratch.path().display()
            )
        })
    }

    pub fn archive_name(&self) -> String {
        self.archive
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.archive.display().to_string())
    }
}

fn load_config(args: &ResourceArgs) -> Result<OverlayConfig> {
    if !args.config.exists() {
        if args.archive.is_some() {
            return Ok(OverlayConfig::default());
        }
        return Err(suggestions::config_not_found(&args.config));
    }

    let config = config::from_file(&args.config).with_context(|| {
        format!("Failed to load config from {}", args.config.display())
    })?;
    config.validate()?;
    Ok(config)
}

/// The scratch directory is wiped on every expansion, so it must share no
/// part of the tree with the local resource directory.
fn ensure_disjoint(scratch: &Path, local_root: &Path) -> Result<()> {
    let scratch_abs = resolved(scratch)?;
    let local_abs = resolved(local_root)?;
    if scratch_abs.starts_with(&local_abs) || local_abs.starts_with(&scratch_abs) {
        bail!(
            "Scratch directory '{}' overlaps the resource directory '{}'\n\
             hint: choose a --scratch-dir outside the resources, or omit it to use a temporary directory",
            scratch.display(),
            local_root.display()
        );
    }
    Ok(())
}

/// Absolute form of `path` with symlinks resolved as far as the path exists.
fn resolved(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to read the current directory")?
            .join(path)
    };

    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    loop {
        if let Ok(canonical) = existing.canonicalize() {
            let mut result = canonical;
            for component in missing.iter().rev() {
                result.push(component);
            }
            return Ok(result);
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return Ok(absolute),
        }
    }
}

fn locate_archive(config: &OverlayConfig, args: &ResourceArgs) -> Result<PathBuf> {
    let version = config
        .version()
        .ok_or_else(|| suggestions::version_missing(&args.config))?;
    let pattern = archive::resources_pattern(&config.resources().artifact, version);
    let root = args
        .repository
        .clone()
        .unwrap_or_else(defaults::default_repository_root);

    let artifacts = ArtifactSet::scan(&root)?;
    match artifacts.find(&pattern) {
        Ok(path) => Ok(path),
        Err(Error::ArtifactNotFound { .. }) => Err(suggestions::archive_not_found(&pattern, &root)),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(dir: &Path) -> ResourceArgs {
        ResourceArgs {
            config: dir.join(".cas-overlay.yaml"),
            archive: None,
            repository: Some(dir.join("repo")),
            resources: None,
            scratch_dir: None,
        }
    }

    #[test]
    fn test_missing_config_without_archive() {
        let temp = TempDir::new().unwrap();
        let result = ResourceContext::resolve(args(temp.path()));
        let message = result.err().unwrap().to_string();
        assert!(message.contains("Configuration file not found"));
    }

    #[test]
    fn test_archive_without_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let mut args = args(temp.path());
        args.archive = Some(temp.path().join("resources.jar"));

        let context = ResourceContext::resolve(args).unwrap();
        assert_eq!(context.local_root, PathBuf::from(defaults::RESOURCES_DIR));
        assert_eq!(context.archive_name(), "resources.jar");
        assert!(context.scratch.path().exists());
    }

    #[test]
    fn test_config_without_version() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".cas-overlay.yaml"), "features: [support-oidc]\n").unwrap();

        let result = ResourceContext::resolve(args(temp.path()));
        let message = result.err().unwrap().to_string();
        assert!(message.contains("No CAS version"));
    }

    #[test]
    fn test_locates_archive_in_repository() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".cas-overlay.yaml"), "version: 7.0.0\n").unwrap();
        let jar_dir = temp
            .path()
            .join("repo/org/apereo/cas/cas-server-webapp-resources/7.0.0");
        fs::create_dir_all(&jar_dir).unwrap();
        fs::write(jar_dir.join("cas-server-webapp-resources-7.0.0.jar"), "").unwrap();

        let context = ResourceContext::resolve(args(temp.path())).unwrap();
        assert_eq!(
            context.archive,
            jar_dir.join("cas-server-webapp-resources-7.0.0.jar")
        );
    }

    #[test]
    fn test_archive_not_in_repository() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".cas-overlay.yaml"), "version: 7.0.0\n").unwrap();

        let result = ResourceContext::resolve(args(temp.path()));
        let message = result.err().unwrap().to_string();
        assert!(message.contains("cas-server-webapp-resources-7.0.0.jar"));
        assert!(message.contains("--archive"));
    }

    fn overlapping(scratch: &str, resources: &str) -> String {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src/main/resources")).unwrap();
        let mut args = args(temp.path());
        args.archive = Some(temp.path().join("resources.jar"));
        args.scratch_dir = Some(temp.path().join(scratch));
        args.resources = Some(temp.path().join(resources));

        match ResourceContext::resolve(args) {
            Ok(_) => panic!("scratch '{}' accepted over '{}'", scratch, resources),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn test_scratch_dir_equal_to_resources_is_rejected() {
        let message = overlapping("src/main/resources", "src/main/resources");
        assert!(message.contains("overlaps the resource directory"));
    }

    #[test]
    fn test_scratch_dir_containing_resources_is_rejected() {
        let message = overlapping("src", "src/main/resources");
        assert!(message.contains("overlaps the resource directory"));
    }

    #[test]
    fn test_scratch_dir_inside_resources_is_rejected() {
        let message = overlapping("src/main/resources/tmp", "src/main/resources");
        assert!(message.contains("overlaps the resource directory"));
    }

    #[test]
    fn test_scratch_dir_overlap_through_dot_segments() {
        let message = overlapping("src/main/../main/resources", "src/main/resources");
        assert!(message.contains("overlaps the resource directory"));
    }

    #[test]
    fn test_sibling_scratch_dir_is_accepted() {
        let temp = TempDir::new().unwrap();
        let mut args = args(temp.path());
        args.archive = Some(temp.path().join("resources.jar"));
        args.scratch_dir = Some(temp.path().join("src/main/resources-scratch"));
        args.resources = Some(temp.path().join("src/main/resources"));

        assert!(ResourceContext::resolve(args).is_ok());
    }

    #[test]
    fn test_fixed_scratch_dir_and_resources_override() {
        let temp = TempDir::new().unwrap();
        let mut args = args(temp.path());
        args.archive = Some(temp.path().join("resources.jar"));
        args.scratch_dir = Some(temp.path().join("scratch"));
        args.resources = Some(temp.path().join("res"));

        let context = ResourceContext::resolve(args).unwrap();
        assert_eq!(context.scratch.path(), temp.path().join("scratch"));
        assert_eq!(context.local_root, temp.path().join("res"));
    }
}
