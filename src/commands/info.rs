//! # Info Command Implementation
//!
//! This module implements the `info` subcommand, which displays what the
//! current `.cas-overlay.yaml` translates to.
//!
//! ## Functionality
//!
//! - **Version and Features**: The configured CAS version and feature modules
//! - **Dependencies**: Maven coordinates the overlay build depends on
//! - **Repositories**: Where those coordinates are resolved from
//! - **Resources**: The local resource directory and the upstream resources jar
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use cas_overlay::config::{self, OverlayConfig, FEATURES};
use cas_overlay::coordinates::{self, Coordinate};
use cas_overlay::defaults;
use cas_overlay::output::{emoji, OutputConfig};

/// Output formats for the info command
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum InfoFormat {
    #[default]
    Text,
    Json,
}

/// Show version, features, dependencies and repositories
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the .cas-overlay.yaml configuration file.
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "CAS_OVERLAY_CONFIG",
        default_value = defaults::CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = InfoFormat::Text)]
    pub format: InfoFormat,
}

#[derive(Debug, Serialize)]
struct OverlayInfo {
    version: String,
    features: Vec<String>,
    dependencies: Vec<Coordinate>,
    resources_artifact: Coordinate,
    resources_dir: PathBuf,
    repositories: Vec<String>,
    lists: BTreeMap<String, Vec<String>>,
}

impl OverlayInfo {
    fn from_config(config: &OverlayConfig) -> cas_overlay::error::Result<Self> {
        let lists = config
            .list_names()
            .filter(|name| *name != FEATURES)
            .map(|name| {
                (
                    name.to_string(),
                    config.list(name).map(str::to_string).collect(),
                )
            })
            .collect();

        Ok(Self {
            version: config.require_version()?.to_string(),
            features: config.features().map(str::to_string).collect(),
            dependencies: coordinates::webapp_dependencies(config)?,
            resources_artifact: coordinates::resources_coordinate(config)?,
            resources_dir: config.resources().local_dir.clone(),
            repositories: coordinates::repositories(config)?
                .into_iter()
                .map(|url| url.to_string())
                .collect(),
            lists,
        })
    }
}

/// Execute the `info` command.
pub fn execute(args: InfoArgs, output: &OutputConfig) -> Result<()> {
    let config_path = &args.config;
    if !config_path.exists() {
        return Err(cas_overlay::suggestions::config_not_found(config_path));
    }

    let config = config::from_file(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    config.validate()?;
    if config.version().is_none() {
        return Err(cas_overlay::suggestions::version_missing(config_path));
    }

    let info = OverlayInfo::from_config(&config)?;

    match args.format {
        InfoFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
        InfoFormat::Text => display_info(&info, output, config_path),
    }
    Ok(())
}

fn display_info(info: &OverlayInfo, output: &OutputConfig, config_path: &std::path::Path) {
    println!(
        "{} Configuration: {}",
        emoji(output, "📋", "[CONFIG]"),
        config_path.display()
    );
    println!("\nCAS version: {}", info.version);

    println!("\nFeatures: {}", info.features.len());
    for feature in &info.features {
        println!("  {}", feature);
    }

    println!("\nDependencies:");
    for dependency in &info.dependencies {
        println!("  {}", dependency);
    }

    println!("\nRepositories:");
    for repository in &info.repositories {
        println!("  {}", repository);
    }

    println!("\nResources:");
    println!("  directory: {}", info.resources_dir.display());
    println!("  upstream:  {}", info.resources_artifact);

    for (name, values) in &info.lists {
        if name == config::REPOSITORIES {
            continue;
        }
        println!("\n{}: {}", name, values.join(", "));
    }
}
