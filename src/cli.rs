//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use cas_overlay::output::OutputConfig;

use crate::commands;

/// CAS Overlay - Manage a CAS server overlay's features, keys and resources
#[derive(Parser, Debug)]
#[command(name = "cas-overlay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Copy upstream resources into the local resource directory
    Populate(commands::populate::PopulateArgs),

    /// Remove unmodified resources and preserved upstream copies
    Clean(commands::clean::CleanArgs),

    /// Compare local resources with the upstream resources
    Diff(commands::diff::DiffArgs),

    /// Generate signing and encryption keys for CAS properties
    GenerateKeys(commands::generate_keys::GenerateKeysArgs),

    /// Show version, features, dependencies and repositories
    Info(commands::info::InfoArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Populate(args) => commands::populate::execute(args, &output),
            Commands::Clean(args) => commands::clean::execute(args, &output),
            Commands::Diff(args) => commands::diff::execute(args, &output),
            Commands::GenerateKeys(args) => commands::generate_keys::execute(args),
            Commands::Info(args) => commands::info::execute(args, &output),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Log to stderr at `level` unless `RUST_LOG` says otherwise.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level.to_lowercase());
    // A second initialisation only happens in tests; keep the first logger.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cas-overlay", "info", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.color, "auto");
    }

    #[test]
    fn test_generate_keys_subcommand_name() {
        let cli = Cli::try_parse_from(["cas-overlay", "generate-keys"]).unwrap();
        assert!(matches!(cli.command, Commands::GenerateKeys(_)));
    }
}
