//! Populate command implementation
//!
//! Expands the CAS resources jar and copies its files into the local
//! resource directory. Files the project has customized are never
//! overwritten; the upstream version is saved next to them with a
//! `.casorig` suffix instead.

use anyhow::{Context, Result};
use clap::Args;

use cas_overlay::output::{emoji, OutputConfig};
use cas_overlay::reconcile::{self, LogReporter};

use super::resources::{ResourceArgs, ResourceContext};

/// Arguments for the populate command
#[derive(Args, Debug)]
pub struct PopulateArgs {
    #[command(flatten)]
    pub resources: ResourceArgs,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the populate command
pub fn execute(args: PopulateArgs, output: &OutputConfig) -> Result<()> {
    let context = ResourceContext::resolve(args.resources)?;

    if !args.quiet {
        println!(
            "{} Populating {} from {}",
            emoji(output, "📦", "[POPULATE]"),
            context.local_root.display(),
            context.archive_name()
        );
    }

    context.expand_reference()?;
    let summary = reconcile::populate(context.scratch.path(), &context.local_root, &mut LogReporter)
        .with_context(|| format!("Failed to populate {}", context.local_root.display()))?;

    if !args.quiet {
        println!(
            "{} {} copied, {} customized (upstream copy saved as *.casorig), {} unchanged",
            emoji(output, "✅", "[OK]"),
            summary.copied,
            summary.preserved,
            summary.in_sync
        );
    }

    Ok(())
}
