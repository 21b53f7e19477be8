//! Clean command implementation
//!
//! Re-expands the CAS resources jar, then strips the local resource
//! directory down to the files that genuinely differ from upstream:
//! `.casorig` copies go, unmodified files go, empty directories go.

use anyhow::{Context, Result};
use clap::Args;

use cas_overlay::output::{emoji, OutputConfig};
use cas_overlay::reconcile::{self, LogReporter};

use super::resources::{ResourceArgs, ResourceContext};

/// Arguments for the clean command
#[derive(Args, Debug)]
pub struct CleanArgs {
    #[command(flatten)]
    pub resources: ResourceArgs,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the clean command
pub fn execute(args: CleanArgs, output: &OutputConfig) -> Result<()> {
    let context = ResourceContext::resolve(args.resources)?;

    if !args.quiet {
        println!(
            "{} Cleaning {} against {}",
            emoji(output, "🧹", "[CLEAN]"),
            context.local_root.display(),
            context.archive_name()
        );
    }

    let summary = reconcile::clean(
        &context.archive,
        context.scratch.path(),
        &context.local_root,
        &mut LogReporter,
    )
    .with_context(|| format!("Failed to clean {}", context.local_root.display()))?;

    if !args.quiet {
        println!(
            "{} {} files removed, {} directories removed, {} customized files kept",
            emoji(output, "✅", "[OK]"),
            summary.removed_files,
            summary.removed_dirs,
            summary.kept
        );
    }

    Ok(())
}
