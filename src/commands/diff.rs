//! # Diff Command Implementation
//!
//! This module implements the `diff` subcommand, which shows how the local
//! resource directory differs from the upstream CAS resources.
//!
//! ## Change Categories
//!
//! - `+` upstream files not present locally (`populate` would copy them)
//! - `~` local files customized relative to upstream
//! - `?` local files with no upstream counterpart
//! - `-` leftover `.casorig` copies (`clean` would remove them)
//!
//! This command is a safe, read-only operation that does not modify the
//! local resource directory.

use anyhow::{Context, Result};
use clap::Args;

use cas_overlay::output::{change_line, OutputConfig};
use cas_overlay::reconcile::{self, Change, ChangeKind};

use super::resources::{ResourceArgs, ResourceContext};

/// Show differences between local resources and upstream resources
#[derive(Args, Debug)]
pub struct DiffArgs {
    #[command(flatten)]
    pub resources: ResourceArgs,

    /// Show only a summary without listing individual files.
    #[arg(long)]
    pub summary: bool,
}

const SECTIONS: [(ChangeKind, &str, &str); 4] = [
    (ChangeKind::Missing, "Missing locally:", "missing"),
    (ChangeKind::Customized, "Customized:", "customized"),
    (ChangeKind::LocalOnly, "Local only:", "local only"),
    (ChangeKind::StaleMarker, "Upstream copies (*.casorig):", "upstream copies"),
];

/// Execute the `diff` command.
pub fn execute(args: DiffArgs, output: &OutputConfig) -> Result<()> {
    let context = ResourceContext::resolve(args.resources)?;
    context.expand_reference()?;

    let changes = reconcile::diff(context.scratch.path(), &context.local_root)
        .with_context(|| format!("Failed to compare {}", context.local_root.display()))?;

    if changes.is_empty() {
        println!("No differences detected.");
        return Ok(());
    }

    let count = |kind: ChangeKind| changes.iter().filter(|c| c.kind == kind).count();

    if args.summary {
        println!("Differences detected:");
        for (kind, _, label) in SECTIONS {
            let n = count(kind);
            if n > 0 {
                println!("  {} file(s) {}", n, label);
            }
        }
        println!();
        println!("Total: {} difference(s)", changes.len());
        return Ok(());
    }

    for (kind, heading, _) in SECTIONS {
        let section: Vec<&Change> = changes.iter().filter(|c| c.kind == kind).collect();
        if section.is_empty() {
            continue;
        }
        println!("{}", heading);
        for change in section {
            println!("{}", change_line(output, change.kind, &change.path));
        }
        println!();
    }

    println!(
        "Summary: {} missing, {} customized, {} local only, {} upstream copies",
        count(ChangeKind::Missing),
        count(ChangeKind::Customized),
        count(ChangeKind::LocalOnly),
        count(ChangeKind::StaleMarker)
    );

    Ok(())
}
