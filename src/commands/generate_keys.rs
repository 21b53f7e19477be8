//! Generate-keys command implementation
//!
//! Prints one `property=value` line per key, ready to paste into
//! `cas.properties`, or appends them to a properties file.

use anyhow::{Context, Result};
use clap::Args;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use cas_overlay::keys::{self, KeySpec};

/// Arguments for the generate-keys command
#[derive(Args, Debug)]
pub struct GenerateKeysArgs {
    /// Property to generate a key for, as NAME or NAME:BITS (repeatable).
    ///
    /// Defaults to the ticket-granting cookie and webflow signing and
    /// encryption keys.
    #[arg(short, long = "key", value_name = "NAME[:BITS]")]
    pub keys: Vec<String>,

    /// Append the keys to this properties file instead of printing them.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Execute the generate-keys command
pub fn execute(args: GenerateKeysArgs) -> Result<()> {
    let specs = if args.keys.is_empty() {
        keys::default_key_specs()
    } else {
        args.keys
            .iter()
            .map(|spec| KeySpec::parse(spec))
            .collect::<Result<Vec<_>, _>>()?
    };

    let generated: Vec<_> = specs.iter().map(keys::generate).collect();

    match args.output {
        Some(path) => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            for key in &generated {
                writeln!(file, "{}", key)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            println!("Wrote {} key(s) to {}", generated.len(), path.display());
        }
        None => {
            for key in &generated {
                println!("{}", key);
            }
        }
    }

    Ok(())
}
