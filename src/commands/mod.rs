//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `cas-overlay` command-line tool. Each subcommand is defined in its own file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `cas_overlay` library.
//!
//! The resource commands (`populate`, `clean`, `diff`) share their archive
//! and directory options through [`resources::ResourceArgs`].

pub mod clean;
pub mod completions;
pub mod diff;
pub mod generate_keys;
pub mod info;
pub mod populate;
pub mod resources;
