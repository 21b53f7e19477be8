//! # CAS Overlay Library
//!
//! This library provides the core functionality for maintaining an Apereo
//! CAS server overlay: a project that builds the CAS web application from a
//! chosen version plus a set of optional feature modules, and that keeps a
//! local copy of only those web resources it actually customizes.
//!
//! It is used by the `cas-overlay` command-line tool but has no dependency on
//! the CLI.
//!
//! ## Quick Example
//!
//! ```
//! use cas_overlay::config::OverlayConfig;
//! use cas_overlay::coordinates;
//!
//! let mut config = OverlayConfig::new().with_version("7.0.0");
//! config.append("features", ["support-oidc", "support-ldap"]);
//!
//! let deps = coordinates::webapp_dependencies(&config).unwrap();
//! assert_eq!(deps[0].to_string(), "org.apereo.cas:cas-server-webapp:7.0.0");
//! assert_eq!(deps.len(), 3);
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: Version, resource settings and named
//!   lists read from `.cas-overlay.yaml`.
//! - **Coordinates (`coordinates`)**: Maven coordinates and repositories
//!   derived from the configuration.
//! - **Archive (`archive`)**: Locating the resources jar in a dependency set
//!   and expanding it into a scratch directory.
//! - **Reconciliation (`reconcile`)**: Comparing the expanded reference tree
//!   with the local resource tree by content fingerprint and copying or
//!   deleting files accordingly.
//! - **Keys (`keys`)**: Random key material for CAS crypto properties.

pub mod archive;
pub mod config;
pub mod coordinates;
pub mod defaults;
pub mod error;
pub mod fingerprint;
pub mod keys;
pub mod output;
pub mod path;
pub mod reconcile;
pub mod suggestions;

#[cfg(test)]
mod path_proptest;
