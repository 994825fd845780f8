//! Version bump tool for block plugins.
//!
//! Rewrites the plugin version in `package.json`, `composer.json`, the main
//! plugin file (header and version constant), the block metadata and the
//! readme's stable tag. Each file is rewritten atomically; files that are
//! missing or do not contain a version string are reported and skipped.
//!
//! # Example
//!
//! ```
//! use update_version::{PluginIdentity, PluginVersion, plugin_targets};
//!
//! let identity = PluginIdentity::new("notice", Some("acme")).expect("valid identity");
//! let version: PluginVersion = "1.4.0".parse().expect("valid version");
//! let targets = plugin_targets(&identity, &version).expect("targets compile");
//!
//! assert_eq!(targets.len(), 6);
//! assert_eq!(identity.constant_prefix(), "ACME");
//! ```

mod atomic_io;
pub mod cli;
mod config;
mod error;
mod identity;
mod report;
mod targets;
mod update;
mod version;

pub use config::UpdateVersionSettings;
pub use error::{TargetError, UpdateError};
pub use identity::PluginIdentity;
pub use report::{FileOutcome, TargetReport, UpdateReport, start_message, summary_message};
pub use targets::{VersionTarget, plugin_targets};
pub use update::{UpdatePlan, WriteMode, apply_targets, run_update};
pub use version::PluginVersion;
