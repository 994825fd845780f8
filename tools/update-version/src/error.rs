//! Error types for the version bump tool.
//!
//! [`UpdateError`] aborts a run before or after the targets are processed.
//! [`TargetError`] describes a single file that could not be rewritten; the
//! run carries on with the remaining targets and reports it at the end.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that stop a version bump.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    /// The requested version is not a semantic version.
    #[error("invalid version '{value}': use semantic versioning (e.g. 1.2.0)")]
    InvalidVersion {
        /// The rejected version string.
        value: String,
    },

    /// The plugin root path is not valid UTF-8.
    #[error("plugin root '{path}' is not valid UTF-8")]
    NonUtf8Root {
        /// Lossy rendering of the root path.
        path: String,
    },

    /// The plugin root directory could not be opened.
    #[error("failed to open plugin root '{path}': {message}")]
    OpenRoot {
        /// Path to the plugin root.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// No slug was configured and the root directory has no usable name.
    #[error("cannot derive a plugin slug from '{root}'; supply --slug")]
    UnresolvedSlug {
        /// Path to the plugin root.
        root: Utf8PathBuf,
    },

    /// A slug or namespace contains characters that cannot appear in file
    /// names or PHP constants.
    #[error("invalid plugin {field} '{value}'")]
    InvalidIdentifier {
        /// Which identifier was rejected.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A target pattern failed to compile.
    #[error("invalid pattern for {target}: {message}")]
    Pattern {
        /// Target file the pattern belongs to.
        target: Utf8PathBuf,
        /// Regex compiler message.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("failed to load configuration: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// No target file was changed.
    #[error("no files were updated; check that the version patterns match the plugin files")]
    NothingUpdated,

    /// One or more targets failed to update.
    #[error("{count} file(s) could not be updated")]
    TargetsFailed {
        /// Number of failed targets.
        count: usize,
    },
}

/// Errors raised while rewriting a single target file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    /// The target path escapes the plugin root or is not a file path.
    #[error("target path '{path}' must be relative to the plugin root")]
    InvalidPath {
        /// The rejected path.
        path: Utf8PathBuf,
    },

    /// The target file could not be read.
    #[error("failed to read '{path}': {message}")]
    Read {
        /// Path to the target file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The updated contents could not be written.
    #[error("failed to write '{path}': {message}")]
    Write {
        /// Path that was being written.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}
