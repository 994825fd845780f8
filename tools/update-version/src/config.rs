//! Version bump configuration loaded via OrthoConfig.

use std::ffi::OsString;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::error::UpdateError;

/// Defaults for the plugin root and identifiers, read from the environment
/// (`UPDATE_VERSION_*`) and configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "UPDATE_VERSION")]
pub struct UpdateVersionSettings {
    /// Plugin root directory.
    pub root: Option<PathBuf>,
    /// Plugin slug; names the main plugin file and block directory.
    pub slug: Option<String>,
    /// Namespace used for the PHP version constant.
    pub namespace: Option<String>,
    /// Report what would change without writing any file.
    #[ortho_config(default = false)]
    pub dry_run: bool,
}

impl UpdateVersionSettings {
    /// Loads settings without consulting command-line arguments.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::Config`] when a configuration source cannot be
    /// parsed.
    pub fn load() -> Result<Self, UpdateError> {
        Self::load_from_iter([OsString::from("update-version")]).map_err(|err| {
            UpdateError::Config {
                message: err.to_string(),
            }
        })
    }
}
