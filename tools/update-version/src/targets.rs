//! Version targets: which files carry the plugin version and how to find it.

use camino::{Utf8Path, Utf8PathBuf};
use regex::{Regex, RegexBuilder};

use crate::error::UpdateError;
use crate::identity::PluginIdentity;
use crate::version::PluginVersion;

const JSON_VERSION_PATTERN: &str = r#""version":\s*"[^"]+""#;

/// A file plus the pattern whose first match receives the new version.
#[derive(Debug, Clone)]
pub struct VersionTarget {
    path: Utf8PathBuf,
    pattern: Regex,
    replacement: String,
}

impl VersionTarget {
    /// Builds a target from a path, a pattern and a literal replacement.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::Pattern`] when the pattern does not compile.
    pub fn new(
        path: impl Into<Utf8PathBuf>,
        pattern: &str,
        replacement: String,
    ) -> Result<Self, UpdateError> {
        Self::with_case(path.into(), pattern, replacement, false)
    }

    fn with_case(
        path: Utf8PathBuf,
        pattern: &str,
        replacement: String,
        case_insensitive: bool,
    ) -> Result<Self, UpdateError> {
        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|err| UpdateError::Pattern {
                target: path.clone(),
                message: err.to_string(),
            })?;
        Ok(Self {
            path,
            pattern: compiled,
            replacement,
        })
    }

    /// Returns the target path relative to the plugin root.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns the compiled pattern.
    #[must_use]
    pub const fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Returns the literal text substituted for the first match.
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// Returns the standard version targets of a block plugin.
///
/// The main plugin file appears twice: once for the header and once for the
/// version constant.
///
/// # Errors
///
/// Returns [`UpdateError::Pattern`] if a pattern fails to compile.
///
/// # Example
///
/// ```
/// use update_version::{PluginIdentity, PluginVersion, plugin_targets};
///
/// let identity = PluginIdentity::new("notice", None).expect("valid identity");
/// let version: PluginVersion = "1.2.0".parse().expect("valid version");
/// let targets = plugin_targets(&identity, &version).expect("targets compile");
///
/// let paths: Vec<&str> = targets.iter().map(|target| target.path().as_str()).collect();
/// assert_eq!(
///     paths,
///     ["package.json", "composer.json", "notice.php", "notice.php", "src/notice/block.json", "README.md"]
/// );
/// ```
pub fn plugin_targets(
    identity: &PluginIdentity,
    version: &PluginVersion,
) -> Result<Vec<VersionTarget>, UpdateError> {
    let slug = identity.slug();
    let prefix = identity.constant_prefix();
    let json_replacement = format!(r#""version": "{version}""#);
    let plugin_file = Utf8PathBuf::from(format!("{slug}.php"));

    Ok(vec![
        VersionTarget::new("package.json", JSON_VERSION_PATTERN, json_replacement.clone())?,
        VersionTarget::new("composer.json", JSON_VERSION_PATTERN, json_replacement.clone())?,
        VersionTarget::new(
            plugin_file.clone(),
            r"Version:\s*[\d.-]+",
            format!("Version: {version}"),
        )?,
        VersionTarget::new(
            plugin_file,
            &format!(
                r"define\(\s*'{}_VERSION',\s*'[^']+'\s*\);",
                regex::escape(&prefix)
            ),
            format!("define( '{prefix}_VERSION', '{version}' );"),
        )?,
        VersionTarget::new(
            Utf8PathBuf::from("src").join(slug).join("block.json"),
            JSON_VERSION_PATTERN,
            json_replacement,
        )?,
        VersionTarget::with_case(
            Utf8PathBuf::from("README.md"),
            r"Stable tag:\s*[\d.-]+",
            format!("Stable tag: {version}"),
            true,
        )?,
    ])
}
