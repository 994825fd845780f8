//! Semantic version validation.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::UpdateError;

static VERSION_RE: OnceLock<Regex> = OnceLock::new();

fn version_regex() -> &'static Regex {
    VERSION_RE.get_or_init(|| {
        // Major.minor.patch with an optional pre-release suffix.
        let pattern = r"^\d+\.\d+\.\d+(?:-[\w.-]+)?$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("version regex failed to compile: {error}"))
    })
}

/// A plugin version in `major.minor.patch[-pre]` form.
///
/// # Example
///
/// ```
/// use update_version::PluginVersion;
///
/// let version: PluginVersion = "1.2.0-beta.1".parse().expect("valid version");
/// assert_eq!(version.as_str(), "1.2.0-beta.1");
/// assert!("1.2".parse::<PluginVersion>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginVersion(String);

impl PluginVersion {
    /// Returns the version string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PluginVersion {
    type Err = UpdateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if version_regex().is_match(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(UpdateError::InvalidVersion {
                value: value.to_owned(),
            })
        }
    }
}

impl fmt::Display for PluginVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1.2.0")]
    #[case("0.0.1")]
    #[case("10.20.30")]
    #[case("1.2.0-beta")]
    #[case("1.2.0-rc.1")]
    #[case("1.2.0-alpha_2-x")]
    fn accepts_semantic_versions(#[case] value: &str) {
        let version: PluginVersion = value.parse().expect("valid version");
        assert_eq!(version.to_string(), value);
    }

    #[rstest]
    #[case("")]
    #[case("1.2")]
    #[case("v1.2.0")]
    #[case("1.2.0-")]
    #[case("1.2.0+build")]
    #[case("1.2.0 ")]
    fn rejects_other_strings(#[case] value: &str) {
        assert_eq!(
            value.parse::<PluginVersion>(),
            Err(UpdateError::InvalidVersion {
                value: value.to_owned()
            })
        );
    }
}
