//! Command-line arguments and plan resolution.
//!
//! Flags override [`UpdateVersionSettings`]; anything left unset falls back
//! to the current directory and the identifiers derived from it.

use std::path::{Path, PathBuf};

use camino::Utf8PathBuf;
use clap::Parser;

use crate::config::UpdateVersionSettings;
use crate::error::UpdateError;
use crate::identity::PluginIdentity;
use crate::update::{UpdatePlan, WriteMode};
use crate::version::PluginVersion;

/// Bump the plugin version across manifests, the plugin header and the block
/// metadata.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "update-version", version, about)]
pub struct CliArgs {
    /// New version, e.g. 1.2.0 or 1.2.0-beta.1.
    #[arg(value_name = "VERSION")]
    pub new_version: String,
    /// Plugin root directory [default: current directory].
    #[arg(long)]
    pub root: Option<PathBuf>,
    /// Plugin slug [default: name of the root directory].
    #[arg(long)]
    pub slug: Option<String>,
    /// PHP constant namespace [default: slug with '-' replaced by '_'].
    #[arg(long)]
    pub namespace: Option<String>,
    /// Report what would change without writing any file.
    #[arg(long)]
    pub dry_run: bool,
}

/// Resolves arguments and settings into a runnable plan.
///
/// The version is validated before the filesystem is consulted.
///
/// # Errors
///
/// Returns [`UpdateError::InvalidVersion`] for a malformed version,
/// [`UpdateError::NonUtf8Root`] or [`UpdateError::OpenRoot`] when the root
/// cannot be used, and any identity error from [`PluginIdentity::resolve`].
pub fn resolve_plan(
    args: &CliArgs,
    settings: &UpdateVersionSettings,
) -> Result<UpdatePlan, UpdateError> {
    let version: PluginVersion = args.new_version.parse()?;

    let raw_root = args
        .root
        .as_deref()
        .or(settings.root.as_deref())
        .unwrap_or_else(|| Path::new("."));
    let root = Utf8PathBuf::try_from(raw_root.to_path_buf()).map_err(|err| {
        UpdateError::NonUtf8Root {
            path: err.as_path().to_string_lossy().into_owned(),
        }
    })?;
    let canonical = root
        .canonicalize_utf8()
        .map_err(|err| UpdateError::OpenRoot {
            path: root.clone(),
            message: err.to_string(),
        })?;

    let slug = args.slug.as_deref().or(settings.slug.as_deref());
    let namespace = args.namespace.as_deref().or(settings.namespace.as_deref());
    let identity = PluginIdentity::resolve(&canonical, slug, namespace)?;

    let mode = if args.dry_run || settings.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Write
    };

    Ok(UpdatePlan::new(canonical, identity, version).with_write_mode(mode))
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;
    use rstest::{fixture, rstest};

    use super::*;

    struct PluginDir {
        _temp: tempfile::TempDir,
        path: PathBuf,
    }

    #[fixture]
    fn plugin_dir() -> PluginDir {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("notice-block");
        std::fs::create_dir(&path).expect("create plugin dir");
        PluginDir { _temp: temp, path }
    }

    fn empty_settings() -> UpdateVersionSettings {
        UpdateVersionSettings {
            root: None,
            slug: None,
            namespace: None,
            dry_run: false,
        }
    }

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn parses_flags() {
        let parsed = args(&[
            "update-version",
            "1.2.0",
            "--root",
            "plugin",
            "--slug",
            "notice",
            "--namespace",
            "acme",
            "--dry-run",
        ]);
        assert_eq!(parsed.new_version, "1.2.0");
        assert_eq!(parsed.root, Some(PathBuf::from("plugin")));
        assert_eq!(parsed.slug.as_deref(), Some("notice"));
        assert_eq!(parsed.namespace.as_deref(), Some("acme"));
        assert!(parsed.dry_run);
    }

    #[test]
    fn version_flag_is_separate_from_the_positional_version() {
        let error = CliArgs::try_parse_from(["update-version", "--version"])
            .expect_err("--version should short-circuit parsing");
        assert_eq!(error.kind(), clap::error::ErrorKind::DisplayVersion);

        let parsed = args(&["update-version", "3.0.0"]);
        assert_eq!(parsed.new_version, "3.0.0");
        assert!(!parsed.dry_run);
    }

    #[test]
    fn version_is_required() {
        assert!(CliArgs::try_parse_from(["update-version"]).is_err());
    }

    #[rstest]
    fn derives_identity_from_root_name(plugin_dir: PluginDir) {
        let root = plugin_dir.path.to_str().expect("utf-8 temp path");
        let plan = resolve_plan(&args(&["update-version", "2.0.0", "--root", root]), &empty_settings())
            .expect("plan should resolve");

        assert_eq!(plan.identity().slug(), "notice-block");
        assert_eq!(plan.identity().namespace(), "notice_block");
        assert_eq!(plan.version().as_str(), "2.0.0");
        assert_eq!(plan.root().file_name(), Some("notice-block"));
        assert_eq!(plan.write_mode(), WriteMode::Write);
    }

    #[rstest]
    fn flags_override_settings(plugin_dir: PluginDir) {
        let settings = UpdateVersionSettings {
            root: Some(plugin_dir.path.clone()),
            slug: Some("from-settings".to_owned()),
            namespace: Some("settings_ns".to_owned()),
            dry_run: true,
        };
        let plan = resolve_plan(
            &args(&["update-version", "2.0.0", "--slug", "notice"]),
            &settings,
        )
        .expect("plan should resolve");

        assert_eq!(plan.identity().slug(), "notice");
        assert_eq!(plan.identity().namespace(), "settings_ns");
        assert_eq!(plan.root().file_name(), Some("notice-block"));
        assert_eq!(plan.write_mode(), WriteMode::DryRun);
    }

    #[test]
    fn invalid_version_is_rejected_before_root_lookup() {
        let result = resolve_plan(
            &args(&["update-version", "1.2", "--root", "/definitely/not/here"]),
            &empty_settings(),
        );
        assert_eq!(
            result,
            Err(UpdateError::InvalidVersion {
                value: "1.2".to_owned()
            })
        );
    }

    #[test]
    fn missing_root_is_reported() {
        let result = resolve_plan(
            &args(&["update-version", "1.2.0", "--root", "/definitely/not/here"]),
            &empty_settings(),
        );
        assert!(matches!(
            result,
            Err(UpdateError::OpenRoot { path, .. }) if path == Utf8Path::new("/definitely/not/here")
        ));
    }
}
