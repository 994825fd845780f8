//! Applies version targets to a plugin root.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use regex::NoExpand;
use tracing::{error, info, warn};

use crate::atomic_io::{split_target, write_atomic};
use crate::error::{TargetError, UpdateError};
use crate::identity::PluginIdentity;
use crate::report::{FileOutcome, UpdateReport};
use crate::targets::{VersionTarget, plugin_targets};
use crate::version::PluginVersion;

/// Whether matched targets are written back to disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Rewrite each matched target.
    #[default]
    Write,
    /// Report matched targets as updated but leave them untouched.
    DryRun,
}

/// A validated version bump, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan {
    root: Utf8PathBuf,
    identity: PluginIdentity,
    version: PluginVersion,
    mode: WriteMode,
}

impl UpdatePlan {
    /// Bundles a plugin root, its identity and the new version.
    #[must_use]
    pub const fn new(root: Utf8PathBuf, identity: PluginIdentity, version: PluginVersion) -> Self {
        Self {
            root,
            identity,
            version,
            mode: WriteMode::Write,
        }
    }

    /// Sets whether matched targets are written.
    #[must_use]
    pub const fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the plugin root directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the plugin identity.
    #[must_use]
    pub const fn identity(&self) -> &PluginIdentity {
        &self.identity
    }

    /// Returns the version being written.
    #[must_use]
    pub const fn version(&self) -> &PluginVersion {
        &self.version
    }

    /// Returns whether matched targets are written.
    #[must_use]
    pub const fn write_mode(&self) -> WriteMode {
        self.mode
    }
}

/// Runs a version bump against the plugin root on disk.
///
/// Missing and unchanged targets are logged and skipped; failed targets are
/// recorded and the remaining targets are still processed.
///
/// # Errors
///
/// Returns [`UpdateError::OpenRoot`] when the root directory cannot be
/// opened, or [`UpdateError::Pattern`] if a target pattern fails to compile.
pub fn run_update(plan: &UpdatePlan) -> Result<UpdateReport, UpdateError> {
    let root = Dir::open_ambient_dir(&plan.root, ambient_authority()).map_err(|err| {
        UpdateError::OpenRoot {
            path: plan.root.clone(),
            message: err.to_string(),
        }
    })?;
    let targets = plugin_targets(&plan.identity, &plan.version)?;
    Ok(apply_targets(&root, &targets, plan.mode))
}

/// Applies each target in order and records what happened.
///
/// A file listed twice sees the result of the earlier rewrite. On a dry run
/// matched targets are reported as [`FileOutcome::Updated`] and nothing is
/// written.
#[must_use]
pub fn apply_targets(root: &Dir, targets: &[VersionTarget], mode: WriteMode) -> UpdateReport {
    let mut report = UpdateReport::default();
    for target in targets {
        let outcome = apply_target(root, target, mode);
        log_outcome(target, &outcome, mode);
        report.push(target.path(), outcome);
    }
    report
}

fn apply_target(root: &Dir, target: &VersionTarget, mode: WriteMode) -> FileOutcome {
    let path = target.path();
    if let Err(error) = split_target(path) {
        return FileOutcome::Failed { error };
    }

    let original = match root.read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return FileOutcome::Missing,
        Err(err) => {
            return FileOutcome::Failed {
                error: TargetError::Read {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                },
            };
        }
    };

    let rewritten = target
        .pattern()
        .replace(&original, NoExpand(target.replacement()));
    if rewritten == original {
        return FileOutcome::Unchanged;
    }
    if mode == WriteMode::DryRun {
        return FileOutcome::Updated;
    }

    match write_atomic(root, path, &rewritten) {
        Ok(()) => FileOutcome::Updated,
        Err(error) => FileOutcome::Failed { error },
    }
}

fn log_outcome(target: &VersionTarget, outcome: &FileOutcome, mode: WriteMode) {
    let path = target.path();
    match outcome {
        FileOutcome::Updated if mode == WriteMode::DryRun => info!(%path, "would update version"),
        FileOutcome::Updated => info!(%path, "updated version"),
        FileOutcome::Missing => warn!(%path, "file not found"),
        FileOutcome::Unchanged => warn!(%path, "no changes made (pattern not found)"),
        FileOutcome::Failed { error: failure } => {
            error!(%path, error = %failure, "error updating file");
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    struct PluginRoot {
        _temp: tempfile::TempDir,
        dir: Dir,
    }

    #[fixture]
    fn plugin_root() -> PluginRoot {
        let temp = tempfile::tempdir().expect("create temp dir");
        let dir = Dir::open_ambient_dir(temp.path(), ambient_authority()).expect("open temp dir");
        PluginRoot { _temp: temp, dir }
    }

    fn targets() -> Vec<VersionTarget> {
        let identity = PluginIdentity::new("notice", Some("acme")).expect("valid identity");
        let version: PluginVersion = "1.1.0".parse().expect("valid version");
        plugin_targets(&identity, &version).expect("targets compile")
    }

    fn outcome_for<'a>(report: &'a UpdateReport, index: usize) -> &'a FileOutcome {
        &report.targets().get(index).expect("target recorded").outcome
    }

    #[rstest]
    fn updates_header_and_constant_in_one_file(plugin_root: PluginRoot) {
        plugin_root
            .dir
            .write(
                "notice.php",
                " * Version: 1.0.0\ndefine( 'ACME_VERSION', '1.0.0' );\n",
            )
            .expect("seed plugin file");

        let report = apply_targets(&plugin_root.dir, &targets(), WriteMode::Write);

        assert_eq!(outcome_for(&report, 2), &FileOutcome::Updated);
        assert_eq!(outcome_for(&report, 3), &FileOutcome::Updated);
        let contents = plugin_root
            .dir
            .read_to_string("notice.php")
            .expect("read plugin file");
        assert_eq!(
            contents,
            " * Version: 1.1.0\ndefine( 'ACME_VERSION', '1.1.0' );\n"
        );
    }

    #[rstest]
    fn reports_missing_files(plugin_root: PluginRoot) {
        let report = apply_targets(&plugin_root.dir, &targets(), WriteMode::Write);

        assert!(
            report
                .targets()
                .iter()
                .all(|target| target.outcome == FileOutcome::Missing)
        );
        assert_eq!(report.status(), Err(UpdateError::NothingUpdated));
    }

    #[rstest]
    fn same_version_leaves_file_unchanged(plugin_root: PluginRoot) {
        plugin_root
            .dir
            .write("package.json", r#"{ "version": "1.1.0" }"#)
            .expect("seed package.json");

        let report = apply_targets(&plugin_root.dir, &targets(), WriteMode::Write);

        assert_eq!(outcome_for(&report, 0), &FileOutcome::Unchanged);
    }

    #[rstest]
    fn only_first_match_is_rewritten(plugin_root: PluginRoot) {
        plugin_root
            .dir
            .write(
                "package.json",
                r#"{ "version": "1.0.0", "engines": { "version": "9.9.9" } }"#,
            )
            .expect("seed package.json");

        let report = apply_targets(&plugin_root.dir, &targets(), WriteMode::Write);

        assert_eq!(outcome_for(&report, 0), &FileOutcome::Updated);
        let contents = plugin_root
            .dir
            .read_to_string("package.json")
            .expect("read package.json");
        assert_eq!(
            contents,
            r#"{ "version": "1.1.0", "engines": { "version": "9.9.9" } }"#
        );
    }

    #[rstest]
    fn non_utf8_file_fails_without_stopping_the_run(plugin_root: PluginRoot) {
        plugin_root
            .dir
            .write("package.json", [0xff_u8, 0xfe, 0xfd])
            .expect("seed package.json");
        plugin_root
            .dir
            .write("composer.json", r#"{ "version": "1.0.0" }"#)
            .expect("seed composer.json");

        let report = apply_targets(&plugin_root.dir, &targets(), WriteMode::Write);

        assert!(matches!(
            outcome_for(&report, 0),
            FileOutcome::Failed {
                error: TargetError::Read { .. }
            }
        ));
        assert_eq!(outcome_for(&report, 1), &FileOutcome::Updated);
        assert_eq!(
            report.status(),
            Err(UpdateError::TargetsFailed { count: 1 })
        );
    }

    #[rstest]
    fn dry_run_reports_without_writing(plugin_root: PluginRoot) {
        plugin_root
            .dir
            .write("package.json", r#"{ "version": "1.0.0" }"#)
            .expect("seed package.json");

        let report = apply_targets(&plugin_root.dir, &targets(), WriteMode::DryRun);

        assert_eq!(outcome_for(&report, 0), &FileOutcome::Updated);
        assert_eq!(report.status(), Ok(()));
        let contents = plugin_root
            .dir
            .read_to_string("package.json")
            .expect("read package.json");
        assert_eq!(contents, r#"{ "version": "1.0.0" }"#);
    }

    #[test]
    fn unopenable_root_is_reported() {
        let identity = PluginIdentity::new("notice", None).expect("valid identity");
        let version: PluginVersion = "1.1.0".parse().expect("valid version");
        let root = Utf8Path::new("target/update-version-tests/does-not-exist").to_path_buf();
        let plan = UpdatePlan::new(root.clone(), identity, version);

        let result = run_update(&plan);

        assert!(matches!(result, Err(UpdateError::OpenRoot { path, .. }) if path == root));
    }
}
