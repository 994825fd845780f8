//! Per-target outcomes and the end-of-run summary.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{TargetError, UpdateError};
use crate::identity::PluginIdentity;
use crate::version::PluginVersion;

/// What happened to a single version target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The version string was rewritten.
    Updated,
    /// The target file does not exist.
    Missing,
    /// The file exists but the pattern did not change it.
    Unchanged,
    /// Reading or writing the file failed.
    Failed {
        /// The underlying failure.
        error: TargetError,
    },
}

/// Outcome for one target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    /// Target path relative to the plugin root.
    pub path: Utf8PathBuf,
    /// What happened to the target.
    pub outcome: FileOutcome,
}

/// Outcomes for every target of a run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    targets: Vec<TargetReport>,
}

impl UpdateReport {
    /// Records the outcome for a target.
    pub fn push(&mut self, path: &Utf8Path, outcome: FileOutcome) {
        self.targets.push(TargetReport {
            path: path.to_path_buf(),
            outcome,
        });
    }

    /// Returns the recorded outcomes.
    #[must_use]
    pub fn targets(&self) -> &[TargetReport] {
        &self.targets
    }

    /// Returns how many targets were rewritten.
    #[must_use]
    pub fn updated_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Updated))
    }

    /// Returns how many targets failed.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Failed { .. }))
    }

    /// Converts the report into the run's final status.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::NothingUpdated`] when no target changed, or
    /// [`UpdateError::TargetsFailed`] when any target failed.
    pub fn status(&self) -> Result<(), UpdateError> {
        if self.updated_count() == 0 {
            return Err(UpdateError::NothingUpdated);
        }
        match self.error_count() {
            0 => Ok(()),
            count => Err(UpdateError::TargetsFailed { count }),
        }
    }

    fn count(&self, predicate: impl Fn(&FileOutcome) -> bool) -> usize {
        self.targets
            .iter()
            .filter(|target| predicate(&target.outcome))
            .count()
    }
}

/// Formats the line printed before any file is touched.
#[must_use]
pub fn start_message(identity: &PluginIdentity, version: &PluginVersion) -> String {
    format!("Updating {} to version {version}...", identity.slug())
}

/// Formats the summary printed after all targets were processed.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use update_version::{FileOutcome, PluginIdentity, PluginVersion, UpdateReport, summary_message};
///
/// let identity = PluginIdentity::new("notice", None).expect("valid identity");
/// let version: PluginVersion = "1.2.0".parse().expect("valid version");
/// let mut report = UpdateReport::default();
/// report.push(Utf8Path::new("package.json"), FileOutcome::Updated);
///
/// let summary = summary_message(&report, &identity, &version);
/// assert!(summary.contains("Files updated: 1"));
/// assert!(summary.contains("git tag v1.2.0"));
/// ```
#[must_use]
pub fn summary_message(
    report: &UpdateReport,
    identity: &PluginIdentity,
    version: &PluginVersion,
) -> String {
    let mut lines = vec![
        "Update summary:".to_owned(),
        format!("Files updated: {}", report.updated_count()),
    ];
    let errors = report.error_count();
    if errors > 0 {
        lines.push(format!("Errors: {errors}"));
    }
    lines.push(String::new());

    if report.updated_count() > 0 {
        lines.extend([
            format!("Updated {} to version {version}.", identity.slug()),
            String::new(),
            "Next steps:".to_owned(),
            "1. Review the changes with: git diff".to_owned(),
            format!(
                "2. Commit the changes: git add . && git commit -m \"Bump version to {version}\""
            ),
            format!("3. Create a git tag: git tag v{version}"),
            "4. Build and test: npm run build && npm run test".to_owned(),
        ]);
    } else {
        lines.push(
            "No files were updated. Check that the version patterns match the plugin files."
                .to_owned(),
        );
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn report_with(outcomes: Vec<FileOutcome>) -> UpdateReport {
        let mut report = UpdateReport::default();
        for outcome in outcomes {
            report.push(Utf8Path::new("package.json"), outcome);
        }
        report
    }

    fn failed() -> FileOutcome {
        FileOutcome::Failed {
            error: TargetError::Read {
                path: "package.json".into(),
                message: "denied".to_owned(),
            },
        }
    }

    #[rstest]
    #[case(vec![FileOutcome::Updated, FileOutcome::Missing], Ok(()))]
    #[case(vec![FileOutcome::Missing, FileOutcome::Unchanged], Err(UpdateError::NothingUpdated))]
    #[case(vec![], Err(UpdateError::NothingUpdated))]
    #[case(vec![failed()], Err(UpdateError::NothingUpdated))]
    #[case(vec![FileOutcome::Updated, failed()], Err(UpdateError::TargetsFailed { count: 1 }))]
    fn status_reflects_outcomes(
        #[case] outcomes: Vec<FileOutcome>,
        #[case] expected: Result<(), UpdateError>,
    ) {
        assert_eq!(report_with(outcomes).status(), expected);
    }

    #[test]
    fn summary_lists_errors_and_skips_next_steps_when_nothing_changed() {
        let identity = PluginIdentity::new("notice", None).expect("valid identity");
        let version: PluginVersion = "1.0.1".parse().expect("valid version");
        let summary = summary_message(&report_with(vec![failed()]), &identity, &version);

        assert!(summary.contains("Files updated: 0"));
        assert!(summary.contains("Errors: 1"));
        assert!(summary.contains("No files were updated"));
        assert!(!summary.contains("Next steps"));
    }

    #[test]
    fn start_message_names_plugin_and_version() {
        let identity = PluginIdentity::new("notice", None).expect("valid identity");
        let version: PluginVersion = "1.0.1".parse().expect("valid version");
        assert_eq!(
            start_message(&identity, &version),
            "Updating notice to version 1.0.1..."
        );
    }
}
