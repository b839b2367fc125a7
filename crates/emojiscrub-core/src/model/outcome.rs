//! Per-file results and the aggregated reports returned by the flows.
use crate::error::ScrubError;
use std::path::{Path, PathBuf};

/// What the apply flow did to one file that contained emoji.
///
/// Files without a match produce no outcome at all.
#[derive(Debug)]
pub enum FileOutcome {
    /// Backup written and the original rewritten without its emoji.
    Stripped {
        path: PathBuf,
        backup: PathBuf,
        /// Number of scalar values deleted.
        removed: usize,
    },
    /// A match was detected but stripping left the text identical, so only
    /// the backup was written. Not reachable with a pure-deletion pattern.
    Unchanged { path: PathBuf, backup: PathBuf },
    /// Writing the backup or the stripped text failed.
    Failed { path: PathBuf, error: ScrubError },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Stripped { path, .. } | Self::Unchanged { path, .. } | Self::Failed { path, .. } => {
                path
            }
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Result of a report-only run.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Candidates containing at least one emoji, in traversal order.
    pub matches: Vec<PathBuf>,
    /// Candidate files visited (readable or not).
    pub files_scanned: u64,
    /// Candidates skipped because they could not be read.
    pub files_unreadable: u64,
}

/// Result of a mutating run.
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// One entry per candidate that contained emoji, in traversal order.
    pub outcomes: Vec<FileOutcome>,
    pub files_scanned: u64,
    pub files_unreadable: u64,
}

impl ApplyReport {
    pub fn stripped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Stripped { .. }))
            .count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn report_counts_by_outcome_kind() {
        let report = ApplyReport {
            outcomes: vec![
                FileOutcome::Stripped {
                    path: "a.md".into(),
                    backup: "a.md.bak".into(),
                    removed: 2,
                },
                FileOutcome::Failed {
                    path: "b.md".into(),
                    error: ScrubError::Backup {
                        path: "b.md.bak".into(),
                        source: io::Error::from(io::ErrorKind::PermissionDenied),
                    },
                },
                FileOutcome::Unchanged {
                    path: "c.md".into(),
                    backup: "c.md.bak".into(),
                },
            ],
            files_scanned: 5,
            files_unreadable: 0,
        };

        assert_eq!(report.stripped_count(), 1);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.outcomes[2].path(), Path::new("c.md"));
    }
}
