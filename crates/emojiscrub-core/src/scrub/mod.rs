//! Check and apply flows.
//!
//! Both flows walk the root once, decode each candidate, and collect a
//! per-file result. Nothing here prints; the caller renders the report.
//!
//! Per-file failures never abort a run. A backup is always written before
//! the original is touched, and only for files that actually match.
pub mod backup;
pub mod decode;

pub use backup::{backup_path, write_backup};
pub use decode::read_text;

use crate::config::ScanRules;
use crate::error::ScrubError;
use crate::model::{ApplyReport, CheckReport, DecodedText, FileOutcome};
use crate::pattern::EmojiPattern;
use crate::scanner::walk_candidates;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Decode `path`, counting and logging it if unreadable.
fn decode_candidate(path: &Path, unreadable: &mut u64) -> Option<String> {
    match read_text(path) {
        DecodedText::Unreadable(err) => {
            *unreadable += 1;
            debug!("Skipping unreadable {}: {err}", path.display());
            None
        }
        decoded => {
            if decoded.is_fallback() {
                debug!("{} is not UTF-8, using single-byte fallback", path.display());
            }
            decoded.into_text()
        }
    }
}

/// Report-only run: list every candidate under `root` that contains emoji.
pub fn run_check(root: &Path, rules: &ScanRules, pattern: &EmojiPattern) -> CheckReport {
    let start = Instant::now();
    let mut report = CheckReport::default();

    for path in walk_candidates(root, *rules) {
        report.files_scanned += 1;
        let Some(text) = decode_candidate(&path, &mut report.files_unreadable) else {
            continue;
        };
        if pattern.contains_match(&text) {
            debug!("Match in {}", path.display());
            report.matches.push(path);
        }
    }

    info!(
        "Check complete: {} files scanned, {} with emoji, {} unreadable in {:?}",
        report.files_scanned,
        report.matches.len(),
        report.files_unreadable,
        start.elapsed()
    );
    report
}

/// Strip emoji from one already-decoded file.
///
/// Returns `None` when `text` has no match: nothing is written and no
/// backup is created. Otherwise the backup is written first, then the
/// original is overwritten with the stripped text. Errors are folded into
/// [`FileOutcome::Failed`].
pub fn scrub_file(
    path: &Path,
    text: &str,
    rules: &ScanRules,
    pattern: &EmojiPattern,
) -> Option<FileOutcome> {
    if !pattern.contains_match(text) {
        return None;
    }

    let outcome = match apply_strip(path, text, rules, pattern) {
        Ok(outcome) => outcome,
        Err(error) => {
            warn!("Error processing {}: {error}", path.display());
            FileOutcome::Failed {
                path: path.to_path_buf(),
                error,
            }
        }
    };
    Some(outcome)
}

fn apply_strip(
    path: &Path,
    text: &str,
    rules: &ScanRules,
    pattern: &EmojiPattern,
) -> Result<FileOutcome, ScrubError> {
    let backup = write_backup(path, text, rules)?;

    let stripped = match pattern.strip(text) {
        // Unreachable for a deletion-only pattern that also drove detection.
        Cow::Borrowed(_) => {
            debug!("Match in {} but stripping changed nothing", path.display());
            return Ok(FileOutcome::Unchanged {
                path: path.to_path_buf(),
                backup,
            });
        }
        Cow::Owned(stripped) => stripped,
    };

    fs::write(path, &stripped).map_err(|source| ScrubError::Overwrite {
        path: path.to_path_buf(),
        source,
    })?;

    let removed = pattern.count_matches(text);
    info!("Stripped {removed} emoji from {}", path.display());
    Ok(FileOutcome::Stripped {
        path: path.to_path_buf(),
        backup,
        removed,
    })
}

/// Mutating run: strip emoji from every matching candidate under `root`.
pub fn run_apply(root: &Path, rules: &ScanRules, pattern: &EmojiPattern) -> ApplyReport {
    let start = Instant::now();
    let mut report = ApplyReport::default();

    for path in walk_candidates(root, *rules) {
        report.files_scanned += 1;
        let Some(text) = decode_candidate(&path, &mut report.files_unreadable) else {
            continue;
        };
        if let Some(outcome) = scrub_file(&path, &text, rules, pattern) {
            report.outcomes.push(outcome);
        }
    }

    info!(
        "Apply complete: {} files scanned, {} stripped, {} failed in {:?}",
        report.files_scanned,
        report.stripped_count(),
        report.failure_count(),
        start.elapsed()
    );
    report
}
