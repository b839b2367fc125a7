//! Human-readable report rendering.
//!
//! All user-facing text goes through here so the dispatcher stays free of
//! formatting and tests can render into a buffer.
use emojiscrub_core::model::{ApplyReport, CheckReport, FileOutcome};
use std::io::{self, Write};
use tracing::debug;

pub const USAGE_HINT: &str = "Specify --check or --apply";
pub const NO_EMOJI: &str = "No emojis found.";
pub const NOTHING_TO_APPLY: &str = "No emojis found. Nothing to apply.";
pub const CHECK_HEADER: &str = "Files containing emojis:";
pub const APPLY_DONE: &str = "Done. Please review backups (.bak) before committing.";

pub fn write_usage_hint<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{USAGE_HINT}")
}

pub fn render_check<W: Write>(report: &CheckReport, out: &mut W) -> io::Result<()> {
    if report.matches.is_empty() {
        return writeln!(out, "{NO_EMOJI}");
    }
    writeln!(out, "{CHECK_HEADER}")?;
    for path in &report.matches {
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}

pub fn render_apply<W: Write>(report: &ApplyReport, out: &mut W) -> io::Result<()> {
    if report.outcomes.is_empty() {
        return writeln!(out, "{NOTHING_TO_APPLY}");
    }
    for outcome in &report.outcomes {
        match outcome {
            FileOutcome::Stripped { path, backup, .. } => {
                let backup_name = backup
                    .file_name()
                    .map(|n| n.to_string_lossy())
                    .unwrap_or_default();
                writeln!(out, "Processed: {} (backup: {backup_name})", path.display())?;
            }
            FileOutcome::Failed { path, error } => {
                writeln!(out, "Error processing {}: {error}", path.display())?;
            }
            FileOutcome::Unchanged { path, .. } => {
                debug!("No change written for {}", path.display());
            }
        }
    }
    writeln!(out, "{APPLY_DONE}")
}
