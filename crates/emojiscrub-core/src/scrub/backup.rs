//! Backup naming and writing.
use crate::config::ScanRules;
use crate::error::ScrubError;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Sibling path with `.<suffix>` appended to the full file name.
///
/// `src/app.ts` → `src/app.ts.bak`.
pub fn backup_path(path: &Path, rules: &ScanRules) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(rules.backup_suffix);
    path.with_file_name(name)
}

/// Write `original` (UTF-8) next to `path`, replacing any earlier backup.
pub fn write_backup(path: &Path, original: &str, rules: &ScanRules) -> Result<PathBuf, ScrubError> {
    let backup = backup_path(path, rules);
    fs::write(&backup, original).map_err(|source| ScrubError::Backup {
        path: backup.clone(),
        source,
    })?;
    Ok(backup)
}
