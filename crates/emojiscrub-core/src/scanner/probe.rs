//! Binary-content heuristic.
use crate::config::BINARY_PROBE_LEN;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// `true` if the first [`BINARY_PROBE_LEN`] bytes of `path` contain no NUL.
///
/// Any I/O error classifies the file as not-text; the error is logged and
/// dropped.
pub fn is_text_file(path: &Path) -> bool {
    match probe_for_nul(path) {
        Ok(has_nul) => !has_nul,
        Err(err) => {
            debug!("Probe failed for {}: {err}", path.display());
            false
        }
    }
}

fn probe_for_nul(path: &Path) -> io::Result<bool> {
    let mut head = Vec::with_capacity(BINARY_PROBE_LEN as usize);
    File::open(path)?
        .take(BINARY_PROBE_LEN)
        .read_to_end(&mut head)?;
    Ok(head.contains(&0))
}
