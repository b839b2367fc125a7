//! File walker: produces the candidate files for a run.
//!
//! Uses `jwalk` in serial mode. Excluded directories are pruned while their
//! parent is read, so their contents are never listed. The remaining
//! entries pass through the extension filter and the binary probe.
pub mod filter;
pub mod probe;

pub use filter::{has_known_extension, is_excluded_name, is_excluded_path};
pub use probe::is_text_file;

use crate::config::ScanRules;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lazily walk `root` and yield every candidate file.
///
/// Order is unspecified. Unreadable directories, a missing root and files
/// that fail the probe are skipped silently (logged at `debug`).
pub fn walk_candidates(root: &Path, rules: ScanRules) -> impl Iterator<Item = PathBuf> {
    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial)
        .process_read_dir(move |_depth, _dir, _state, children| {
            children.retain(|child| match child {
                Ok(entry) => {
                    !(entry.file_type().is_dir() && is_excluded_name(&entry.file_name, &rules))
                }
                Err(_) => true,
            });
        });

    walker.into_iter().filter_map(move |entry_result| {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                debug!("Walk error: {err}");
                return None;
            }
        };

        let file_type = entry.file_type();
        let path = entry.path();
        let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
        if !is_file {
            return None;
        }

        if is_excluded_path(&path, &rules) || !has_known_extension(&path, &rules) {
            return None;
        }

        if !is_text_file(&path) {
            debug!("Skipping binary file {}", path.display());
            return None;
        }

        Some(path)
    })
}
