//! Path-level filters: recognised extensions and excluded directories.
use crate::config::ScanRules;
use std::ffi::OsStr;
use std::path::{Component, Path};

/// `true` if the final extension of `path` is in `rules.extensions`,
/// ignoring ASCII case. Files without an extension never match.
pub fn has_known_extension(path: &Path, rules: &ScanRules) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| rules.extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)))
}

/// `true` if `name` is one of the excluded directory names (exact match).
pub fn is_excluded_name(name: &OsStr, rules: &ScanRules) -> bool {
    rules.excluded_dirs.iter().any(|dir| name == OsStr::new(dir))
}

/// `true` if any component of `path` is an excluded directory name.
///
/// Every component is checked, including those of the scan root itself.
pub fn is_excluded_path(path: &Path, rules: &ScanRules) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => is_excluded_name(name, rules),
        _ => false,
    })
}
