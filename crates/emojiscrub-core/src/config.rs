//! Process-wide scan rules.
//!
//! Everything here is fixed at compile time. [`ScanRules`] bundles the
//! constants so the flows can be pointed at narrower rule sets in tests.

/// File extensions (without the dot) eligible for inspection.
///
/// Matched case-insensitively against the final extension of a file name.
pub const TEXT_EXTENSIONS: &[&str] = &[
    "js",
    "jsx",
    "ts",
    "tsx",
    "java",
    "properties",
    "xml",
    "html",
    "css",
    "md",
    "json",
    "yml",
    "yaml",
];

/// Directory names skipped wherever they appear in a path.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "target", ".git", "dist", "build"];

/// Suffix appended to a file name to form its backup (`a.ts` → `a.ts.bak`).
pub const BACKUP_SUFFIX: &str = "bak";

/// Number of leading bytes read when deciding whether a file is binary.
pub const BINARY_PROBE_LEN: u64 = 4_096;

/// Immutable rule set shared by the walker and the apply flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRules {
    pub extensions: &'static [&'static str],
    pub excluded_dirs: &'static [&'static str],
    pub backup_suffix: &'static str,
}

impl Default for ScanRules {
    fn default() -> Self {
        Self {
            extensions: TEXT_EXTENSIONS,
            excluded_dirs: EXCLUDED_DIRS,
            backup_suffix: BACKUP_SUFFIX,
        }
    }
}
