//! Error type for the core crate.
//!
//! Only mutation failures and pattern compilation surface as errors.
//! Probe and decode failures are swallowed where they occur.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrubError {
    /// The emoji character class failed to compile.
    #[error("invalid emoji pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Writing the `.bak` copy failed; the original was left untouched.
    #[error("failed to write backup {}: {source}", .path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rewriting the original file failed after its backup was written.
    #[error("failed to overwrite {}: {source}", .path.display())]
    Overwrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
