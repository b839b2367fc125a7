//! Command-line argument parsing.
//!
//! `--check` and `--apply` are mutually exclusive. Passing neither is not an
//! error: the dispatcher prints a hint and exits normally.
use clap::Parser;
use std::path::PathBuf;

/// Find and strip emoji from source and documentation files
#[derive(Parser, Debug)]
#[command(name = "emojiscrub", version, about = "Find and strip emoji from source and docs")]
pub struct CliArgs {
    /// List files containing emoji without changing them
    #[arg(long, conflicts_with = "apply")]
    pub check: bool,

    /// Remove emoji in place, writing a .bak copy of each modified file
    #[arg(long)]
    pub apply: bool,

    /// Directory to scan
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub root: PathBuf,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Operating mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Report-only.
    Check,
    /// Mutate with backups.
    Apply,
}

impl CliArgs {
    /// The selected mode, or `None` when no mode flag was given.
    pub fn mode(&self) -> Option<Mode> {
        if self.check {
            Some(Mode::Check)
        } else if self.apply {
            Some(Mode::Apply)
        } else {
            None
        }
    }
}
