//! emojiscrub core: scanning, emoji detection, and in-place stripping.
//!
//! This crate contains all file-processing logic with zero console output.
//! Frontends (the CLI crate) render the reports it returns.
//!
//! # Modules
//!
//! - [`config`]: Fixed extension, exclusion and backup rules.
//! - [`scanner`]: Directory traversal producing candidate text files.
//! - [`pattern`]: The compiled emoji character class.
//! - [`scrub`]: Check and apply flows, decoding, and backups.
//! - [`model`]: Decoded text, per-file outcomes and run reports.
pub mod config;
pub mod error;
pub mod model;
pub mod pattern;
pub mod scanner;
pub mod scrub;

pub use config::ScanRules;
pub use error::ScrubError;
pub use pattern::EmojiPattern;
