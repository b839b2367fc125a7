//! Data model: decoded file text, per-file outcomes and run reports.

pub mod decoded;
pub mod outcome;

pub use decoded::DecodedText;
pub use outcome::{ApplyReport, CheckReport, FileOutcome};
