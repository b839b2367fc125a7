//! Command-line frontend: argument parsing, mode dispatch, console output.
pub mod app;
pub mod args;
pub mod console;

pub use app::run;
pub use args::{CliArgs, Mode};
