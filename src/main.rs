//! emojiscrub: find and strip emoji from source and documentation files.
//!
//! Thin binary entry point. All logic lives in the `emojiscrub-core`
//! and `emojiscrub-cli` crates.
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = emojiscrub_cli::CliArgs::parse();

    // Diagnostics go to stderr; stdout carries only the report.
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::ERROR
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("emojiscrub starting");

    let stdout = std::io::stdout();
    emojiscrub_cli::run(&args, &mut stdout.lock())
}
