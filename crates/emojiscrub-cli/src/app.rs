//! Mode dispatcher.
//!
//! Maps the parsed arguments onto one of the core flows and renders the
//! resulting report. Per-file failures are part of the report, so the only
//! errors returned from here are output failures.
use crate::args::{CliArgs, Mode};
use crate::console;
use emojiscrub_core::scrub::{run_apply, run_check};
use emojiscrub_core::{EmojiPattern, ScanRules};
use std::io::Write;
use tracing::info;

/// Run the mode selected by `args`, writing user-facing lines to `out`.
///
/// Without a mode flag only the usage hint is written; the root is never
/// touched.
pub fn run<W: Write>(args: &CliArgs, out: &mut W) -> anyhow::Result<()> {
    let Some(mode) = args.mode() else {
        console::write_usage_hint(out)?;
        return Ok(());
    };

    let pattern = EmojiPattern::new()?;
    let rules = ScanRules::default();
    info!("Running {mode:?} on {}", args.root.display());

    match mode {
        Mode::Check => {
            let report = run_check(&args.root, &rules, &pattern);
            console::render_check(&report, out)?;
        }
        Mode::Apply => {
            let report = run_apply(&args.root, &rules, &pattern);
            console::render_apply(&report, out)?;
        }
    }

    out.flush()?;
    Ok(())
}
