/// End-to-end tests for the mode dispatcher.
///
/// Arguments are parsed with the real clap definition and `run` writes into
/// an in-memory buffer, so the exact user-facing output can be asserted
/// against a temporary directory tree.
use clap::Parser;
use emojiscrub_cli::{run, CliArgs};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn dispatch(flags: &[&str], root: &Path) -> String {
    let root = root.to_string_lossy().into_owned();
    let mut argv = vec!["emojiscrub"];
    argv.extend_from_slice(flags);
    argv.extend_from_slice(&["--root", root.as_str()]);
    let args = CliArgs::try_parse_from(argv).expect("arguments parse");

    let mut out = Vec::new();
    run(&args, &mut out).expect("dispatch succeeds");
    String::from_utf8(out).expect("utf-8 output")
}

fn notes_fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("notes.md"), "Hello 🎉 World 🚀!!").unwrap();
    fs::write(tmp.path().join("app.ts"), "export {};\n").unwrap();
    tmp
}

// ── No mode ───────────────────────────────────────────────────────────────────

#[test]
fn no_mode_prints_hint_only() {
    let tmp = notes_fixture();
    let out = dispatch(&[], tmp.path());
    assert_eq!(out, "Specify --check or --apply\n");
    assert!(!tmp.path().join("notes.md.bak").exists());
}

/// Without a mode the root is never scanned, so even a missing root is fine.
#[test]
fn no_mode_ignores_missing_root() {
    let tmp = TempDir::new().unwrap();
    let out = dispatch(&[], &tmp.path().join("nowhere"));
    assert_eq!(out, "Specify --check or --apply\n");
}

// ── Check mode ────────────────────────────────────────────────────────────────

#[test]
fn check_lists_matching_file() {
    let tmp = notes_fixture();
    let out = dispatch(&["--check"], tmp.path());

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Files containing emojis:");
    assert_eq!(lines.len(), 2, "only notes.md should be listed: {out}");
    assert_eq!(lines[1], tmp.path().join("notes.md").display().to_string());

    assert_eq!(
        fs::read_to_string(tmp.path().join("notes.md")).unwrap(),
        "Hello 🎉 World 🚀!!"
    );
    assert!(!tmp.path().join("notes.md.bak").exists());
    assert!(!tmp.path().join("app.ts.bak").exists());
}

#[test]
fn check_with_clean_tree() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.ts"), "export {};\n").unwrap();
    assert_eq!(dispatch(&["--check"], tmp.path()), "No emojis found.\n");
}

// ── Apply mode ────────────────────────────────────────────────────────────────

#[test]
fn apply_strips_and_reports_backup() {
    let tmp = notes_fixture();
    let out = dispatch(&["--apply"], tmp.path());

    let notes = tmp.path().join("notes.md");
    let expected = format!(
        "Processed: {} (backup: notes.md.bak)\nDone. Please review backups (.bak) before committing.\n",
        notes.display()
    );
    assert_eq!(out, expected);

    assert_eq!(fs::read_to_string(&notes).unwrap(), "Hello  World !!");
    assert_eq!(
        fs::read_to_string(tmp.path().join("notes.md.bak")).unwrap(),
        "Hello 🎉 World 🚀!!"
    );
    assert!(!tmp.path().join("app.ts.bak").exists());
    assert_eq!(fs::read_to_string(tmp.path().join("app.ts")).unwrap(), "export {};\n");
}

#[test]
fn apply_with_clean_tree() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.ts"), "export {};\n").unwrap();

    let out = dispatch(&["--apply"], tmp.path());
    assert_eq!(out, "No emojis found. Nothing to apply.\n");
    assert!(!tmp.path().join("app.ts.bak").exists());
}

/// A per-file failure is printed and the run still finishes normally.
#[test]
fn apply_reports_errors_and_finishes() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("locked.md"), "🎉").unwrap();
    fs::create_dir(tmp.path().join("locked.md.bak")).unwrap();

    let out = dispatch(&["--apply"], tmp.path());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2, "unexpected output: {out}");
    assert!(
        lines[0].starts_with(&format!(
            "Error processing {}: failed to write backup",
            tmp.path().join("locked.md").display()
        )),
        "unexpected error line: {}",
        lines[0]
    );
    assert_eq!(lines[1], "Done. Please review backups (.bak) before committing.");
    assert_eq!(fs::read_to_string(tmp.path().join("locked.md")).unwrap(), "🎉");
}
