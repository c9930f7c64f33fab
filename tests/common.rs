#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimetracker::models::WeekEntry;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("rtimetracker")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, suffix: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rtt_{}_{}{}", name, std::process::id(), suffix));
    fs::remove_file(&path).ok();
    path
}

/// (sqlite db, kv store) pair for one test.
pub fn setup_test_stores(name: &str) -> (String, String) {
    let db = temp_path(name, ".sqlite");
    let kv = temp_path(name, ".kv.json");
    (
        db.to_string_lossy().to_string(),
        kv.to_string_lossy().to_string(),
    )
}

/// Fresh temp directory for export output.
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = temp_path(name, "_dir");
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

/// `rtimetracker --db <db> --store <kv> --test <args…>`
pub fn rti_with(db: &str, kv: &str, args: &[&str]) -> Command {
    let mut cmd = rti();
    cmd.env("RUST_LOG", "off")
        .args(["--db", db, "--store", kv, "--test"])
        .args(args);
    cmd
}

/// Initialize both stores through the CLI.
pub fn init_stores(db: &str, kv: &str) {
    rti_with(db, kv, &["init"]).assert().success();
}

/// The three weeks used across tests: +4, -3 and +2 hours.
pub fn sample_entries() -> Vec<WeekEntry> {
    vec![
        WeekEntry::new(2024, 10, 45.0, false, 0.0),
        WeekEntry::new(2024, 11, 38.0, false, 0.0),
        WeekEntry::new(2024, 12, 42.0, true, 0.0),
    ]
}
