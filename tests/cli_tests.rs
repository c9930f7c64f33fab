use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rtimetracker::db::SqliteStore;
use rtimetracker::models::WeekEntry;
use rtimetracker::storage::{KvFileStore, StorageBackend};
use std::fs;

mod common;
use common::{init_stores, rti_with, setup_test_stores, temp_dir};

fn add(db: &str, kv: &str, args: &[&str]) {
    let mut full = vec!["add"];
    full.extend_from_slice(args);
    rti_with(db, kv, &full).assert().success();
}

#[test]
fn test_init_creates_both_stores() {
    let (db, kv) = setup_test_stores("cli_init");

    rti_with(&db, &kv, &["init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(fs::metadata(&db).is_ok());
    assert_eq!(SqliteStore::new(&db).load().unwrap(), None);
}

#[test]
fn test_add_list_and_summary() {
    let (db, kv) = setup_test_stores("cli_add_list");
    init_stores(&db, &kv);

    add(&db, &kv, &["45", "--year", "2024", "--week", "10"]);
    add(&db, &kv, &["38"]);
    add(&db, &kv, &["42", "--holiday"]);

    rti_with(&db, &kv, &["list"])
        .assert()
        .success()
        .stdout(contains("Overtime balance"))
        .stdout(contains("+3h"))
        .stdout(contains("40h (holiday)"))
        .stdout(contains("-3h"));

    rti_with(&db, &kv, &["summary"])
        .assert()
        .success()
        .stdout(contains("+3h"));

    // suggested slots were used for the 2nd and 3rd entry, in both stores
    let expected = vec![
        WeekEntry::new(2024, 10, 45.0, false, 0.0),
        WeekEntry::new(2024, 11, 38.0, false, 0.0),
        WeekEntry::new(2024, 12, 42.0, true, 0.0),
    ];
    assert_eq!(SqliteStore::new(&db).load().unwrap(), Some(expected.clone()));
    assert_eq!(KvFileStore::new(&kv).load().unwrap(), Some(expected));
}

#[test]
fn test_list_single_week() {
    let (db, kv) = setup_test_stores("cli_list_week");
    init_stores(&db, &kv);

    add(&db, &kv, &["45", "--year", "2024", "--week", "10"]);
    add(&db, &kv, &["38"]);

    rti_with(&db, &kv, &["list", "--year", "2024", "--week", "10"])
        .assert()
        .success()
        .stdout(contains("Selected weeks"))
        .stdout(contains("+4h"))
        .stdout(contains("-3h").not());

    rti_with(&db, &kv, &["list", "--year", "2024", "--week", "30"])
        .assert()
        .success()
        .stdout(contains("No weeks recorded for 2024/KW30."));
}

#[test]
fn test_add_with_reduction_and_zero_hours() {
    let (db, kv) = setup_test_stores("cli_add_reduction");

    add(&db, &kv, &["45", "--year", "2024", "--week", "5", "--reduction", "2"]);
    add(&db, &kv, &["0", "--reduction", "not-a-number"]);

    assert_eq!(
        SqliteStore::new(&db).load().unwrap(),
        Some(vec![
            WeekEntry::new(2024, 5, 45.0, false, 2.0),
            WeekEntry::new(2024, 6, 0.0, false, 0.0),
        ])
    );
}

#[test]
fn test_add_rejects_empty_hours() {
    let (db, kv) = setup_test_stores("cli_add_empty");

    rti_with(&db, &kv, &["add", ""])
        .assert()
        .failure()
        .stderr(contains("must not be empty"));

    rti_with(&db, &kv, &["add", "abc"])
        .assert()
        .failure()
        .stderr(contains("Invalid hours"));
}

#[test]
fn test_next_week_suggestion() {
    let (db, kv) = setup_test_stores("cli_next");

    rti_with(&db, &kv, &["next", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("2024/KW01"));

    add(&db, &kv, &["41", "--year", "2024", "--week", "52"]);

    rti_with(&db, &kv, &["next"])
        .assert()
        .success()
        .stdout(contains("2025/KW01"));
}

#[test]
fn test_add_uses_reference_date_when_empty() {
    let (db, kv) = setup_test_stores("cli_add_date");

    add(&db, &kv, &["40", "--date", "2024-12-30"]);

    // calendar year, ISO week
    assert_eq!(
        SqliteStore::new(&db).load().unwrap(),
        Some(vec![WeekEntry::new(2024, 1, 40.0, false, 0.0)])
    );
}

#[test]
fn test_del_removes_all_duplicates() {
    let (db, kv) = setup_test_stores("cli_del_dupes");

    add(&db, &kv, &["40", "--year", "2024", "--week", "7"]);
    add(&db, &kv, &["40", "--year", "2024", "--week", "7"]);
    add(&db, &kv, &["44", "--year", "2024", "--week", "7"]);

    rti_with(&db, &kv, &["del", "2024", "7", "40"])
        .assert()
        .success()
        .stdout(contains("Deleted 2"));

    assert_eq!(
        SqliteStore::new(&db).load().unwrap(),
        Some(vec![WeekEntry::new(2024, 7, 44.0, false, 0.0)])
    );
}

#[test]
fn test_del_by_row_and_missing_entry() {
    let (db, kv) = setup_test_stores("cli_del_row");

    add(&db, &kv, &["45", "--year", "2024", "--week", "1"]);
    add(&db, &kv, &["39", "--year", "2024", "--week", "2"]);

    // row 1 is the most recent week
    rti_with(&db, &kv, &["del", "--row", "1"]).assert().success();
    assert_eq!(
        SqliteStore::new(&db).load().unwrap(),
        Some(vec![WeekEntry::new(2024, 1, 45.0, false, 0.0)])
    );

    rti_with(&db, &kv, &["del", "2024", "1", "45", "--holiday"])
        .assert()
        .success()
        .stdout(contains("No entry matching"));

    rti_with(&db, &kv, &["del", "--row", "9"])
        .assert()
        .failure()
        .stderr(contains("Invalid row number"));
}

#[test]
fn test_export_and_import_round_trip() {
    let (db, kv) = setup_test_stores("cli_roundtrip");
    let dir = temp_dir("cli_roundtrip_out");
    let out = dir.join("backup.json");
    let out = out.to_string_lossy().to_string();

    add(&db, &kv, &["45", "--year", "2024", "--week", "10"]);
    add(&db, &kv, &["38"]);

    rti_with(&db, &kv, &["export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    // fresh stores, import with confirmation on stdin
    let (db2, kv2) = setup_test_stores("cli_roundtrip_target");
    add(&db2, &kv2, &["41", "--year", "2020", "--week", "1"]);

    rti_with(&db2, &kv2, &["import", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Replace 1 current entries with 2 imported entries"))
        .stdout(contains("Imported 2 entries"));

    assert_eq!(
        SqliteStore::new(&db2).load().unwrap(),
        SqliteStore::new(&db).load().unwrap()
    );
}

#[test]
fn test_import_declined_keeps_data() {
    let (db, kv) = setup_test_stores("cli_import_declined");
    let dir = temp_dir("cli_import_declined_in");
    let file = dir.join("in.json");
    fs::write(&file, "[]").unwrap();

    add(&db, &kv, &["41", "--year", "2024", "--week", "3"]);

    rti_with(&db, &kv, &["import", "--file", &file.to_string_lossy()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Import cancelled"));

    assert_eq!(
        SqliteStore::new(&db).load().unwrap().map(|v| v.len()),
        Some(1)
    );
}

#[test]
fn test_import_rejects_object_and_bad_json() {
    let (db, kv) = setup_test_stores("cli_import_invalid");
    let dir = temp_dir("cli_import_invalid_in");

    let obj = dir.join("object.json");
    fs::write(&obj, r#"{"weeks": []}"#).unwrap();
    rti_with(&db, &kv, &["import", "--yes", "--file", &obj.to_string_lossy()])
        .assert()
        .failure()
        .stderr(contains("Invalid data format"));

    let bad = dir.join("bad.json");
    fs::write(&bad, "not json").unwrap();
    rti_with(&db, &kv, &["import", "--yes", "--file", &bad.to_string_lossy()])
        .assert()
        .failure()
        .stderr(contains("JSON parse error"));
}

#[test]
fn test_corrupt_primary_falls_back_to_kv_store() {
    let (db, kv) = setup_test_stores("cli_fallback");

    KvFileStore::new(&kv)
        .save(&[WeekEntry::new(2024, 8, 43.0, false, 0.0)])
        .unwrap();
    fs::write(&db, "definitely not sqlite").unwrap();

    rti_with(&db, &kv, &["summary"])
        .assert()
        .success()
        .stdout(contains("+2h"));
}

#[test]
fn test_corrupt_everything_renders_empty() {
    let (db, kv) = setup_test_stores("cli_all_corrupt");
    fs::write(&db, "garbage").unwrap();
    fs::write(&kv, "invalid json{{{").unwrap();

    rti_with(&db, &kv, &["list"])
        .assert()
        .success()
        .stdout(contains("No weeks recorded yet").and(contains("+0h")));
}

#[test]
fn test_log_records_operations() {
    let (db, kv) = setup_test_stores("cli_log");
    init_stores(&db, &kv);
    add(&db, &kv, &["41", "--year", "2024", "--week", "3"]);
    rti_with(&db, &kv, &["del", "2024", "3", "41"]).assert().success();

    rti_with(&db, &kv, &["log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("2024/KW03"))
        .stdout(contains("del"));
}
