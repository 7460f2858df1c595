// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centavo::models::{Entry, EntryKind};
use centavo::{cli, commands::exporter, db, store};
use rusqlite::Connection;
use tempfile::tempdir;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    store::insert_entry(
        &conn,
        &Entry {
            id: 0,
            kind: EntryKind::Income,
            category: "Salary".into(),
            date: "2025-10-01".into(),
            amount: 5_000_000,
            note: "october pay".into(),
        },
    )
    .unwrap();
    store::insert_entry(
        &conn,
        &Entry {
            id: 0,
            kind: EntryKind::Outcome,
            category: "Food & Drink".into(),
            date: "2025-10-02".into(),
            amount: 45_000,
            note: String::new(),
        },
    )
    .unwrap();
    conn
}

fn run_export(conn: &Connection, format: &str, out: &str) {
    let matches = cli::build_cli().get_matches_from([
        "centavo", "export", "entries", "--format", format, "--out", out,
    ]);
    let Some(("export", export_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(conn, export_m).unwrap();
}

#[test]
fn csv_export_writes_header_and_rows_in_date_order() {
    let conn = setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("entries.csv");

    run_export(&conn, "csv", out.to_str().unwrap());

    let content = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "id,kind,category,date,amount,note");
    assert!(lines[1].contains("INCOME"));
    assert!(lines[1].contains("2025-10-01"));
    assert!(lines[2].contains("OUTCOME"));
    assert!(lines[2].contains("45000"));
}

#[test]
fn json_export_is_an_array_of_entries() {
    let conn = setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("entries.json");

    run_export(&conn, "json", out.to_str().unwrap());

    let content = std::fs::read_to_string(&out).unwrap();
    let items: serde_json::Value = serde_json::from_str(&content).unwrap();
    let arr = items.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["kind"], "INCOME");
    assert_eq!(arr[0]["amount"], 5_000_000);
    assert_eq!(arr[1]["category"], "Food & Drink");
}
