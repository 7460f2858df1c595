// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centavo::models::{Entry, EntryKind};
use centavo::{cli, commands::entries, db, store};
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    for (kind, date, amount) in [
        (EntryKind::Income, "2025-01-01", 500),
        (EntryKind::Outcome, "2025-01-02", 10),
        (EntryKind::Outcome, "2025-01-03", 20),
    ] {
        store::insert_entry(
            &conn,
            &Entry {
                id: 0,
                kind,
                category: "General".into(),
                date: date.into(),
                amount,
                note: String::new(),
            },
        )
        .unwrap();
    }
    conn
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["centavo", "entry", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("entry", entry_m)) = matches.subcommand() else {
        panic!("no entry subcommand");
    };
    let Some(("list", list_m)) = entry_m.subcommand() else {
        panic!("no list subcommand");
    };
    list_m.clone()
}

#[test]
fn list_limit_respected() {
    let conn = setup();
    let rows = entries::query_rows(&conn, &list_matches(&["--limit", "2"])).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2025-01-03");
}

#[test]
fn list_filters_by_kind() {
    let conn = setup();
    let rows = entries::query_rows(&conn, &list_matches(&["--kind", "outcome"])).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|e| e.kind == EntryKind::Outcome));
}

#[test]
fn list_filters_by_day_and_month() {
    let conn = setup();
    let rows = entries::query_rows(&conn, &list_matches(&["--day", "2025-01-02"])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount, 10);

    let rows = entries::query_rows(&conn, &list_matches(&["--month", "2025-01"])).unwrap();
    assert_eq!(rows.len(), 3);
}

#[test]
fn list_rejects_bad_filters() {
    let conn = setup();
    assert!(entries::query_rows(&conn, &list_matches(&["--month", "january"])).is_err());
    assert!(entries::query_rows(&conn, &list_matches(&["--kind", "transfer"])).is_err());
}

#[test]
fn add_and_edit_round_trip_through_the_cli_surface() {
    let conn = setup();

    let matches = cli::build_cli().get_matches_from([
        "centavo", "entry", "add", "--kind", "outcome", "--category", "Transport", "--date",
        "2025-01-04", "--amount", "75", "--note", "bus pass",
    ]);
    let Some(("entry", entry_m)) = matches.subcommand() else {
        panic!("no entry subcommand");
    };
    entries::handle(&conn, entry_m).unwrap();

    let all = store::all_entries(&conn).unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].category, "Transport");
    assert_eq!(all[0].note, "bus pass");
    let id = all[0].id;

    let id_arg = id.to_string();
    let matches = cli::build_cli().get_matches_from([
        "centavo",
        "entry",
        "edit",
        id_arg.as_str(),
        "--amount",
        "80",
    ]);
    let Some(("entry", entry_m)) = matches.subcommand() else {
        panic!("no entry subcommand");
    };
    entries::handle(&conn, entry_m).unwrap();

    let back = store::entry_by_id(&conn, id).unwrap().unwrap();
    assert_eq!(back.amount, 80);
    assert_eq!(back.category, "Transport");
}

#[test]
fn add_rejects_invalid_input() {
    let conn = setup();
    let before = store::all_entries(&conn).unwrap().len();

    for argv in [
        // non-positive amount
        vec![
            "centavo", "entry", "add", "--kind", "outcome", "--category", "Food & Drink",
            "--amount", "0",
        ],
        // unknown kind
        vec![
            "centavo", "entry", "add", "--kind", "transfer", "--category", "Food & Drink",
            "--amount", "10",
        ],
        // bad date
        vec![
            "centavo", "entry", "add", "--kind", "income", "--category", "Salary", "--amount",
            "10", "--date", "2025-02-30",
        ],
        // blank category
        vec![
            "centavo", "entry", "add", "--kind", "income", "--category", "  ", "--amount", "10",
        ],
    ] {
        let matches = cli::build_cli().get_matches_from(argv);
        let Some(("entry", entry_m)) = matches.subcommand() else {
            panic!("no entry subcommand");
        };
        assert!(entries::handle(&conn, entry_m).is_err());
    }

    let long_note = "x".repeat(101);
    let matches = cli::build_cli().get_matches_from([
        "centavo", "entry", "add", "--kind", "income", "--category", "Salary", "--amount", "10",
        "--note", long_note.as_str(),
    ]);
    let Some(("entry", entry_m)) = matches.subcommand() else {
        panic!("no entry subcommand");
    };
    assert!(entries::handle(&conn, entry_m).is_err());

    assert_eq!(store::all_entries(&conn).unwrap().len(), before);
}
