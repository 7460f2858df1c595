// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::history::compute_history;
use crate::store;
use crate::utils::{parse_date, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Dates that do not parse as YYYY-MM-DD; these rows are invisible to
    //    the history and statistics computations.
    let mut stmt = conn.prepare("SELECT id, date FROM entries ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        if parse_date(&date).is_err() {
            rows.push(vec!["malformed_date".into(), format!("entry #{} '{}'", id, date)]);
        }
    }

    // 2) Amounts that slipped past the positive-amount input rule
    let mut stmt2 = conn.prepare("SELECT id, amount FROM entries WHERE amount <= 0 ORDER BY id")?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let id: i64 = r.get(0)?;
        let amount: i64 = r.get(1)?;
        rows.push(vec![
            "non_positive_amount".into(),
            format!("entry #{} ({})", id, amount),
        ]);
    }

    // 3) Store-side balance vs the recomputed history balance; these only
    //    diverge when malformed-date rows are excluded from the history.
    let entries = store::all_entries(conn)?;
    let recomputed = compute_history(&entries)
        .first()
        .map(|g| g.ending_balance)
        .unwrap_or(0);
    let stored = store::current_balance(conn)?.unwrap_or(0);
    if stored != recomputed {
        rows.push(vec![
            "balance_mismatch".into(),
            format!("store says {}, history says {}", stored, recomputed),
        ]);
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
