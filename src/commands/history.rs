// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::history::compute_history;
use crate::store;
use crate::utils::{format_amount, format_entry_amount, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let entries = store::all_entries(conn)?;
    let groups = compute_history(&entries);

    if maybe_print_json(json_flag, jsonl_flag, &groups)? {
        return Ok(());
    }
    if groups.is_empty() {
        println!("No entries recorded yet");
        return Ok(());
    }

    let symbol = store::currency_symbol(conn)?;
    for group in &groups {
        println!(
            "{}  (balance {})",
            group.date,
            format_amount(group.ending_balance, &symbol)
        );
        let rows: Vec<Vec<String>> = group
            .entries
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.category.clone(),
                    format_entry_amount(e.kind, e.amount, &symbol),
                    e.note.clone(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["ID", "Category", "Amount", "Note"], rows));
    }
    Ok(())
}
