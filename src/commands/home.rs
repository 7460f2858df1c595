// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::EntryKind;
use crate::stats::spending_by_category;
use crate::store;
use crate::utils::{format_amount, format_entry_amount, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use std::time::Duration;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    render(conn)?;

    if m.get_flag("watch") {
        // Re-render whenever another connection commits. Polling collapses
        // bursts of writes into one refresh of the latest state.
        let mut watcher = store::ChangeWatcher::new(conn)?;
        loop {
            std::thread::sleep(Duration::from_millis(500));
            if watcher.poll()? {
                println!();
                render(conn)?;
            }
        }
    }
    Ok(())
}

fn render(conn: &Connection) -> Result<()> {
    let today = crate::utils::today();
    let month = today.format("%Y-%m").to_string();
    let symbol = store::currency_symbol(conn)?;

    let balance = store::current_balance(conn)?.unwrap_or(0);
    let incomes = store::monthly_entries_by_kind(conn, &month, EntryKind::Income)?;
    let outcomes = store::monthly_entries_by_kind(conn, &month, EntryKind::Outcome)?;
    let month_income: i64 = incomes.iter().map(|e| e.amount).sum();
    let month_outcome: i64 = outcomes.iter().map(|e| e.amount).sum();
    let budget = store::monthly_budget(conn)?.unwrap_or(0);

    println!("Balance          : {}", format_amount(balance, &symbol));
    println!(
        "Income  ({})  : {}",
        month,
        format_amount(month_income, &symbol)
    );
    println!(
        "Outcome ({})  : {}",
        month,
        format_amount(month_outcome, &symbol)
    );
    println!(
        "Remaining budget : {}",
        format_amount(budget - month_outcome, &symbol)
    );

    let breakdown = spending_by_category(&outcomes);
    if !breakdown.is_empty() {
        let rows: Vec<Vec<String>> = breakdown
            .iter()
            .map(|(category, spent)| vec![category.clone(), format_amount(*spent, &symbol)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }

    let today_entries = store::entries_for_day(conn, &today.to_string())?;
    if today_entries.is_empty() {
        println!("No entries today");
    } else {
        let rows: Vec<Vec<String>> = today_entries
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
