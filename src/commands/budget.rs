// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::stats::compute_monthly_statistics;
use crate::store;
use crate::utils::{format_amount, maybe_print_json, pretty_table};
use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("show", sub)) => show(conn, sub)?,
        Some(("reset", _)) => reset(conn)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let raw = sub.get_one::<String>("amount").unwrap();
    let amount = raw
        .trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid amount '{}', expected a whole number", raw))?;
    if amount < 0 {
        return Err(anyhow::anyhow!("Budget must be zero or more, got {}", amount));
    }
    store::upsert_monthly_budget(conn, amount)?;
    let symbol = store::currency_symbol(conn)?;
    println!("Monthly budget set to {}", format_amount(amount, &symbol));
    Ok(())
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let today = crate::utils::today();
    let month = today.format("%Y-%m").to_string();
    let entries = store::entries_for_month(conn, &month)?;
    let budget = store::monthly_budget(conn)?.unwrap_or(0);
    let stats = compute_monthly_statistics(&entries, today, budget);

    if maybe_print_json(json_flag, jsonl_flag, &stats)? {
        return Ok(());
    }

    let symbol = store::currency_symbol(conn)?;
    println!("Monthly budget   : {}", format_amount(budget, &symbol));
    println!(
        "Spent this month : {}",
        format_amount(stats.total_outcome_this_month, &symbol)
    );
    println!(
        "Remaining        : {}",
        format_amount(stats.remaining_budget, &symbol)
    );
    println!(
        "Day {} of {}, {} remaining",
        stats.days_elapsed, stats.total_days_in_month, stats.days_remaining
    );
    println!(
        "Daily average    : {}",
        format_amount(stats.daily_average_spend, &symbol)
    );
    println!(
        "Recommended/day  : {}",
        format_amount(stats.recommended_daily_spend, &symbol)
    );

    let mut rows = Vec::new();
    let mut previous = 0i64;
    for point in &stats.daily_spend_trend {
        rows.push(vec![
            point.date.to_string(),
            format_amount(point.cumulative_spend - previous, &symbol),
            format_amount(point.cumulative_spend, &symbol),
        ]);
        previous = point.cumulative_spend;
    }
    println!("{}", pretty_table(&["Date", "Spent", "Cumulative"], rows));
    Ok(())
}

fn reset(conn: &Connection) -> Result<()> {
    store::reset_monthly_budget(conn)?;
    println!("Monthly budget reset to 0");
    Ok(())
}
