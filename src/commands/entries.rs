// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Entry, EntryKind};
use crate::store;
use crate::utils::{
    format_entry_amount, maybe_print_json, parse_amount, parse_date, parse_month, pretty_table,
};
use anyhow::{Context, Result};
use rusqlite::Connection;

const MAX_NOTE_LEN: usize = 100;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn validated_category(raw: &str) -> Result<String> {
    let category = raw.trim();
    if category.is_empty() {
        return Err(anyhow::anyhow!("Category must not be empty"));
    }
    Ok(category.to_string())
}

fn validated_note(raw: Option<&String>) -> Result<String> {
    let note = raw.map(|s| s.trim().to_string()).unwrap_or_default();
    if note.chars().count() > MAX_NOTE_LEN {
        return Err(anyhow::anyhow!(
            "Note is limited to {} characters",
            MAX_NOTE_LEN
        ));
    }
    Ok(note)
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let kind: EntryKind = sub.get_one::<String>("kind").unwrap().parse()?;
    let category = validated_category(sub.get_one::<String>("category").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?.to_string(),
        None => crate::utils::today().to_string(),
    };
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let note = validated_note(sub.get_one::<String>("note"))?;

    let entry = Entry {
        id: 0,
        kind,
        category,
        date,
        amount,
        note,
    };
    let id = store::insert_entry(conn, &entry)?;
    let symbol = store::currency_symbol(conn)?;
    println!(
        "Recorded entry #{}: {} for '{}' on {}",
        id,
        format_entry_amount(entry.kind, entry.amount, &symbol),
        entry.category,
        entry.date
    );
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut entry = store::entry_by_id(conn, id)?
        .with_context(|| format!("Entry {} not found", id))?;

    // The kind is fixed at creation; everything else is rewritten wholesale.
    if let Some(category) = sub.get_one::<String>("category") {
        entry.category = validated_category(category)?;
    }
    if let Some(date) = sub.get_one::<String>("date") {
        entry.date = parse_date(date)?.to_string();
    }
    if let Some(amount) = sub.get_one::<String>("amount") {
        entry.amount = parse_amount(amount)?;
    }
    if let Some(note) = sub.get_one::<String>("note") {
        entry.note = validated_note(Some(note))?;
    }

    store::update_entry(conn, &entry)?;
    println!("Updated entry #{}", id);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    store::delete_entry(conn, id)?;
    println!("Removed entry #{}", id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let symbol = store::currency_symbol(conn)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.date.clone(),
                    e.kind.to_string(),
                    e.category.clone(),
                    format_entry_amount(e.kind, e.amount, &symbol),
                    e.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Kind", "Category", "Amount", "Note"], rows)
        );
    }
    Ok(())
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Entry>> {
    let mut sql = String::from(
        "SELECT id, kind, category, date, amount, note FROM entries WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(month) = sub.get_one::<String>("month") {
        sql.push_str(" AND substr(date,1,7)=?");
        params_vec.push(parse_month(month)?);
    }
    if let Some(day) = sub.get_one::<String>("day") {
        sql.push_str(" AND date=?");
        params_vec.push(parse_date(day)?.to_string());
    }
    if let Some(kind) = sub.get_one::<String>("kind") {
        let kind: EntryKind = kind.parse()?;
        sql.push_str(" AND kind=?");
        params_vec.push(kind.as_str().to_string());
    }
    sql.push_str(" ORDER BY date DESC, id DESC");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn rusqlite::ToSql> = params_vec
        .iter()
        .map(|s| s as &dyn rusqlite::ToSql)
        .collect();
    let rows = stmt.query_map(rusqlite::params_from_iter(params), |r| {
        Ok(Entry {
            id: r.get(0)?,
            kind: r.get(1)?,
            category: r.get(2)?,
            date: r.get(3)?,
            amount: r.get(4)?,
            note: r.get(5)?,
        })
    })?;

    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}
