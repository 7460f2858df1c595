// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Entry, EntryKind};
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};

fn entry_from_row(r: &Row) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: r.get(0)?,
        kind: r.get(1)?,
        category: r.get(2)?,
        date: r.get(3)?,
        amount: r.get(4)?,
        note: r.get(5)?,
    })
}

pub fn insert_entry(conn: &Connection, entry: &Entry) -> Result<i64> {
    conn.execute(
        "INSERT INTO entries(kind, category, date, amount, note) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![entry.kind, entry.category, entry.date, entry.amount, entry.note],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Full-row replacement by id.
pub fn update_entry(conn: &Connection, entry: &Entry) -> Result<()> {
    let changed = conn.execute(
        "UPDATE entries SET kind=?1, category=?2, date=?3, amount=?4, note=?5 WHERE id=?6",
        params![entry.kind, entry.category, entry.date, entry.amount, entry.note, entry.id],
    )?;
    if changed == 0 {
        return Err(anyhow::anyhow!("Entry {} not found", entry.id));
    }
    Ok(())
}

pub fn delete_entry(conn: &Connection, id: i64) -> Result<()> {
    let changed = conn.execute("DELETE FROM entries WHERE id=?1", params![id])?;
    if changed == 0 {
        return Err(anyhow::anyhow!("Entry {} not found", id));
    }
    Ok(())
}

pub fn entry_by_id(conn: &Connection, id: i64) -> Result<Option<Entry>> {
    let mut stmt =
        conn.prepare("SELECT id, kind, category, date, amount, note FROM entries WHERE id=?1")?;
    let entry = stmt.query_row(params![id], entry_from_row).optional()?;
    Ok(entry)
}

pub fn all_entries(conn: &Connection) -> Result<Vec<Entry>> {
    let mut stmt = conn.prepare(
        "SELECT id, kind, category, date, amount, note FROM entries ORDER BY date DESC, id DESC",
    )?;
    let rows = stmt.query_map([], entry_from_row)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub fn entries_for_day(conn: &Connection, date: &str) -> Result<Vec<Entry>> {
    let mut stmt = conn.prepare(
        "SELECT id, kind, category, date, amount, note FROM entries
         WHERE date=?1 ORDER BY date DESC, id DESC",
    )?;
    let rows = stmt.query_map(params![date], entry_from_row)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub fn entries_for_month(conn: &Connection, month: &str) -> Result<Vec<Entry>> {
    let mut stmt = conn.prepare(
        "SELECT id, kind, category, date, amount, note FROM entries
         WHERE substr(date,1,7)=?1 ORDER BY date DESC, id DESC",
    )?;
    let rows = stmt.query_map(params![month], entry_from_row)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub fn monthly_entries_by_kind(
    conn: &Connection,
    month: &str,
    kind: EntryKind,
) -> Result<Vec<Entry>> {
    let mut stmt = conn.prepare(
        "SELECT id, kind, category, date, amount, note FROM entries
         WHERE substr(date,1,7)=?1 AND kind=?2 ORDER BY date DESC, id DESC",
    )?;
    let rows = stmt.query_map(params![month, kind], entry_from_row)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

/// All-time signed balance computed store-side; `None` when no entries
/// exist. The history aggregator recomputes this independently and the two
/// must agree whenever every stored date parses (`doctor` checks it).
pub fn current_balance(conn: &Connection) -> Result<Option<i64>> {
    let v: Option<i64> = conn.query_row(
        "SELECT SUM(CASE kind WHEN 'INCOME' THEN amount WHEN 'OUTCOME' THEN -amount ELSE 0 END)
         FROM entries",
        [],
        |r| r.get(0),
    )?;
    Ok(v)
}

/// `None` = never set (readers treat as 0).
pub fn monthly_budget(conn: &Connection) -> Result<Option<i64>> {
    let v = conn
        .query_row("SELECT amount FROM monthly_budget WHERE id=1", [], |r| r.get(0))
        .optional()?;
    Ok(v)
}

pub fn upsert_monthly_budget(conn: &Connection, amount: i64) -> Result<()> {
    conn.execute(
        "INSERT INTO monthly_budget(id, amount) VALUES (1, ?1)
         ON CONFLICT(id) DO UPDATE SET amount=excluded.amount",
        params![amount],
    )?;
    Ok(())
}

pub fn reset_monthly_budget(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM monthly_budget WHERE id=1", [])?;
    Ok(())
}

pub fn currency_symbol(conn: &Connection) -> Result<String> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key='currency_symbol'",
            [],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v.unwrap_or_else(|| "Rp".to_string()))
}

pub fn set_currency_symbol(conn: &Connection, symbol: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('currency_symbol', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![symbol],
    )?;
    Ok(())
}

/// Detects commits from other connections through SQLite's `data_version`,
/// which advances at most once per observed change no matter how many
/// writes landed in between. Re-reading after a positive poll always sees
/// the latest state; intermediate snapshots are never queued.
pub struct ChangeWatcher<'c> {
    conn: &'c Connection,
    last_version: i64,
}

impl<'c> ChangeWatcher<'c> {
    pub fn new(conn: &'c Connection) -> Result<Self> {
        let last_version = data_version(conn)?;
        Ok(Self { conn, last_version })
    }

    /// True when the database changed since the last observation.
    pub fn poll(&mut self) -> Result<bool> {
        let v = data_version(self.conn)?;
        if v != self.last_version {
            self.last_version = v;
            return Ok(true);
        }
        Ok(false)
    }
}

fn data_version(conn: &Connection) -> Result<i64> {
    let v = conn
        .query_row("PRAGMA data_version", [], |r| r.get(0))
        .context("Read SQLite data_version")?;
    Ok(v)
}
