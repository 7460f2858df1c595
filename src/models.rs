// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Labels offered by the entry form, advisory only; the store accepts any
/// non-empty category.
pub const INCOME_CATEGORIES: &[&str] = &["Salary", "Freelance", "Bonus", "Interest"];

pub const OUTCOME_CATEGORIES: &[&str] = &[
    "Food & Drink",
    "Transport",
    "Bills & Utilities",
    "Shopping",
    "Household",
    "Entertainment",
    "Personal Care",
    "Health",
    "Investment",
    "Education",
];

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown entry kind '{0}', expected 'income' or 'outcome'")]
pub struct UnknownEntryKind(pub String);

/// Whether an entry adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryKind {
    Income,
    Outcome,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Income => "INCOME",
            EntryKind::Outcome => "OUTCOME",
        }
    }

    /// The amount as it affects the balance: positive for income, negative
    /// for outcome.
    pub fn signed(self, amount: i64) -> i64 {
        match self {
            EntryKind::Income => amount,
            EntryKind::Outcome => -amount,
        }
    }
}

impl FromStr for EntryKind {
    type Err = UnknownEntryKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INCOME" => Ok(EntryKind::Income),
            "OUTCOME" => Ok(EntryKind::Outcome),
            _ => Err(UnknownEntryKind(s.to_string())),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for EntryKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for EntryKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: UnknownEntryKind| FromSqlError::Other(Box::new(e)))
    }
}

/// A single recorded transaction. `id` is 0 until the store assigns one.
/// `date` stays textual (`YYYY-MM-DD`) and is parsed defensively wherever
/// calendar math happens; `amount` is always positive, the sign comes from
/// `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub kind: EntryKind,
    pub category: String,
    pub date: String,
    pub amount: i64,
    pub note: String,
}

/// Cumulative outcome from the 1st of the month through `date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySpendPoint {
    pub date: NaiveDate,
    pub cumulative_spend: i64,
}

/// Everything the budget page shows for the month containing `today`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyStatistics {
    pub total_outcome_this_month: i64,
    pub remaining_budget: i64,
    pub days_elapsed: i64,
    pub days_remaining: i64,
    pub total_days_in_month: i64,
    pub daily_average_spend: i64,
    pub recommended_daily_spend: i64,
    pub daily_spend_trend: Vec<DailySpendPoint>,
}

/// One day of history: the balance after that day's last transaction and
/// the day's entries, most recently created first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryGroup {
    pub date: NaiveDate,
    pub ending_balance: i64,
    pub entries: Vec<Entry>,
}
