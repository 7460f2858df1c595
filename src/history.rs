// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Entry, HistoryGroup};
use crate::utils::parse_date;
use chrono::NaiveDate;

/// Groups the full entry list by day, newest day first, attaching the
/// all-time running balance as of each day's last transaction.
///
/// The balance walk is chronological ascending with the id as the same-day
/// tie-break, so the result is independent of the input order. Entries
/// whose date does not parse are skipped with a warning and contribute
/// nothing. Display order inside a group is descending id (most recently
/// created first), independent of the walk order.
pub fn compute_history(entries: &[Entry]) -> Vec<HistoryGroup> {
    let mut dated: Vec<(NaiveDate, &Entry)> = entries
        .iter()
        .filter_map(|entry| match parse_date(&entry.date) {
            Ok(date) => Some((date, entry)),
            Err(err) => {
                tracing::warn!(
                    id = entry.id,
                    date = %entry.date,
                    error = %err,
                    "excluding entry with unparsable date from history"
                );
                None
            }
        })
        .collect();
    dated.sort_by_key(|&(date, entry)| (date, entry.id));

    let mut balance = 0i64;
    let mut groups: Vec<HistoryGroup> = Vec::new();
    for (date, entry) in dated {
        balance += entry.kind.signed(entry.amount);
        match groups.last_mut() {
            Some(group) if group.date == date => {
                group.ending_balance = balance;
                group.entries.push(entry.clone());
            }
            _ => groups.push(HistoryGroup {
                date,
                ending_balance: balance,
                entries: vec![entry.clone()],
            }),
        }
    }

    for group in &mut groups {
        group.entries.sort_by(|a, b| b.id.cmp(&a.id));
    }
    groups.reverse();
    groups
}
