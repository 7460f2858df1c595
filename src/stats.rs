// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{DailySpendPoint, Entry, EntryKind, MonthlyStatistics};
use crate::utils::{days_in_month, parse_date};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Reduces the month's entries into the budget-page numbers: outcome total,
/// remaining budget, day counts, daily average, recommended daily spend, and
/// the cumulative day-by-day trend.
///
/// Pure over `(entries, today, monthly_budget)`. Input is filtered
/// defensively: only outcomes dated inside `[1st of today's month, today]`
/// count — later same-month records are not yet incurred, and records whose
/// date does not parse are skipped with a warning. All divisions are integer
/// and truncating.
pub fn compute_monthly_statistics(
    entries: &[Entry],
    today: NaiveDate,
    monthly_budget: i64,
) -> MonthlyStatistics {
    // Today counts as day 1 of the month; days_remaining excludes it.
    let days_elapsed = i64::from(today.day());
    let total_days_in_month = i64::from(days_in_month(today.year(), today.month()));
    let days_remaining = total_days_in_month - days_elapsed;

    let mut outcomes: Vec<(NaiveDate, i64)> = Vec::new();
    for entry in entries {
        if entry.kind != EntryKind::Outcome {
            continue;
        }
        let date = match parse_date(&entry.date) {
            Ok(d) => d,
            Err(err) => {
                tracing::warn!(
                    id = entry.id,
                    date = %entry.date,
                    error = %err,
                    "excluding entry with unparsable date from statistics"
                );
                continue;
            }
        };
        if date.year() == today.year() && date.month() == today.month() && date <= today {
            outcomes.push((date, entry.amount));
        }
    }

    let total_outcome_this_month: i64 = outcomes.iter().map(|&(_, amount)| amount).sum();
    let remaining_budget = monthly_budget - total_outcome_this_month;

    let daily_average_spend = if days_elapsed > 0 {
        total_outcome_this_month / days_elapsed
    } else {
        0
    };

    // Nothing left to spread once the month is over or the budget is spent.
    let recommended_daily_spend = if days_remaining > 0 && remaining_budget > 0 {
        remaining_budget / days_remaining
    } else {
        0
    };

    let mut per_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for day in 1..=today.day() {
        if let Some(date) = NaiveDate::from_ymd_opt(today.year(), today.month(), day) {
            per_day.insert(date, 0);
        }
    }
    for &(date, amount) in &outcomes {
        if let Some(spend) = per_day.get_mut(&date) {
            *spend += amount;
        }
    }

    let mut cumulative = 0i64;
    let daily_spend_trend = per_day
        .into_iter()
        .map(|(date, spend)| {
            cumulative += spend;
            DailySpendPoint {
                date,
                cumulative_spend: cumulative,
            }
        })
        .collect();

    MonthlyStatistics {
        total_outcome_this_month,
        remaining_budget,
        days_elapsed,
        days_remaining,
        total_days_in_month,
        daily_average_spend,
        recommended_daily_spend,
        daily_spend_trend,
    }
}

/// Outcome totals per category, largest first; ties break on the label so
/// the ordering is stable across runs.
pub fn spending_by_category(entries: &[Entry]) -> Vec<(String, i64)> {
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
    for entry in entries {
        if entry.kind == EntryKind::Outcome {
            *totals.entry(entry.category.as_str()).or_insert(0) += entry.amount;
        }
    }
    let mut out: Vec<(String, i64)> = totals
        .into_iter()
        .map(|(category, spent)| (category.to_string(), spent))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}
