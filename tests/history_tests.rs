// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centavo::history::compute_history;
use centavo::models::{Entry, EntryKind};

fn entry(id: i64, kind: EntryKind, date: &str, amount: i64) -> Entry {
    Entry {
        id,
        kind,
        category: "General".into(),
        date: date.into(),
        amount,
        note: String::new(),
    }
}

#[test]
fn groups_carry_day_ending_balances() {
    let entries = vec![
        entry(1, EntryKind::Income, "2025-11-01", 100),
        entry(2, EntryKind::Outcome, "2025-11-01", 30),
        entry(3, EntryKind::Outcome, "2025-11-02", 20),
    ];
    let groups = compute_history(&entries);

    assert_eq!(groups.len(), 2);

    assert_eq!(groups[0].date.to_string(), "2025-11-02");
    assert_eq!(groups[0].ending_balance, 50);
    let ids: Vec<i64> = groups[0].entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3]);

    assert_eq!(groups[1].date.to_string(), "2025-11-01");
    assert_eq!(groups[1].ending_balance, 70);
    let ids: Vec<i64> = groups[1].entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn input_order_does_not_matter() {
    let entries = vec![
        entry(1, EntryKind::Income, "2025-11-01", 100),
        entry(2, EntryKind::Outcome, "2025-11-01", 30),
        entry(3, EntryKind::Outcome, "2025-11-02", 20),
        entry(4, EntryKind::Income, "2025-10-28", 500),
    ];
    let reference = compute_history(&entries);

    let permutations: Vec<Vec<usize>> = vec![
        vec![3, 2, 1, 0],
        vec![2, 0, 3, 1],
        vec![1, 3, 0, 2],
    ];
    for order in permutations {
        let shuffled: Vec<Entry> = order.iter().map(|&i| entries[i].clone()).collect();
        let groups = compute_history(&shuffled);
        assert_eq!(groups.len(), reference.len());
        for (got, want) in groups.iter().zip(reference.iter()) {
            assert_eq!(got.date, want.date);
            assert_eq!(got.ending_balance, want.ending_balance);
            let got_ids: Vec<i64> = got.entries.iter().map(|e| e.id).collect();
            let want_ids: Vec<i64> = want.entries.iter().map(|e| e.id).collect();
            assert_eq!(got_ids, want_ids);
        }
    }
}

#[test]
fn same_day_entries_walk_in_id_order() {
    // The 500 income (id 1) must land before the 400 outcome (id 2) even
    // though the input lists them reversed; otherwise the balance would dip
    // negative mid-day.
    let entries = vec![
        entry(2, EntryKind::Outcome, "2025-11-05", 400),
        entry(1, EntryKind::Income, "2025-11-05", 500),
    ];
    let groups = compute_history(&entries);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].ending_balance, 100);
    let ids: Vec<i64> = groups[0].entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn malformed_dates_are_dropped_not_fatal() {
    let entries = vec![
        entry(1, EntryKind::Income, "2025-11-01", 100),
        entry(2, EntryKind::Outcome, "garbage", 9_999),
        entry(3, EntryKind::Outcome, "2025-11-02", 40),
    ];
    let groups = compute_history(&entries);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].ending_balance, 60);
    assert_eq!(groups[1].ending_balance, 100);
}

#[test]
fn empty_input_yields_no_groups() {
    assert!(compute_history(&[]).is_empty());
}

#[test]
fn balance_may_go_negative() {
    let entries = vec![
        entry(1, EntryKind::Outcome, "2025-11-01", 300),
        entry(2, EntryKind::Income, "2025-11-03", 1_000),
    ];
    let groups = compute_history(&entries);

    assert_eq!(groups[1].ending_balance, -300);
    assert_eq!(groups[0].ending_balance, 700);
}

#[test]
fn ending_balance_sums_all_entries_through_each_date() {
    let entries = vec![
        entry(1, EntryKind::Income, "2025-11-01", 1_000),
        entry(2, EntryKind::Outcome, "2025-11-02", 100),
        entry(3, EntryKind::Outcome, "2025-11-02", 200),
        entry(4, EntryKind::Income, "2025-11-04", 50),
    ];
    let groups = compute_history(&entries);

    for group in &groups {
        let expected: i64 = entries
            .iter()
            .filter(|e| e.date.as_str() <= group.date.to_string().as_str())
            .map(|e| e.kind.signed(e.amount))
            .sum();
        assert_eq!(group.ending_balance, expected);
    }
}
