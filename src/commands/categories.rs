// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{EntryKind, INCOME_CATEGORIES, OUTCOME_CATEGORIES};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.get_one::<String>("kind") {
        Some(raw) => {
            let kind: EntryKind = raw.parse()?;
            print_list(kind);
        }
        None => {
            print_list(EntryKind::Income);
            print_list(EntryKind::Outcome);
        }
    }
    Ok(())
}

fn print_list(kind: EntryKind) {
    let labels = match kind {
        EntryKind::Income => INCOME_CATEGORIES,
        EntryKind::Outcome => OUTCOME_CATEGORIES,
    };
    let header = format!("{} categories", kind);
    let rows: Vec<Vec<String>> = labels.iter().map(|l| vec![l.to_string()]).collect();
    println!("{}", pretty_table(&[header.as_str()], rows));
}
