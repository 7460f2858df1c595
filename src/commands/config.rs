// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::{db, store};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            println!("Database : {}", db::db_path()?.display());
            println!("Currency : {}", store::currency_symbol(conn)?);
        }
        Some(("currency", sub)) => {
            let symbol = sub.get_one::<String>("symbol").unwrap().trim().to_string();
            if symbol.is_empty() {
                return Err(anyhow::anyhow!("Currency symbol must not be empty"));
            }
            store::set_currency_symbol(conn, &symbol)?;
            println!("Currency symbol set to '{}'", symbol);
        }
        _ => {}
    }
    Ok(())
}
