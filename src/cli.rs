// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("centavo")
        .about("Personal income/outcome tracking with a monthly budget")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the database and print its location"))
        .subcommand(entry_cmd())
        .subcommand(home_cmd())
        .subcommand(budget_cmd())
        .subcommand(history_cmd())
        .subcommand(categories_cmd())
        .subcommand(export_cmd())
        .subcommand(Command::new("doctor").about("Check stored data for inconsistencies"))
        .subcommand(config_cmd())
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn entry_cmd() -> Command {
    Command::new("entry")
        .about("Record, edit, and list entries")
        .subcommand(
            Command::new("add")
                .about("Record a new income or outcome entry")
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .value_name("KIND")
                        .required(true)
                        .help("income or outcome"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .value_name("NAME")
                        .required(true),
                )
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .value_name("AMOUNT")
                        .required(true)
                        .help("Positive whole amount"),
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("YYYY-MM-DD")
                        .help("Defaults to today"),
                )
                .arg(
                    Arg::new("note")
                        .long("note")
                        .value_name("TEXT")
                        .help("Up to 100 characters"),
                ),
        )
        .subcommand(
            Command::new("edit")
                .about("Rewrite an entry; the kind cannot change")
                .arg(
                    Arg::new("id")
                        .required(true)
                        .value_parser(value_parser!(i64)),
                )
                .arg(Arg::new("category").long("category").value_name("NAME"))
                .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
                .arg(Arg::new("amount").long("amount").value_name("AMOUNT"))
                .arg(Arg::new("note").long("note").value_name("TEXT")),
        )
        .subcommand(
            Command::new("rm").about("Delete an entry").arg(
                Arg::new("id")
                    .required(true)
                    .value_parser(value_parser!(i64)),
            ),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List entries, newest first")
                .arg(Arg::new("month").long("month").value_name("YYYY-MM"))
                .arg(Arg::new("day").long("day").value_name("YYYY-MM-DD"))
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .value_name("KIND")
                        .help("income or outcome"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_name("N")
                        .value_parser(value_parser!(usize)),
                ),
        ))
}

fn home_cmd() -> Command {
    Command::new("home")
        .about("Balance, today's entries, and this month at a glance")
        .arg(
            Arg::new("watch")
                .long("watch")
                .action(ArgAction::SetTrue)
                .help("Keep running and re-render whenever the data changes"),
        )
}

fn budget_cmd() -> Command {
    Command::new("budget")
        .about("Manage the monthly budget")
        .subcommand(
            Command::new("set")
                .about("Set the monthly budget amount")
                .arg(Arg::new("amount").value_name("AMOUNT").required(true)),
        )
        .subcommand(json_flags(
            Command::new("show").about("Budget statistics and the daily spend trend"),
        ))
        .subcommand(Command::new("reset").about("Clear the monthly budget back to 0"))
}

fn history_cmd() -> Command {
    json_flags(
        Command::new("history").about("All entries grouped by day with running balances"),
    )
}

fn categories_cmd() -> Command {
    Command::new("categories")
        .about("Show the suggested category labels")
        .arg(
            Arg::new("kind")
                .long("kind")
                .value_name("KIND")
                .help("income or outcome"),
        )
}

fn export_cmd() -> Command {
    Command::new("export")
        .about("Write data to a file")
        .subcommand(
            Command::new("entries")
                .about("Export all entries")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FMT")
                        .default_value("csv")
                        .help("csv or json"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("FILE")
                        .required(true),
                ),
        )
}

fn config_cmd() -> Command {
    Command::new("config")
        .about("Display settings")
        .subcommand(Command::new("show").about("Print the current settings"))
        .subcommand(
            Command::new("currency")
                .about("Set the currency symbol used in output")
                .arg(Arg::new("symbol").value_name("SYMBOL").required(true)),
        )
}
