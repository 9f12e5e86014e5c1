// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn entry_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("date")
            .long("date")
            .value_name("YYYY-MM-DD")
            .help("Transaction date (defaults to today)"),
    )
    .arg(
        Arg::new("rate")
            .long("rate")
            .required(true)
            .allow_negative_numbers(true)
            .value_name("CHF_PER_GRAM"),
    )
    .arg(
        Arg::new("quantity")
            .long("quantity")
            .required(true)
            .allow_negative_numbers(true)
            .value_name("GRAMS"),
    )
}

fn json_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
        .arg(
            Arg::new("jsonl")
                .long("jsonl")
                .action(ArgAction::SetTrue)
                .conflicts_with("json"),
        )
}

pub fn build_cli() -> Command {
    Command::new("goldledger")
        .about("Record gold purchases and sales in CHF and decide when to sell")
        .version(clap::crate_version!())
        .arg(
            Arg::new("file")
                .long("file")
                .global(true)
                .value_name("PATH")
                .help(
                    "Ledger CSV (env GOLDLEDGER_FILE). Not locked: concurrent writers \
                     to the same file overwrite each other",
                ),
        )
        .arg(
            Arg::new("seed-if-missing")
                .long("seed-if-missing")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Start from the seed purchase when the ledger file does not exist"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count),
        )
        .subcommand(Command::new("init").about("Create the ledger file if missing"))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(entry_args(Command::new("buy").about("Add a purchase")))
                .subcommand(entry_args(Command::new("sell").about("Add a sale")))
                .subcommand(
                    Command::new("rm").about("Delete a row by index").arg(
                        Arg::new("index")
                            .long("index")
                            .required(true)
                            .value_parser(value_parser!(usize)),
                    ),
                )
                .subcommand(json_args(Command::new("list").about("Show the ledger"))),
        )
        .subcommand(json_args(
            Command::new("stats")
                .about("Totals, average price, profit and the sell/keep decision")
                .arg(
                    Arg::new("current-rate")
                        .long("current-rate")
                        .allow_negative_numbers(true)
                        .value_name("CHF_PER_GRAM"),
                )
                .arg(
                    Arg::new("target-profit")
                        .long("target-profit")
                        .allow_negative_numbers(true)
                        .value_name("CHF_PER_GRAM")
                        .help("Sell when net profit per gram is strictly above this"),
                ),
        ))
        .subcommand(
            Command::new("plot")
                .about("Render rate, quantity and cost over time")
                .arg(Arg::new("out").long("out").required(true).value_name("DIR"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("svg")
                        .value_parser(["svg", "png"]),
                )
                .arg(
                    Arg::new("metric")
                        .long("metric")
                        .default_value("all")
                        .value_parser(["all", "rate", "quantity", "cost"]),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored rows for inconsistencies"))
}
