// Copyright (c) 2025 Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, ArgGroup, Command};

pub fn build_cli() -> Command {
    Command::new("pocketbook")
        .version(crate_version!())
        .about("Personal income/expense ledger with categories, filters, and reports")
        .subcommand(Command::new("init").about("Initialize the database and print its location"))
        .subcommand(category_cmd())
        .subcommand(record_cmd())
        .subcommand(report_cmd())
        .subcommand(export_cmd())
}

fn kind_arg(required: bool) -> Arg {
    Arg::new("kind")
        .long("kind")
        .value_parser(["expense", "income"])
        .required(required)
        .help("Category kind")
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

fn category_cmd() -> Command {
    Command::new("category")
        .about("Manage income/expense categories")
        .subcommand(
            Command::new("add")
                .about("Add a category")
                .arg(Arg::new("name").required(true).help("Category name"))
                .arg(kind_arg(true)),
        )
        .subcommand(
            Command::new("list").about("List categories").arg(
                Arg::new("kind")
                    .long("kind")
                    .value_parser(["expense", "income", "all"])
                    .default_value("all")
                    .help("Restrict to one kind"),
            ),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete a category, choosing what happens to its records")
                .arg(
                    Arg::new("id")
                        .required(true)
                        .value_parser(clap::value_parser!(i64))
                        .help("Category id"),
                )
                .arg(kind_arg(true))
                .arg(
                    Arg::new("keep-records")
                        .long("keep-records")
                        .action(ArgAction::SetTrue)
                        .help("Reassign its records to 'Uncategorized'"),
                )
                .arg(
                    Arg::new("purge")
                        .long("purge")
                        .action(ArgAction::SetTrue)
                        .help("Delete its records along with it"),
                )
                .group(
                    ArgGroup::new("policy")
                        .args(["keep-records", "purge"])
                        .required(true),
                ),
        )
}

fn record_cmd() -> Command {
    Command::new("record")
        .about("Manage ledger records")
        .subcommand(
            Command::new("add")
                .about("Record a transaction")
                .arg(Arg::new("amount").required(true).help("Non-negative amount"))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .required(true)
                        .help("Date YYYY-MM-DD"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .required(true)
                        .value_parser(clap::value_parser!(i64))
                        .help("Owning category id"),
                )
                .arg(Arg::new("note").long("note").help("Free-text note")),
        )
        .subcommand(
            Command::new("edit")
                .about("Edit fields of a record")
                .arg(
                    Arg::new("id")
                        .required(true)
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(Arg::new("amount").long("amount").help("New amount"))
                .arg(Arg::new("date").long("date").help("New date YYYY-MM-DD"))
                .arg(Arg::new("note").long("note").help("New note"))
                .arg(
                    Arg::new("clear-note")
                        .long("clear-note")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("note")
                        .help("Remove the note"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .value_parser(clap::value_parser!(i64))
                        .help("New owning category id"),
                ),
        )
        .subcommand(
            Command::new("rm").about("Delete a record").arg(
                Arg::new("id")
                    .required(true)
                    .value_parser(clap::value_parser!(i64)),
            ),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List records matching every given filter")
                .arg(Arg::new("from").long("from").help("Start date YYYY-MM-DD"))
                .arg(Arg::new("to").long("to").help("End date YYYY-MM-DD"))
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .value_parser(["expense", "income", "all"])
                        .default_value("all")
                        .help("Restrict to one kind"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .value_parser(clap::value_parser!(i64))
                        .help("Restrict to one category id"),
                )
                .arg(
                    Arg::new("note")
                        .long("note")
                        .help("Substring to search in notes"),
                ),
        ))
}

fn report_cmd() -> Command {
    let range = |cmd: Command| {
        cmd.arg(
            Arg::new("from")
                .long("from")
                .required(true)
                .help("Start date YYYY-MM-DD"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .required(true)
                .help("End date YYYY-MM-DD"),
        )
    };
    Command::new("report")
        .about("Summaries over a date range")
        .subcommand(json_flags(range(
            Command::new("by-category").about("Totals per category, largest first"),
        )))
        .subcommand(json_flags(range(
            Command::new("totals").about("Total income, expense, and balance"),
        )))
}

fn export_cmd() -> Command {
    Command::new("export")
        .about("Export ledger data to a file")
        .subcommand(
            Command::new("records")
                .about("Export records with their category names")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .required(true)
                        .help("csv or json"),
                )
                .arg(Arg::new("out").long("out").required(true).help("Output file"))
                .arg(Arg::new("from").long("from").help("Start date YYYY-MM-DD"))
                .arg(Arg::new("to").long("to").help("End date YYYY-MM-DD")),
        )
}
