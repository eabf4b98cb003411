// Copyright (c) 2025 Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::DateRange;
use crate::reports;
use crate::utils::{fmt_amount, maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("by-category", sub)) => by_category(conn, sub)?,
        Some(("totals", sub)) => totals(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn range_from_matches(sub: &clap::ArgMatches) -> Result<DateRange> {
    Ok(DateRange {
        start: parse_date(sub.get_one::<String>("from").unwrap())?,
        end: parse_date(sub.get_one::<String>("to").unwrap())?,
    })
}

fn by_category(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let range = range_from_matches(sub)?;
    let data = reports::sum_by_category(conn, &range)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| vec![t.category.clone(), fmt_amount(t.total)])
            .collect();
        println!("{}", pretty_table(&["Category", "Total"], rows));
    }
    Ok(())
}

fn totals(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let range = range_from_matches(sub)?;
    let t = reports::sum_by_type(conn, &range)?;
    // Balance is derived here at the presentation boundary, never stored.
    let balance = t.income - t.expense;
    if !maybe_print_json(json_flag, jsonl_flag, &t)? {
        let rows = vec![vec![
            fmt_amount(t.income),
            fmt_amount(t.expense),
            fmt_amount(balance),
        ]];
        println!("{}", pretty_table(&["Income", "Expense", "Balance"], rows));
    }
    Ok(())
}
