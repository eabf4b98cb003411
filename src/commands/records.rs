// Copyright (c) 2025 Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filter::RecordFilter;
use crate::models::{KindFilter, RecordPatch};
use crate::records;
use crate::utils::{
    day_start_utc, fmt_amount, format_timestamp, maybe_print_json, parse_amount, parse_date,
    pretty_table,
};
use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            records::delete(conn, id)?;
            println!("Removed record {}", id);
        }
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let note = sub.get_one::<String>("note").map(|s| s.as_str());
    let category_id = *sub.get_one::<i64>("category").unwrap();

    let id = records::insert(conn, amount, day_start_utc(date), note, category_id)?;
    println!(
        "Recorded {} on {} (category {}, record {})",
        fmt_amount(amount),
        date,
        category_id,
        id
    );
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut patch = RecordPatch::default();
    if let Some(amount) = sub.get_one::<String>("amount") {
        patch.amount = Some(parse_amount(amount)?);
    }
    if let Some(date) = sub.get_one::<String>("date") {
        patch.timestamp = Some(day_start_utc(parse_date(date)?));
    }
    if sub.get_flag("clear-note") {
        patch.note = Some(None);
    } else if let Some(note) = sub.get_one::<String>("note") {
        patch.note = Some(Some(note.clone()));
    }
    if let Some(cid) = sub.get_one::<i64>("category") {
        patch.category_id = Some(*cid);
    }
    records::update(conn, id, &patch)?;
    println!("Updated record {}", id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter = filter_from_matches(sub)?;
    let data = records::list(conn, &filter)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    fmt_amount(r.amount),
                    format_timestamp(r.timestamp),
                    r.note.clone().unwrap_or_default(),
                    r.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Amount", "Time", "Note", "Category"], rows)
        );
    }
    Ok(())
}

pub fn filter_from_matches(sub: &clap::ArgMatches) -> Result<RecordFilter> {
    let mut filter = RecordFilter::default();
    if let Some(from) = sub.get_one::<String>("from") {
        filter.start = Some(parse_date(from)?);
    }
    if let Some(to) = sub.get_one::<String>("to") {
        filter.end = Some(parse_date(to)?);
    }
    if let Some(kind) = sub.get_one::<String>("kind") {
        filter.kind = KindFilter::from_name(kind).context("Invalid kind")?;
    }
    if let Some(cid) = sub.get_one::<i64>("category") {
        filter.category_id = Some(*cid);
    }
    if let Some(note) = sub.get_one::<String>("note") {
        filter.note = Some(note.clone());
    }
    Ok(filter)
}
