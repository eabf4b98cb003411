// Copyright (c) 2025 Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filter::RecordFilter;
use crate::records;
use crate::utils::{fmt_amount, format_timestamp, parse_date};
use anyhow::{bail, Result};
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("records", sub)) => export_records(conn, sub),
        _ => Ok(()),
    }
}

fn export_records(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut filter = RecordFilter::default();
    if let Some(from) = sub.get_one::<String>("from") {
        filter.start = Some(parse_date(from)?);
    }
    if let Some(to) = sub.get_one::<String>("to") {
        filter.end = Some(parse_date(to)?);
    }
    let rows = records::list(conn, &filter)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "amount", "time", "note", "category"])?;
            for r in &rows {
                wtr.write_record([
                    r.id.to_string(),
                    fmt_amount(r.amount),
                    format_timestamp(r.timestamp),
                    r.note.clone().unwrap_or_default(),
                    r.category.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<serde_json::Value> = rows
                .iter()
                .map(|r| {
                    json!({
                        "id": r.id,
                        "amount": r.amount,
                        "time": format_timestamp(r.timestamp),
                        "note": r.note,
                        "category": r.category,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            bail!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported {} records to {}", rows.len(), out);
    Ok(())
}
