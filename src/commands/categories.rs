// Copyright (c) 2025 Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::models::{CategoryKind, KindFilter};
use crate::utils::pretty_table;
use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let kind = parse_kind(sub)?;
            let id = categories::add(conn, name, kind)?;
            println!("Added {} category '{}' (id {})", kind, name.trim(), id);
        }
        Some(("list", sub)) => {
            let filter = KindFilter::from_name(sub.get_one::<String>("kind").unwrap())
                .context("Invalid kind")?;
            let rows: Vec<Vec<String>> = categories::list(conn, filter)?
                .into_iter()
                .map(|c| vec![c.id.to_string(), c.name, c.kind.to_string()])
                .collect();
            println!("{}", pretty_table(&["ID", "Name", "Kind"], rows));
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let kind = parse_kind(sub)?;
            let keep_records = sub.get_flag("keep-records");
            categories::remove(conn, id, kind, keep_records)?;
            if keep_records {
                println!(
                    "Removed category {} (its records moved to '{}')",
                    id,
                    categories::UNCATEGORIZED
                );
            } else {
                println!("Removed category {} and its records", id);
            }
        }
        _ => {}
    }
    Ok(())
}

fn parse_kind(sub: &clap::ArgMatches) -> Result<CategoryKind> {
    CategoryKind::from_name(sub.get_one::<String>("kind").unwrap()).context("Invalid kind")
}
