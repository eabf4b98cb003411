// Copyright (c) 2025 Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Aggregation over a date window, feeding the report and chart consumers.

use crate::error::Result;
use crate::models::{CategoryKind, CategoryTotal, DateRange, TypeTotals};
use rusqlite::{params, Connection};

/// Sum amounts per category over `range`, largest total first. Categories
/// with no matching records are omitted rather than reported as zero.
pub fn sum_by_category(conn: &Connection, range: &DateRange) -> Result<Vec<CategoryTotal>> {
    let (start, end) = range.epoch_bounds();
    let mut stmt = conn.prepare(
        "SELECT c.name, SUM(r.amount) AS total \
         FROM record r JOIN category c ON r.cid = c.id \
         WHERE r.timestamp >= ?1 AND r.timestamp <= ?2 \
         GROUP BY c.id ORDER BY total DESC",
    )?;
    let rows = stmt.query_map(params![start, end], |r| {
        Ok(CategoryTotal {
            category: r.get(0)?,
            total: r.get(1)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

/// Total income and total expense over `range`. An empty window yields zeros.
pub fn sum_by_type(conn: &Connection, range: &DateRange) -> Result<TypeTotals> {
    let (start, end) = range.epoch_bounds();
    Ok(TypeTotals {
        income: sum_for_kind(conn, CategoryKind::Income, start, end)?,
        expense: sum_for_kind(conn, CategoryKind::Expense, start, end)?,
    })
}

fn sum_for_kind(conn: &Connection, kind: CategoryKind, start: i64, end: i64) -> Result<f64> {
    let total: f64 = conn.query_row(
        "SELECT IFNULL(SUM(r.amount), 0) \
         FROM record r JOIN category c ON r.cid = c.id \
         WHERE c.type = ?1 AND r.timestamp >= ?2 AND r.timestamp <= ?3",
        params![kind, start, end],
        |r| r.get(0),
    )?;
    Ok(total)
}
