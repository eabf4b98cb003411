// Copyright (c) 2025 Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Record store: CRUD over dated transactions, each owned by exactly one
//! category.

use crate::error::{LedgerError, Result};
use crate::filter::RecordFilter;
use crate::models::{Record, RecordPatch, RecordRow};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

/// Insert a record. The amount is a non-negative magnitude and `category_id`
/// must reference an existing category; the schema's foreign key backs the
/// latter as a last resort.
pub fn insert(
    conn: &Connection,
    amount: f64,
    timestamp: i64,
    note: Option<&str>,
    category_id: i64,
) -> Result<i64> {
    if amount < 0.0 {
        return Err(LedgerError::NegativeAmount(amount));
    }
    ensure_category(conn, category_id)?;
    conn.execute(
        "INSERT INTO record(amount, timestamp, note, cid) VALUES (?1, ?2, ?3, ?4)",
        params![amount, timestamp, note, category_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get(conn: &Connection, id: i64) -> Result<Record> {
    conn.query_row(
        "SELECT id, amount, timestamp, note, cid FROM record WHERE id = ?1",
        params![id],
        |r| {
            Ok(Record {
                id: r.get(0)?,
                amount: r.get(1)?,
                timestamp: r.get(2)?,
                note: r.get(3)?,
                category_id: r.get(4)?,
            })
        },
    )
    .optional()?
    .ok_or(LedgerError::RecordNotFound(id))
}

/// Apply a partial update. Untouched fields keep their stored values; an
/// empty patch validates the id and changes nothing.
pub fn update(conn: &Connection, id: i64, patch: &RecordPatch) -> Result<()> {
    get(conn, id)?;
    if patch.is_empty() {
        return Ok(());
    }
    if let Some(amount) = patch.amount {
        if amount < 0.0 {
            return Err(LedgerError::NegativeAmount(amount));
        }
    }
    if let Some(cid) = patch.category_id {
        ensure_category(conn, cid)?;
    }

    let mut sets: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();
    if let Some(amount) = patch.amount {
        sets.push("amount = ?");
        values.push(Value::Real(amount));
    }
    if let Some(ts) = patch.timestamp {
        sets.push("timestamp = ?");
        values.push(Value::Integer(ts));
    }
    if let Some(note) = &patch.note {
        sets.push("note = ?");
        values.push(match note {
            Some(text) => Value::Text(text.clone()),
            None => Value::Null,
        });
    }
    if let Some(cid) = patch.category_id {
        sets.push("cid = ?");
        values.push(Value::Integer(cid));
    }
    let sql = format!("UPDATE record SET {} WHERE id = ?", sets.join(", "));
    values.push(Value::Integer(id));
    conn.execute(&sql, params_from_iter(values))?;
    Ok(())
}

/// Delete one record. No cascade effects.
pub fn delete(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM record WHERE id = ?1", params![id])?;
    if n == 0 {
        return Err(LedgerError::RecordNotFound(id));
    }
    Ok(())
}

/// List records matching `filter`, joined with their category name, in
/// insertion (id) order.
pub fn list(conn: &Connection, filter: &RecordFilter) -> Result<Vec<RecordRow>> {
    let (where_sql, values) = filter.sql_where();
    let sql = format!(
        "SELECT r.id, r.amount, r.timestamp, r.note, c.name \
         FROM record r JOIN category c ON r.cid = c.id{} ORDER BY r.id",
        where_sql
    );
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params_from_iter(values))?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(RecordRow {
            id: r.get(0)?,
            amount: r.get(1)?,
            timestamp: r.get(2)?,
            note: r.get(3)?,
            category: r.get(4)?,
        });
    }
    Ok(out)
}

fn ensure_category(conn: &Connection, id: i64) -> Result<()> {
    let exists: Option<i64> = conn
        .query_row(
            "SELECT id FROM category WHERE id = ?1",
            params![id],
            |r| r.get(0),
        )
        .optional()?;
    match exists {
        Some(_) => Ok(()),
        None => Err(LedgerError::CategoryNotFound(id)),
    }
}
