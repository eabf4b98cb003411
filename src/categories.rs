// Copyright (c) 2025 Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Category registry: listing, creation, the per-kind "Uncategorized"
//! sentinel, and deletion with its two record-reconciliation policies.

use crate::error::{LedgerError, Result};
use crate::models::{Category, CategoryKind, KindFilter};
use rusqlite::{params, Connection, OptionalExtension};

/// Name of the reserved fallback category, one per kind. Created lazily,
/// never deletable.
pub const UNCATEGORIZED: &str = "Uncategorized";

pub fn list(conn: &Connection, filter: KindFilter) -> Result<Vec<Category>> {
    let mut out = Vec::new();
    match filter {
        KindFilter::All => {
            let mut stmt = conn.prepare("SELECT id, name, type FROM category ORDER BY id")?;
            let rows = stmt.query_map([], row_to_category)?;
            for row in rows {
                out.push(row?);
            }
        }
        KindFilter::Only(kind) => {
            let mut stmt =
                conn.prepare("SELECT id, name, type FROM category WHERE type = ?1 ORDER BY id")?;
            let rows = stmt.query_map(params![kind], row_to_category)?;
            for row in rows {
                out.push(row?);
            }
        }
    }
    Ok(out)
}

pub fn get(conn: &Connection, id: i64) -> Result<Category> {
    conn.query_row(
        "SELECT id, name, type FROM category WHERE id = ?1",
        params![id],
        row_to_category,
    )
    .optional()?
    .ok_or(LedgerError::CategoryNotFound(id))
}

/// Add a category. The name is trimmed and must be unique within its kind
/// (exact, case-sensitive match).
pub fn add(conn: &Connection, name: &str, kind: CategoryKind) -> Result<i64> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LedgerError::EmptyCategoryName);
    }
    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM category WHERE name = ?1 AND type = ?2",
            params![name, kind],
            |r| r.get(0),
        )
        .optional()?;
    if existing.is_some() {
        return Err(LedgerError::DuplicateCategory {
            name: name.to_string(),
            kind,
        });
    }
    conn.execute(
        "INSERT INTO category(name, type) VALUES (?1, ?2)",
        params![name, kind],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Id of the sentinel category for `kind`, creating it on first use.
/// Repeated calls return the same id.
pub fn resolve_uncategorized(conn: &Connection, kind: CategoryKind) -> Result<i64> {
    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM category WHERE name = ?1 AND type = ?2",
            params![UNCATEGORIZED, kind],
            |r| r.get(0),
        )
        .optional()?;
    if let Some(id) = existing {
        return Ok(id);
    }
    conn.execute(
        "INSERT INTO category(name, type) VALUES (?1, ?2)",
        params![UNCATEGORIZED, kind],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Delete a category, reconciling its records per `keep_records`.
///
/// With `keep_records` every owned record is reassigned to the kind's
/// sentinel and the category row is then removed, both inside one
/// transaction — a failure at any step rolls the whole operation back.
/// Without it, the foreign-key cascade removes the records along with the
/// category. The sentinel itself is never deletable.
pub fn remove(conn: &mut Connection, id: i64, kind: CategoryKind, keep_records: bool) -> Result<()> {
    let target = get(conn, id)?;
    if target.name == UNCATEGORIZED {
        return Err(LedgerError::SentinelCategory);
    }

    if !keep_records {
        conn.execute("DELETE FROM category WHERE id = ?1", params![id])?;
        return Ok(());
    }

    let tx = conn.transaction()?;
    let sentinel = resolve_uncategorized(&tx, kind)?;
    if sentinel == id {
        // Unreachable given the name check above; dropping the transaction
        // rolls back the sentinel insert.
        return Err(LedgerError::SentinelCategory);
    }
    tx.execute(
        "UPDATE record SET cid = ?1 WHERE cid = ?2",
        params![sentinel, id],
    )?;
    tx.execute("DELETE FROM category WHERE id = ?1", params![id])?;
    tx.commit()?;
    Ok(())
}

fn row_to_category(r: &rusqlite::Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: r.get(0)?,
        name: r.get(1)?,
        kind: r.get(2)?,
    })
}
