// Copyright (c) 2025 Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("app.pocketbook", "Pocketbook", "pocketbook"));

/// Seed categories inserted once, when the category table is first created empty.
pub const DEFAULT_EXPENSE_CATEGORIES: [&str; 5] = [
    "Dining",
    "Transport",
    "Groceries",
    "Entertainment",
    "Housing & Utilities",
];
pub const DEFAULT_INCOME_CATEGORIES: [&str; 3] = ["Salary", "Bonus", "Investments"];

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("pocketbook.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    open_at(db_path()?)
}

/// Open (or create) the ledger database at `path` and ensure the schema exists.
/// Safe to call on a pre-existing database; seeding never runs twice.
pub fn open_at(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();
    let conn =
        Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

/// In-memory ledger, used by the test suites.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("Open in-memory DB")?;
    init_schema(&conn)?;
    Ok(conn)
}

fn init_schema(conn: &Connection) -> Result<()> {
    // The foreign_keys pragma is per-connection in SQLite, so it runs on every
    // open, not just the first.
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS category(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        type INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS record(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        amount REAL NOT NULL,
        timestamp INTEGER NOT NULL,
        note TEXT,
        cid INTEGER NOT NULL,
        FOREIGN KEY (cid) REFERENCES category(id) ON DELETE CASCADE
    );
    CREATE INDEX IF NOT EXISTS idx_record_timestamp ON record(timestamp);
    "#,
    )
    .context("Create ledger schema")?;
    seed_defaults(conn)?;
    Ok(())
}

fn seed_defaults(conn: &Connection) -> Result<()> {
    let count: i64 = conn
        .query_row("SELECT count(*) FROM category", [], |r| r.get(0))
        .context("Count categories")?;
    if count > 0 {
        return Ok(());
    }
    let mut stmt = conn.prepare("INSERT INTO category(name, type) VALUES (?1, ?2)")?;
    for name in DEFAULT_EXPENSE_CATEGORIES {
        stmt.execute(rusqlite::params![name, 0])?;
    }
    for name in DEFAULT_INCOME_CATEGORIES {
        stmt.execute(rusqlite::params![name, 1])?;
    }
    Ok(())
}
