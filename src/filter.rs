// Copyright (c) 2025 Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::KindFilter;
use crate::utils::{day_end_utc, day_start_utc};
use chrono::NaiveDate;
use rusqlite::types::Value;

/// Composable record filter. Every dimension is optional and independent; the
/// defaults match every record. Dimensions combine by intersection, and each
/// one binds its value rather than splicing it into the SQL text.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Inclusive lower bound, start of day (UTC).
    pub start: Option<NaiveDate>,
    /// Inclusive upper bound, end of day 23:59:59 (UTC).
    pub end: Option<NaiveDate>,
    /// Restrict to records whose owning category has this kind.
    pub kind: KindFilter,
    /// Restrict to one owning category.
    pub category_id: Option<i64>,
    /// Case-insensitive substring match against the note.
    pub note: Option<String>,
}

impl RecordFilter {
    /// Render the WHERE clause and its bound parameters, against the aliases
    /// `record r` / `category c` used by the listing query.
    pub(crate) fn sql_where(&self) -> (String, Vec<Value>) {
        let mut sql = String::from(" WHERE 1=1");
        let mut params: Vec<Value> = Vec::new();

        if let Some(start) = self.start {
            sql.push_str(" AND r.timestamp >= ?");
            params.push(Value::Integer(day_start_utc(start)));
        }
        if let Some(end) = self.end {
            sql.push_str(" AND r.timestamp <= ?");
            params.push(Value::Integer(day_end_utc(end)));
        }
        if let KindFilter::Only(kind) = self.kind {
            sql.push_str(" AND r.cid IN (SELECT id FROM category WHERE type = ?)");
            params.push(Value::Integer(kind.as_i64()));
        }
        if let Some(id) = self.category_id {
            sql.push_str(" AND r.cid = ?");
            params.push(Value::Integer(id));
        }
        if let Some(note) = &self.note {
            let needle = note.trim();
            if !needle.is_empty() {
                sql.push_str(" AND r.note LIKE ?");
                params.push(Value::Text(format!("%{}%", needle)));
            }
        }

        (sql, params)
    }
}
