// Copyright (c) 2025 Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a category classifies money going out or coming in.
///
/// Stored in the `category.type` column as 0 (expense) or 1 (income).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Expense,
    Income,
}

impl CategoryKind {
    pub fn as_i64(self) -> i64 {
        match self {
            CategoryKind::Expense => 0,
            CategoryKind::Income => 1,
        }
    }

    pub fn from_i64(v: i64) -> Option<Self> {
        match v {
            0 => Some(CategoryKind::Expense),
            1 => Some(CategoryKind::Income),
            _ => None,
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "expense" => Some(CategoryKind::Expense),
            "income" => Some(CategoryKind::Income),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::Expense => write!(f, "expense"),
            CategoryKind::Income => write!(f, "income"),
        }
    }
}

impl ToSql for CategoryKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_i64()))
    }
}

impl FromSql for CategoryKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let v = i64::column_result(value)?;
        CategoryKind::from_i64(v).ok_or(FromSqlError::OutOfRange(v))
    }
}

/// Category selector for listings and record filters. `All` spans both kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Only(CategoryKind),
}

impl KindFilter {
    pub fn from_name(s: &str) -> Option<Self> {
        if s == "all" {
            Some(KindFilter::All)
        } else {
            CategoryKind::from_name(s).map(KindFilter::Only)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub kind: CategoryKind,
}

/// A single dated transaction. `amount` is a non-negative magnitude; its sign
/// is implied by the owning category's kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub amount: f64,
    pub timestamp: i64,
    pub note: Option<String>,
    pub category_id: i64,
}

/// A record joined with the name of its owning category, as listings and
/// exports consume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRow {
    pub id: i64,
    pub amount: f64,
    pub timestamp: i64,
    pub note: Option<String>,
    pub category: String,
}

/// Partial update of a record. `None` leaves the field untouched; the outer
/// `Some` on `note` distinguishes "set" (inner `Some`) from "clear" (inner
/// `None`).
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub amount: Option<f64>,
    pub timestamp: Option<i64>,
    pub note: Option<Option<String>>,
    pub category_id: Option<i64>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.timestamp.is_none()
            && self.note.is_none()
            && self.category_id.is_none()
    }
}

/// Inclusive day range for aggregation, start-of-day to end-of-day in UTC.
#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Epoch-second bounds: 00:00:00 of `start` through 23:59:59 of `end`.
    pub fn epoch_bounds(&self) -> (i64, i64) {
        (
            crate::utils::day_start_utc(self.start),
            crate::utils::day_end_utc(self.end),
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TypeTotals {
    pub income: f64,
    pub expense: f64,
}
