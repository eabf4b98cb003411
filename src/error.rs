// Copyright (c) 2025 Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::CategoryKind;
use thiserror::Error;

/// Failures surfaced by the ledger layer. Validation and not-found conditions
/// are recoverable; storage errors pass through transparently.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("category '{name}' already exists for {kind} entries")]
    DuplicateCategory { name: String, kind: CategoryKind },

    #[error("category name cannot be empty")]
    EmptyCategoryName,

    #[error("the 'Uncategorized' category is reserved and cannot be deleted")]
    SentinelCategory,

    #[error("amount cannot be negative (got {0})")]
    NegativeAmount(f64),

    #[error("no category with id {0}")]
    CategoryNotFound(i64),

    #[error("no record with id {0}")]
    RecordNotFound(i64),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
