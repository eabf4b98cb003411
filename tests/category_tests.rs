// Copyright (c) 2025 Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketbook::categories::{self, UNCATEGORIZED};
use pocketbook::db;
use pocketbook::error::LedgerError;
use pocketbook::models::CategoryKind;
use pocketbook::records;
use rusqlite::Connection;

fn setup() -> Connection {
    db::open_in_memory().unwrap()
}

#[test]
fn add_rejects_duplicate_within_kind_only() {
    let conn = setup();
    categories::add(&conn, "Books", CategoryKind::Expense).unwrap();

    let err = categories::add(&conn, "Books", CategoryKind::Expense).unwrap_err();
    assert!(matches!(err, LedgerError::DuplicateCategory { .. }));

    // Same name under the other kind is a different bucket.
    categories::add(&conn, "Books", CategoryKind::Income).unwrap();
}

#[test]
fn add_trims_whitespace_before_matching() {
    let conn = setup();
    categories::add(&conn, "  Books  ", CategoryKind::Expense).unwrap();
    let err = categories::add(&conn, "Books", CategoryKind::Expense).unwrap_err();
    assert!(matches!(err, LedgerError::DuplicateCategory { .. }));
}

#[test]
fn add_rejects_blank_name() {
    let conn = setup();
    let err = categories::add(&conn, "   ", CategoryKind::Expense).unwrap_err();
    assert!(matches!(err, LedgerError::EmptyCategoryName));
}

#[test]
fn resolve_uncategorized_is_idempotent_per_kind() {
    let conn = setup();
    let a = categories::resolve_uncategorized(&conn, CategoryKind::Expense).unwrap();
    let b = categories::resolve_uncategorized(&conn, CategoryKind::Expense).unwrap();
    assert_eq!(a, b);

    let income = categories::resolve_uncategorized(&conn, CategoryKind::Income).unwrap();
    assert_ne!(a, income);

    let cat = categories::get(&conn, a).unwrap();
    assert_eq!(cat.name, UNCATEGORIZED);
    assert_eq!(cat.kind, CategoryKind::Expense);
}

#[test]
fn sentinel_is_never_deletable() {
    let mut conn = setup();
    let id = categories::resolve_uncategorized(&conn, CategoryKind::Income).unwrap();

    for keep in [true, false] {
        let err = categories::remove(&mut conn, id, CategoryKind::Income, keep).unwrap_err();
        assert!(matches!(err, LedgerError::SentinelCategory));
        assert!(categories::get(&conn, id).is_ok());
    }
}

#[test]
fn remove_missing_category_reports_not_found() {
    let mut conn = setup();
    let err = categories::remove(&mut conn, 9999, CategoryKind::Expense, true).unwrap_err();
    assert!(matches!(err, LedgerError::CategoryNotFound(9999)));
}

#[test]
fn remove_keeping_records_reassigns_them_to_sentinel() {
    let mut conn = setup();
    let doomed = categories::add(&conn, "Gadgets", CategoryKind::Expense).unwrap();
    let other = categories::add(&conn, "Garden", CategoryKind::Expense).unwrap();
    let r1 = records::insert(&conn, 10.0, 1_700_000_000, Some("cable"), doomed).unwrap();
    let r2 = records::insert(&conn, 20.0, 1_700_000_100, None, doomed).unwrap();
    let r3 = records::insert(&conn, 30.0, 1_700_000_200, None, other).unwrap();

    categories::remove(&mut conn, doomed, CategoryKind::Expense, true).unwrap();

    let err = categories::get(&conn, doomed).unwrap_err();
    assert!(matches!(err, LedgerError::CategoryNotFound(_)));

    let sentinel = categories::resolve_uncategorized(&conn, CategoryKind::Expense).unwrap();
    assert_eq!(records::get(&conn, r1).unwrap().category_id, sentinel);
    assert_eq!(records::get(&conn, r2).unwrap().category_id, sentinel);
    assert_eq!(records::get(&conn, r3).unwrap().category_id, other);

    let orphans: i64 = conn
        .query_row("SELECT count(*) FROM record WHERE cid = ?1", [doomed], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(orphans, 0);
}

#[test]
fn remove_purging_records_deletes_them_too() {
    let mut conn = setup();
    let doomed = categories::add(&conn, "Gadgets", CategoryKind::Expense).unwrap();
    let other = categories::add(&conn, "Garden", CategoryKind::Expense).unwrap();
    let r1 = records::insert(&conn, 10.0, 1_700_000_000, None, doomed).unwrap();
    let r2 = records::insert(&conn, 30.0, 1_700_000_200, None, other).unwrap();

    categories::remove(&mut conn, doomed, CategoryKind::Expense, false).unwrap();

    assert!(matches!(
        categories::get(&conn, doomed).unwrap_err(),
        LedgerError::CategoryNotFound(_)
    ));
    assert!(matches!(
        records::get(&conn, r1).unwrap_err(),
        LedgerError::RecordNotFound(_)
    ));
    assert!(records::get(&conn, r2).is_ok());
}

#[test]
fn failed_reassignment_rolls_back_completely() {
    let mut conn = setup();
    let doomed = categories::add(&conn, "Gadgets", CategoryKind::Expense).unwrap();
    let r1 = records::insert(&conn, 10.0, 1_700_000_000, None, doomed).unwrap();

    // Force the delete step inside the transaction to fail.
    conn.execute_batch(
        "CREATE TRIGGER block_category_delete BEFORE DELETE ON category \
         BEGIN SELECT RAISE(ABORT, 'delete blocked'); END;",
    )
    .unwrap();

    let err = categories::remove(&mut conn, doomed, CategoryKind::Expense, true).unwrap_err();
    assert!(matches!(err, LedgerError::Sqlite(_)));

    // Pre-call state: category present, record still owned by it, and the
    // sentinel created mid-transaction rolled back with everything else.
    assert!(categories::get(&conn, doomed).is_ok());
    assert_eq!(records::get(&conn, r1).unwrap().category_id, doomed);
    let sentinels: i64 = conn
        .query_row(
            "SELECT count(*) FROM category WHERE name = ?1 AND type = 0",
            [UNCATEGORIZED],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(sentinels, 0);

    // With the failure gone the same call succeeds.
    conn.execute_batch("DROP TRIGGER block_category_delete").unwrap();
    categories::remove(&mut conn, doomed, CategoryKind::Expense, true).unwrap();
    let sentinel = categories::resolve_uncategorized(&conn, CategoryKind::Expense).unwrap();
    assert_eq!(records::get(&conn, r1).unwrap().category_id, sentinel);
}

#[test]
fn list_orders_by_insertion() {
    let conn = setup();
    let a = categories::add(&conn, "Aaa", CategoryKind::Expense).unwrap();
    let b = categories::add(&conn, "Bbb", CategoryKind::Expense).unwrap();
    let listed = categories::list(&conn, pocketbook::models::KindFilter::All).unwrap();
    let pos_a = listed.iter().position(|c| c.id == a).unwrap();
    let pos_b = listed.iter().position(|c| c.id == b).unwrap();
    assert!(pos_a < pos_b);
}
