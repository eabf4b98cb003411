// Copyright (c) 2025 Pocketbook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketbook::categories;
use pocketbook::db;
use pocketbook::models::{CategoryKind, DateRange};
use pocketbook::records;
use pocketbook::reports;
use pocketbook::utils::{day_start_utc, parse_date};
use rusqlite::Connection;

fn setup() -> (Connection, i64, i64) {
    let conn = db::open_in_memory().unwrap();
    let wages = categories::add(&conn, "Wages", CategoryKind::Income).unwrap();
    let lunch = categories::add(&conn, "Lunch", CategoryKind::Expense).unwrap();

    let d = |s: &str| day_start_utc(parse_date(s).unwrap());
    records::insert(&conn, 100.0, d("2025-05-01"), None, wages).unwrap();
    records::insert(&conn, 40.0, d("2025-05-02"), None, lunch).unwrap();
    records::insert(&conn, 10.0, d("2025-05-03"), None, lunch).unwrap();

    (conn, wages, lunch)
}

fn may_2025() -> DateRange {
    DateRange {
        start: parse_date("2025-05-01").unwrap(),
        end: parse_date("2025-05-31").unwrap(),
    }
}

#[test]
fn totals_split_income_and_expense() {
    let (conn, _, _) = setup();
    let t = reports::sum_by_type(&conn, &may_2025()).unwrap();
    assert_eq!(t.income, 100.0);
    assert_eq!(t.expense, 50.0);
    // Balance is the caller's subtraction.
    assert_eq!(t.income - t.expense, 50.0);
}

#[test]
fn totals_outside_range_are_zero_not_error() {
    let (conn, _, _) = setup();
    let range = DateRange {
        start: parse_date("2030-01-01").unwrap(),
        end: parse_date("2030-12-31").unwrap(),
    };
    let t = reports::sum_by_type(&conn, &range).unwrap();
    assert_eq!(t.income, 0.0);
    assert_eq!(t.expense, 0.0);
    assert!(reports::sum_by_category(&conn, &range).unwrap().is_empty());
}

#[test]
fn by_category_sums_and_sorts_descending() {
    let (conn, _, _) = setup();
    let rows = reports::sum_by_category(&conn, &may_2025()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].category, "Wages");
    assert_eq!(rows[0].total, 100.0);
    assert_eq!(rows[1].category, "Lunch");
    assert_eq!(rows[1].total, 50.0);
}

#[test]
fn by_category_omits_categories_without_matching_records() {
    let (conn, _, lunch) = setup();
    // A category with no records at all, and one whose only record falls
    // outside the range, must both be absent.
    categories::add(&conn, "Travel", CategoryKind::Expense).unwrap();
    records::insert(
        &conn,
        99.0,
        day_start_utc(parse_date("2025-06-15").unwrap()),
        None,
        lunch,
    )
    .unwrap();

    let rows = reports::sum_by_category(&conn, &may_2025()).unwrap();
    assert!(rows.iter().all(|r| r.category != "Travel"));
    let lunch_total = rows.iter().find(|r| r.category == "Lunch").unwrap();
    assert_eq!(lunch_total.total, 50.0);
}

#[test]
fn range_edges_are_inclusive() {
    let (conn, wages, _) = setup();
    records::insert(
        &conn,
        7.0,
        day_start_utc(parse_date("2025-05-31").unwrap()) + 86_399,
        None,
        wages,
    )
    .unwrap();
    let t = reports::sum_by_type(&conn, &may_2025()).unwrap();
    assert_eq!(t.income, 107.0);
}
