// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use goldledger::errors::Error;
use goldledger::models::{Kind, Transaction};
use goldledger::store::{LedgerStore, MissingFile, seed_transaction};
use tempfile::tempdir;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sample() -> Vec<Transaction> {
    vec![
        Transaction::purchase(d(2024, 8, 6), 67.55075, 40.0),
        Transaction::purchase(d(2024, 9, 1), 70.1, 12.5),
        Transaction::sale(d(2024, 10, 3), 74.0, 5.0),
    ]
}

#[test]
fn missing_file_loads_empty_by_default() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("gold_data.csv"));
    assert!(store.load().unwrap().is_empty());
    assert!(!store.exists());
}

#[test]
fn missing_file_with_seed_policy_loads_seed_row() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("gold_data.csv")).with_missing(MissingFile::Seed);
    let rows = store.load().unwrap();
    assert_eq!(rows, vec![seed_transaction()]);
    assert_eq!(rows[0].date, d(2024, 8, 6));
    assert_eq!(rows[0].cost, 2702.3);
    assert_eq!(rows[0].kind, Kind::Purchase);
    // loading never creates the file
    assert!(!store.exists());
}

#[test]
fn save_then_load_round_trips_in_order() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("gold_data.csv"));
    let rows = sample();
    store.save(&rows).unwrap();
    assert_eq!(store.load().unwrap(), rows);
}

#[test]
fn save_writes_header_in_fixed_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gold_data.csv");
    let store = LedgerStore::new(&path);
    store.save(&sample()).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Purchased_Date,Gram_Per_CHF,Quantity_Purchased,Cost,Type"
    );
    let first = lines.next().unwrap();
    assert!(first.starts_with("2024-08-06,67.55075,"));
    assert!(first.ends_with(",Purchase"));
    assert!(lines.last().unwrap().ends_with(",Sale"));
}

#[test]
fn empty_ledger_saves_header_only() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gold_data.csv");
    let store = LedgerStore::new(&path);
    store.save(&[]).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn zero_byte_file_loads_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gold_data.csv");
    std::fs::write(&path, "").unwrap();
    assert!(LedgerStore::new(&path).load().unwrap().is_empty());
}

#[test]
fn loads_externally_written_rows_without_recomputing_cost() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gold_data.csv");
    std::fs::write(
        &path,
        "Purchased_Date,Gram_Per_CHF,Quantity_Purchased,Cost,Type\n\
         2024-08-06,67.55075,40,2702.3,Purchase\n\
         2024-09-10,70,2,999,Sale\n",
    )
    .unwrap();
    let rows = LedgerStore::new(&path).load().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].quantity, 40.0);
    assert_eq!(rows[1].cost, 999.0);
    assert_eq!(rows[1].kind, Kind::Sale);
}

#[test]
fn non_numeric_rate_is_corrupt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gold_data.csv");
    std::fs::write(
        &path,
        "Purchased_Date,Gram_Per_CHF,Quantity_Purchased,Cost,Type\n2024-01-01,abc,10,600,Purchase\n",
    )
    .unwrap();
    let err = LedgerStore::new(&path).load().unwrap_err();
    assert!(matches!(err, Error::CorruptLedger { .. }), "{err}");
}

#[test]
fn wrong_column_count_is_corrupt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gold_data.csv");
    std::fs::write(
        &path,
        "Purchased_Date,Gram_Per_CHF,Quantity_Purchased,Cost,Type\n2024-01-01,60,10,600\n",
    )
    .unwrap();
    let err = LedgerStore::new(&path).load().unwrap_err();
    assert!(matches!(err, Error::CorruptLedger { .. }), "{err}");
}

#[test]
fn unknown_type_is_corrupt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gold_data.csv");
    std::fs::write(
        &path,
        "Purchased_Date,Gram_Per_CHF,Quantity_Purchased,Cost,Type\n2024-01-01,60,10,600,Gift\n",
    )
    .unwrap();
    let err = LedgerStore::new(&path).load().unwrap_err();
    assert!(matches!(err, Error::CorruptLedger { .. }), "{err}");
}

#[test]
fn unwritable_path_is_storage_unavailable() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("no_such_dir").join("gold_data.csv"));
    let err = store.save(&sample()).unwrap_err();
    assert!(matches!(err, Error::StorageUnavailable { .. }), "{err}");
}
