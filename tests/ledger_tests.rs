// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use goldledger::errors::Error;
use goldledger::ledger::Ledger;
use goldledger::models::Transaction;
use goldledger::store::LedgerStore;
use tempfile::tempdir;

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

#[test]
fn append_is_persisted_as_last_row() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("gold_data.csv"));
    let mut ledger = Ledger::open(store.clone()).unwrap();
    ledger.append(Transaction::purchase(d(1), 60.0, 10.0)).unwrap();
    ledger.append(Transaction::sale(d(2), 70.0, 4.0)).unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.last().unwrap(), &Transaction::sale(d(2), 70.0, 4.0));
    assert_eq!(ledger.all(), reloaded.as_slice());
}

#[test]
fn append_accepts_zero_and_negative_values() {
    let dir = tempdir().unwrap();
    let mut ledger = Ledger::open(LedgerStore::new(dir.path().join("gold_data.csv"))).unwrap();
    ledger.append(Transaction::purchase(d(1), 0.0, 0.0)).unwrap();
    ledger.append(Transaction::purchase(d(2), -5.0, 3.0)).unwrap();
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.all()[1].cost, -15.0);
}

#[test]
fn delete_shifts_later_rows_down() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("gold_data.csv"));
    let mut ledger = Ledger::open(store.clone()).unwrap();
    for day in 1..=3 {
        ledger
            .append(Transaction::purchase(d(day), 60.0 + day as f64, 1.0))
            .unwrap();
    }
    let removed = ledger.delete_at(0).unwrap();
    assert_eq!(removed.date, d(1));
    assert_eq!(ledger.get(0).unwrap().date, d(2));
    assert_eq!(ledger.get(1).unwrap().date, d(3));
    assert_eq!(store.load().unwrap(), ledger.all());
}

#[test]
fn delete_out_of_range_leaves_ledger_unchanged() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("gold_data.csv"));
    let mut ledger = Ledger::open(store.clone()).unwrap();
    ledger.append(Transaction::purchase(d(1), 60.0, 10.0)).unwrap();
    let before = std::fs::read_to_string(store.path()).unwrap();

    let err = ledger.delete_at(1).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 1, len: 1 }));
    assert_eq!(ledger.len(), 1);
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
}

#[test]
fn delete_on_empty_ledger_is_out_of_range() {
    let dir = tempdir().unwrap();
    let mut ledger = Ledger::open(LedgerStore::new(dir.path().join("gold_data.csv"))).unwrap();
    assert!(matches!(
        ledger.delete_at(0),
        Err(Error::IndexOutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn failed_save_does_not_advance_ledger() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("missing").join("gold_data.csv"));
    let mut ledger = Ledger::open(store).unwrap();
    let err = ledger
        .append(Transaction::purchase(d(1), 60.0, 10.0))
        .unwrap_err();
    assert!(matches!(err, Error::StorageUnavailable { .. }));
    assert!(ledger.is_empty());
}

#[test]
fn failed_delete_save_restores_row() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("data");
    std::fs::create_dir(&sub).unwrap();
    let mut ledger = Ledger::open(LedgerStore::new(sub.join("gold_data.csv"))).unwrap();
    ledger.append(Transaction::purchase(d(1), 60.0, 10.0)).unwrap();
    ledger.append(Transaction::purchase(d(2), 61.0, 5.0)).unwrap();

    // Removing the directory makes the next save fail
    std::fs::remove_dir_all(&sub).unwrap();
    assert!(ledger.delete_at(0).is_err());
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.get(0).unwrap().date, d(1));
}
