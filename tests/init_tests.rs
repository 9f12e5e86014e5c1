// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use goldledger::commands::init;
use goldledger::session::Session;
use goldledger::store::{LedgerStore, MissingFile};
use tempfile::tempdir;

const HEADER: &str = "Purchased_Date,Gram_Per_CHF,Quantity_Purchased,Cost,Type";

#[test]
fn init_writes_header_only_ledger() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gold_data.csv");
    let session = Session::open(LedgerStore::new(&path)).unwrap();
    assert!(init::handle(&session).unwrap());
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().collect::<Vec<_>>(), vec![HEADER]);
}

#[test]
fn init_leaves_existing_ledger_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gold_data.csv");
    let existing = format!("{}\n2024-01-01,60,10,600,Purchase\n", HEADER);
    std::fs::write(&path, &existing).unwrap();

    let session = Session::open(LedgerStore::new(&path)).unwrap();
    assert!(!init::handle(&session).unwrap());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), existing);
}

#[test]
fn init_with_seed_policy_writes_seed_row() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gold_data.csv");
    let store = LedgerStore::new(&path).with_missing(MissingFile::Seed);
    let session = Session::open(store).unwrap();
    assert!(init::handle(&session).unwrap());

    let reloaded = LedgerStore::new(&path).load().unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].rate, 67.55075);
    assert_eq!(reloaded[0].cost, 2702.3);
}
