// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::{Error, Result};
use crate::models::Transaction;
use crate::store::LedgerStore;
use tracing::{debug, warn};

/// Ordered transaction list backed by a [`LedgerStore`].
///
/// Every mutation is saved before it returns; when the save fails the
/// in-memory rows are rolled back so they never run ahead of the file.
#[derive(Debug)]
pub struct Ledger {
    store: LedgerStore,
    rows: Vec<Transaction>,
}

impl Ledger {
    pub fn open(store: LedgerStore) -> Result<Self> {
        let rows = store.load()?;
        Ok(Self { store, rows })
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn all(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.rows.get(index)
    }

    pub fn append(&mut self, record: Transaction) -> Result<()> {
        self.rows.push(record);
        if let Err(e) = self.store.save(&self.rows) {
            warn!(error = %e, "append not persisted, rolling back");
            self.rows.pop();
            return Err(e);
        }
        debug!(index = self.rows.len() - 1, "row appended");
        Ok(())
    }

    /// Remove the row at `index`; later rows shift down by one.
    pub fn delete_at(&mut self, index: usize) -> Result<Transaction> {
        if index >= self.rows.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        let removed = self.rows.remove(index);
        if let Err(e) = self.store.save(&self.rows) {
            warn!(error = %e, index, "delete not persisted, rolling back");
            self.rows.insert(index, removed);
            return Err(e);
        }
        debug!(index, "row deleted");
        Ok(removed)
    }

    /// Write the current rows out unchanged (used to create the file).
    pub fn persist(&self) -> Result<()> {
        self.store.save(&self.rows)
    }
}
