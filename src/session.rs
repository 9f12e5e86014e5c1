// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::Result;
use crate::ledger::Ledger;
use crate::models::{Kind, MarketParams, Transaction};
use crate::stats::{self, Statistics};
use crate::store::LedgerStore;
use chrono::NaiveDate;
use tracing::info;

/// State for one user session: the loaded ledger plus the market inputs.
/// Built once per invocation and handed to every command handler.
#[derive(Debug)]
pub struct Session {
    ledger: Ledger,
    market: MarketParams,
}

impl Session {
    pub fn open(store: LedgerStore) -> Result<Self> {
        Ok(Self {
            ledger: Ledger::open(store)?,
            market: MarketParams::default(),
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn market(&self) -> MarketParams {
        self.market
    }

    pub fn set_market(&mut self, market: MarketParams) {
        self.market = market;
    }

    pub fn add_purchase(&mut self, date: NaiveDate, rate: f64, quantity: f64) -> Result<&Transaction> {
        self.record(Transaction::new(date, rate, quantity, Kind::Purchase))
    }

    pub fn add_sale(&mut self, date: NaiveDate, rate: f64, quantity: f64) -> Result<&Transaction> {
        self.record(Transaction::new(date, rate, quantity, Kind::Sale))
    }

    fn record(&mut self, tx: Transaction) -> Result<&Transaction> {
        info!(kind = %tx.kind, date = %tx.date, rate = tx.rate, quantity = tx.quantity, "recording");
        self.ledger.append(tx)?;
        let last = self.ledger.len() - 1;
        Ok(&self.ledger.all()[last])
    }

    pub fn delete_row(&mut self, index: usize) -> Result<Transaction> {
        let removed = self.ledger.delete_at(index)?;
        info!(index, kind = %removed.kind, date = %removed.date, "deleted");
        Ok(removed)
    }

    pub fn statistics(&self) -> Statistics {
        stats::compute_with(self.ledger.all(), self.market)
    }
}
