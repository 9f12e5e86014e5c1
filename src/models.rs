// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    Purchase,
    Sale,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Purchase => f.write_str("Purchase"),
            Kind::Sale => f.write_str("Sale"),
        }
    }
}

/// One ledger row. Field names on disk follow the historical CSV header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Purchased_Date")]
    pub date: NaiveDate,
    /// CHF per gram.
    #[serde(rename = "Gram_Per_CHF")]
    pub rate: f64,
    /// Grams.
    #[serde(rename = "Quantity_Purchased")]
    pub quantity: f64,
    /// `rate * quantity` at creation, stored as is afterwards.
    #[serde(rename = "Cost")]
    pub cost: f64,
    #[serde(rename = "Type")]
    pub kind: Kind,
}

impl Transaction {
    pub fn new(date: NaiveDate, rate: f64, quantity: f64, kind: Kind) -> Self {
        Self {
            date,
            rate,
            quantity,
            cost: rate * quantity,
            kind,
        }
    }

    pub fn purchase(date: NaiveDate, rate: f64, quantity: f64) -> Self {
        Self::new(date, rate, quantity, Kind::Purchase)
    }

    pub fn sale(date: NaiveDate, rate: f64, quantity: f64) -> Self {
        Self::new(date, rate, quantity, Kind::Sale)
    }

    pub fn is_purchase(&self) -> bool {
        self.kind == Kind::Purchase
    }
}

/// Session-scoped market inputs; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketParams {
    pub current_rate: f64,
    pub target_profit_per_gram: f64,
}

impl MarketParams {
    pub fn new(current_rate: f64, target_profit_per_gram: f64) -> Self {
        Self {
            current_rate,
            target_profit_per_gram,
        }
    }
}
