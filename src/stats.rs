// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{MarketParams, Transaction};
use crate::utils::fmt_float;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Sell,
    Keep,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Sell => f.write_str("SELL"),
            Decision::Keep => f.write_str("KEEP"),
        }
    }
}

/// Aggregates over the ledger. Quantity, spend and the current rate are
/// reported exactly; the other figures are rounded to 4 decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_quantity: f64,
    pub total_spent: f64,
    pub average_rate: f64,
    pub current_rate: f64,
    pub net_profit_per_gram: f64,
    pub total_profit: f64,
    pub total_after_sale: f64,
    pub decision: Decision,
}

pub const LABELS: [&str; 8] = [
    "Total Gold Quantity in Gram",
    "Total Money Spent in CHF",
    "Average Gram Price in CHF",
    "Current Gram Price in CHF",
    "Net Profit Per Gram in CHF",
    "Total Profit in CHF",
    "Total Money After Sold in CHF",
    "Decision",
];

/// Round to 4 decimals from the exact binary value, so 0.00035 (stored as
/// 0.000349999...) becomes 0.0003.
pub fn round4(v: f64) -> f64 {
    format!("{:.4}", v).parse().unwrap_or(v)
}

pub fn compute(rows: &[Transaction], current_rate: f64, target_profit_per_gram: f64) -> Statistics {
    let (purchases, sales): (Vec<&Transaction>, Vec<&Transaction>) =
        rows.iter().partition(|t| t.is_purchase());

    let total_quantity: f64 = purchases.iter().map(|t| t.quantity).sum();
    let total_spent: f64 = purchases.iter().map(|t| t.cost).sum();
    let total_after_sale: f64 = sales.iter().map(|t| t.cost).sum();

    let (average_rate, net_profit_per_gram) = if total_quantity != 0.0 {
        let avg = total_spent / total_quantity;
        (avg, current_rate - avg)
    } else {
        (0.0, 0.0)
    };
    let total_profit = total_quantity * net_profit_per_gram;

    let decision = if net_profit_per_gram > target_profit_per_gram {
        Decision::Sell
    } else {
        Decision::Keep
    };

    Statistics {
        total_quantity,
        total_spent,
        average_rate: round4(average_rate),
        current_rate,
        net_profit_per_gram: round4(net_profit_per_gram),
        total_profit: round4(total_profit),
        total_after_sale: round4(total_after_sale),
        decision,
    }
}

pub fn compute_with(rows: &[Transaction], market: MarketParams) -> Statistics {
    compute(rows, market.current_rate, market.target_profit_per_gram)
}

impl Statistics {
    /// `(label, value)` pairs in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let values = [
            fmt_float(self.total_quantity),
            fmt_float(self.total_spent),
            fmt_float(self.average_rate),
            fmt_float(self.current_rate),
            fmt_float(self.net_profit_per_gram),
            fmt_float(self.total_profit),
            fmt_float(self.total_after_sale),
            self.decision.to_string(),
        ];
        LABELS.into_iter().zip(values).collect()
    }
}
