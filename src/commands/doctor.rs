// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use crate::session::Session;
use crate::utils::pretty_table;
use anyhow::Result;

/// Half a centime.
const COST_TOLERANCE: f64 = 0.005;

#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub index: usize,
    pub issue: &'static str,
    pub detail: String,
}

/// Rows are never rewritten; this only reports.
pub fn check(rows: &[Transaction]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (index, t) in rows.iter().enumerate() {
        let expected = t.rate * t.quantity;
        if (t.cost - expected).abs() > COST_TOLERANCE {
            issues.push(Issue {
                index,
                issue: "cost_mismatch",
                detail: format!("cost {} but rate x quantity = {}", t.cost, expected),
            });
        }
        if t.rate < 0.0 || t.quantity < 0.0 {
            issues.push(Issue {
                index,
                issue: "negative_value",
                detail: format!("rate {} quantity {}", t.rate, t.quantity),
            });
        }
        if t.quantity == 0.0 {
            issues.push(Issue {
                index,
                issue: "zero_quantity",
                detail: format!("{} on {}", t.kind, t.date),
            });
        }
    }
    issues
}

pub fn handle(session: &Session) -> Result<()> {
    let issues = check(session.ledger().all());
    if issues.is_empty() {
        println!("doctor: no issues found");
    } else {
        let rows = issues
            .into_iter()
            .map(|i| vec![i.index.to_string(), i.issue.to_string(), i.detail])
            .collect();
        println!("{}", pretty_table(&["#", "Issue", "Detail"], rows));
    }
    Ok(())
}
