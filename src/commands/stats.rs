// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::MarketParams;
use crate::session::Session;
use crate::utils::{maybe_print_json, parse_number, pretty_table};
use anyhow::Result;

pub fn market_from(sub: &clap::ArgMatches) -> Result<MarketParams> {
    let number = |name: &str| -> Result<f64> {
        match sub.get_one::<String>(name) {
            Some(s) => parse_number(s),
            None => Ok(0.0),
        }
    };
    Ok(MarketParams::new(
        number("current-rate")?,
        number("target-profit")?,
    ))
}

pub fn handle(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    session.set_market(market_from(sub)?);
    let stats = session.statistics();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &stats)? {
        let rows = stats
            .rows()
            .into_iter()
            .map(|(label, value)| vec![label.to_string(), value])
            .collect();
        println!(
            "{}",
            pretty_table(&["Outputs", "Values Regarding Gold"], rows)
        );
    }
    Ok(())
}
