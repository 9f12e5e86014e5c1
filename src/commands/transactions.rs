// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Kind;
use crate::session::Session;
use crate::utils::{fmt_chf, fmt_float, maybe_print_json, parse_date, parse_number, pretty_table, today};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Color};
use serde::Serialize;

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("buy", sub)) => add(session, sub, Kind::Purchase)?,
        Some(("sell", sub)) => add(session, sub, Kind::Sale)?,
        Some(("rm", sub)) => remove(session, sub)?,
        Some(("list", sub)) => list(session, sub)?,
        _ => {}
    }
    Ok(())
}

/// Date, rate and quantity from a `buy`/`sell` invocation.
pub fn entry_from(sub: &clap::ArgMatches) -> Result<(NaiveDate, f64, f64)> {
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today(),
    };
    let rate = parse_number(sub.get_one::<String>("rate").context("--rate is required")?)?;
    let quantity =
        parse_number(sub.get_one::<String>("quantity").context("--quantity is required")?)?;
    Ok((date, rate, quantity))
}

fn add(session: &mut Session, sub: &clap::ArgMatches, kind: Kind) -> Result<()> {
    let (date, rate, quantity) = entry_from(sub)?;
    let tx = match kind {
        Kind::Purchase => session.add_purchase(date, rate, quantity),
        Kind::Sale => session.add_sale(date, rate, quantity),
    }
    .with_context(|| format!("{} was not saved", kind))?;
    println!(
        "{} added: {} g at {} CHF/g on {} (cost {} CHF)",
        tx.kind,
        tx.quantity,
        tx.rate,
        tx.date,
        fmt_chf(tx.cost)
    );
    Ok(())
}

fn remove(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let index = *sub.get_one::<usize>("index").context("--index is required")?;
    let removed = session
        .delete_row(index)
        .with_context(|| format!("Row {} was not deleted", index))?;
    println!(
        "Deleted row {}: {} of {} g on {}",
        index, removed.kind, removed.quantity, removed.date
    );
    Ok(())
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(session);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No data.");
            return Ok(());
        }
        let mut table = pretty_table(
            &["#", "Date", "CHF/g", "Quantity (g)", "Cost (CHF)", "Type"],
            Vec::new(),
        );
        for r in &data {
            let color = match r.kind {
                Kind::Purchase => Color::Green,
                Kind::Sale => Color::Red,
            };
            let cells = vec![
                r.index.to_string(),
                r.date.to_string(),
                fmt_float(r.rate),
                fmt_float(r.quantity),
                fmt_chf(r.cost),
                r.kind.to_string(),
            ];
            table.add_row(cells.into_iter().map(|c| Cell::new(c).fg(color)));
        }
        println!("{}", table);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub index: usize,
    pub date: NaiveDate,
    pub rate: f64,
    pub quantity: f64,
    pub cost: f64,
    pub kind: Kind,
}

pub fn query_rows(session: &Session) -> Vec<TransactionRow> {
    session
        .ledger()
        .all()
        .iter()
        .enumerate()
        .map(|(index, t)| TransactionRow {
            index,
            date: t.date,
            rate: t.rate,
            quantity: t.quantity,
            cost: t.cost,
            kind: t.kind,
        })
        .collect()
}
