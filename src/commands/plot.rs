// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::Error;
use crate::plot::{self, ChartFormat, Metric};
use crate::session::Session;
use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let out = PathBuf::from(sub.get_one::<String>("out").context("--out is required")?.trim());
    let format: ChartFormat = sub
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("svg")
        .parse()
        .map_err(|e: String| anyhow!(e))?;
    let metrics = match sub.get_one::<String>("metric").map(String::as_str) {
        None | Some("all") => Metric::ALL.to_vec(),
        Some(m) => vec![m.parse::<Metric>().map_err(|e| anyhow!(e))?],
    };

    if session.ledger().is_empty() {
        return Err(Error::NothingToPlot.into());
    }
    std::fs::create_dir_all(&out)
        .with_context(|| format!("Create output dir {}", out.display()))?;

    for metric in metrics {
        let path = out.join(format!("{}.{}", metric.file_stem(), format.extension()));
        plot::draw(session.ledger().all(), metric, &path, format)
            .with_context(|| format!("Render {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
