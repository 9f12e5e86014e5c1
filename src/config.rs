// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{LedgerStore, MissingFile};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Goldledger", "goldledger"));

pub const FILE_ENV: &str = "GOLDLEDGER_FILE";
pub const FILE_NAME: &str = "gold_data.csv";

pub fn default_ledger_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(FILE_NAME))
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub ledger_path: PathBuf,
    pub missing: MissingFile,
}

impl Settings {
    /// `--file` wins over `GOLDLEDGER_FILE`, which wins over the data dir.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let ledger_path = match m.get_one::<String>("file") {
            Some(p) => PathBuf::from(p.trim()),
            None => match std::env::var(FILE_ENV) {
                Ok(p) if !p.trim().is_empty() => PathBuf::from(p.trim()),
                _ => default_ledger_path()?,
            },
        };
        let missing = if m.get_flag("seed-if-missing") {
            MissingFile::Seed
        } else {
            MissingFile::Empty
        };
        Ok(Self {
            ledger_path,
            missing,
        })
    }

    pub fn store(&self) -> LedgerStore {
        LedgerStore::new(&self.ledger_path).with_missing(self.missing)
    }
}
