// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::{Error, Result};
use crate::models::{Kind, Transaction};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Column order of the ledger file.
pub const HEADER: [&str; 5] = [
    "Purchased_Date",
    "Gram_Per_CHF",
    "Quantity_Purchased",
    "Cost",
    "Type",
];

/// What `load` returns when the ledger file does not exist yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingFile {
    #[default]
    Empty,
    Seed,
}

/// The starter row used by [`MissingFile::Seed`]. The cost is kept exactly as
/// historically recorded, not recomputed.
pub fn seed_transaction() -> Transaction {
    Transaction {
        date: NaiveDate::from_ymd_opt(2024, 8, 6).unwrap_or_default(),
        rate: 67.55075,
        quantity: 40.0,
        cost: 2702.3,
        kind: Kind::Purchase,
    }
}

/// Flat CSV persistence for the ledger. There is no locking: two processes
/// saving to the same path race and the last writer wins.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
    missing: MissingFile,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            missing: MissingFile::default(),
        }
    }

    pub fn with_missing(mut self, missing: MissingFile) -> Self {
        self.missing = missing;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<Vec<Transaction>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), policy = ?self.missing, "ledger file missing");
                return Ok(match self.missing {
                    MissingFile::Empty => Vec::new(),
                    MissingFile::Seed => vec![seed_transaction()],
                });
            }
            Err(e) => return Err(Error::storage(&self.path, e)),
        };

        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);
        let mut rows = Vec::new();
        for result in rdr.deserialize::<Transaction>() {
            rows.push(result.map_err(|e| Error::from_csv(&self.path, e))?);
        }
        info!(path = %self.path.display(), rows = rows.len(), "ledger loaded");
        Ok(rows)
    }

    /// Replace the file with the full ledger, header first. Rows go to a
    /// temporary file next to the ledger which is then renamed over it, so a
    /// failed write leaves the previous file intact.
    pub fn save(&self, rows: &[Transaction]) -> Result<()> {
        self.replace_with(|out| {
            // Header is written explicitly so an empty ledger still gets one.
            let mut wtr = WriterBuilder::new().has_headers(false).from_writer(out);
            wtr.write_record(HEADER)
                .map_err(|e| Error::from_csv(&self.path, e))?;
            for row in rows {
                wtr.serialize(row)
                    .map_err(|e| Error::from_csv(&self.path, e))?;
            }
            wtr.flush().map_err(|e| Error::storage(&self.path, e))
        })?;
        info!(path = %self.path.display(), rows = rows.len(), "ledger saved");
        Ok(())
    }

    fn replace_with<F>(&self, fill: F) -> Result<()>
    where
        F: FnOnce(&mut File) -> Result<()>,
    {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::storage(&self.path, e))?;
        fill(tmp.as_file_mut())?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| Error::storage(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| Error::storage(&self.path, e.error))?;
        Ok(())
    }
}
