// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The ledger file could not be read or written.
    #[error("Ledger file {} is unavailable: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The ledger file exists but a row could not be decoded.
    #[error("Ledger file {} is corrupt{}: {reason}", .path.display(), at_line(.line))]
    CorruptLedger {
        path: PathBuf,
        line: Option<u64>,
        reason: String,
    },

    #[error("Row index {index} does not exist (ledger has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Ledger is empty: nothing to plot")]
    NothingToPlot,

    #[error("Chart rendering failed: {0}")]
    Plot(String),
}

fn at_line(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {}", l)).unwrap_or_default()
}

impl Error {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::StorageUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Split a csv error into an I/O failure or a malformed row.
    pub(crate) fn from_csv(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        let path = path.into();
        let reason = err.to_string();
        let line = err.position().map(|p| p.line());
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Error::StorageUnavailable { path, source },
            csv::ErrorKind::Utf8 { .. } => Error::StorageUnavailable {
                path,
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, reason),
            },
            _ => Error::CorruptLedger { path, line, reason },
        }
    }
}
