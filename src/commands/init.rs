// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use anyhow::{Context, Result};

/// Write the ledger file when it does not exist yet. Returns whether it was created.
pub fn handle(session: &Session) -> Result<bool> {
    let store = session.ledger().store();
    let path = store.path().display();
    if store.exists() {
        println!("Ledger already present at {}", path);
        return Ok(false);
    }
    session
        .ledger()
        .persist()
        .with_context(|| format!("Ledger was not created at {}", path))?;
    println!("Ledger initialized at {}", path);
    Ok(true)
}
