// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod store;
pub mod ledger;
pub mod stats;
pub mod session;
pub mod plot;
pub mod utils;
pub mod commands;
