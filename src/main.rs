// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use goldledger::{cli, commands, config::Settings, session::Session, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    utils::init_tracing(matches.get_count("verbose"));
    let settings = Settings::from_matches(&matches)?;
    let mut session = Session::open(settings.store())?;

    match matches.subcommand() {
        Some(("init", _)) => {
            commands::init::handle(&session)?;
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut session, sub)?,
        Some(("stats", sub)) => commands::stats::handle(&mut session, sub)?,
        Some(("plot", sub)) => commands::plot::handle(&session, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&session)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
