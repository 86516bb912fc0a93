//! mapprep CLI - prepares loading-screen assets for a Source 2 map addon
//!
//! Usage: mapprep [--map <NAME>] [--source <DIR>] [OPTIONS]
//!
//! Without flags the map name, a missing installation path and the compile
//! step are asked for interactively.

mod commands;
mod ui;

use clap::Parser;
use mapprep::presentation::Cli;

fn main() {
    let cli = Cli::parse();

    match commands::run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            ui::error::print_error(&err, cli.json);
            std::process::exit(1);
        }
    }
}
