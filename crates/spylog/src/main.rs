//! spylog - inspect the resolved log4jdbc proxy configuration
//!
//! Resolves the configuration exactly as the proxy would at start-up and
//! prints it, together with where each value came from.

use clap::Parser;

mod commands;

use commands::Cli;

fn main() {
    spylog_core::logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
