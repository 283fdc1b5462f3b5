//! Castellan CLI - Administrative command-line interface for the Castellan controller

use clap::Parser;

use castellan_cli::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
