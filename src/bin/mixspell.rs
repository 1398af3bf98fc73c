//! Mixspell CLI binary.

use clap::Parser;
use mixspell::cli::{args::MixspellArgs, commands::execute_command};
use std::process;

fn main() {
    let args = MixspellArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
