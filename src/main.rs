// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use corpus_scrape::{app, cli::Args, logging, presentation};

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    match app::run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            presentation::print_error(&err);
            ExitCode::FAILURE
        }
    }
}
