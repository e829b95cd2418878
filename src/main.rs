//! `contam-sim`: evaluate, export and plot one parameter set
//!
//! Usage: `contam-sim [--params FILE] [--c0 X] [--dispersion X] [--decay X]
//! [--t-max X] [--depths 10,50,90] [--out-dir DIR] [--plot FILE] [--metadata]
//! [--stdout] [--log-level LEVEL]`

use clap::Parser;
use log::error;
use std::process;

use contam_rs::cli::{self, logging, Args};

fn main() {
    let args = Args::parse();
    logging::init_logging(args.log_level.as_deref());

    if let Err(e) = cli::run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}
