//! Interactive console entry point.
//!
//! # Responsibility
//! - Wire stdin/stdout and the simulated content source into the shell.
//! - Optionally initialize file logging via `--log-dir <absolute path>`.

mod shell;

use std::io::{self, BufReader};
use webwatch_core::{default_log_level, init_logging, SimulatedSource};

fn main() -> io::Result<()> {
    if let Some(log_dir) = log_dir_arg() {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let stdin = io::stdin();
    let mut shell = shell::Shell::new(BufReader::new(stdin.lock()), io::stdout());
    shell.run(SimulatedSource::new())
}

fn log_dir_arg() -> Option<String> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--log-dir" {
            return args.next();
        }
    }
    None
}
