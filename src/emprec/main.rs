//! # emprec binary
//!
//! The binary is intentionally thin: the interactive client lives in `cli/`, and
//! this file only invokes `cli::run()` and handles process termination.
//! A fatal error (an I/O failure while reading or writing the data file, a bad
//! config file) prints `Error: ...` to stderr and exits with status 1. Every other
//! path, including operator mistakes, keeps the menu running until option 5.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
