//! # CLI Layer
//!
//! The interactive menu is **one possible UI client** for emprec. It is the only
//! place that reads stdin, writes stdout, or decides when the process ends.
//!
//! ## Structure
//!
//! - `setup.rs`: clap flags (`--data-file`, `--config`, `-v`, `-q`)
//! - `menu.rs`: `MenuChoice` and the handler lookup table driving the loop
//! - `render.rs`: turns `CmdResult`s and records into terminal text
//!
//! `run()` resolves configuration, installs logging, builds the API over a
//! `FileStore` and hands stdin/stdout to the menu.

mod menu;
mod render;
mod setup;

use clap::Parser;
use emprec::api::EmprecApi;
use emprec::config::EmprecConfig;
use emprec::error::Result;
use emprec::logging::{init_logging, Verbosity};
use emprec::store::fs::FileStore;
use std::io;
use std::path::PathBuf;
use tracing::debug;

use menu::Menu;
use setup::Cli;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    let config = resolve_config(&cli)?;
    debug!(data_file = %config.data_file.display(), "using data file");

    let api = EmprecApi::new(FileStore::new(config.data_file));
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(api, stdin.lock(), stdout.lock()).run()
}

/// `--data-file` beats the config file, which beats the default.
fn resolve_config(cli: &Cli) -> Result<EmprecConfig> {
    let config = match &cli.config {
        Some(path) => EmprecConfig::load_from(path)?,
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            EmprecConfig::load(cwd)?
        }
    };

    Ok(match &cli.data_file {
        Some(path) => config.with_data_file(path),
        None => config,
    })
}
