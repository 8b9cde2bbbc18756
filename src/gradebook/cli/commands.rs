//! # CLI Layer
//!
//! This module is **one possible UI client** for the gradebook. It is the only
//! place that reads stdin, writes stdout/stderr, or parses arguments.
//!
//! `run()` parses flags, sets up logging, loads configuration, wires a
//! `CsvStore` into the API facade, and hands stdin/stdout to the [`Shell`].

use super::setup::{init_logging, Cli};
use super::shell::Shell;
use clap::Parser;
use gradebook::api::GradebookApi;
use gradebook::config::GradebookConfig;
use gradebook::error::Result;
use gradebook::store::fs::CsvStore;
use std::io;
use std::path::PathBuf;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let api = init_api(&cli)?;
    let stdin = io::stdin();
    let mut shell = Shell::new(api, stdin.lock(), io::stdout().lock());
    shell.run()
}

fn init_api(cli: &Cli) -> Result<GradebookApi<CsvStore>> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_dir = cli.config_dir.clone().unwrap_or_else(|| cwd.clone());

    let config = GradebookConfig::load(&config_dir)?;
    // --file is relative to where the user is, not to the config directory
    let data_path = match &cli.file {
        Some(file) => cwd.join(file),
        None => config.data_path(&config_dir),
    };
    debug!(config_dir = %config_dir.display(), data = %data_path.display(), "resolved paths");

    let store = CsvStore::new(&data_path);
    Ok(GradebookApi::new(store, config.with_data_file(data_path)))
}
