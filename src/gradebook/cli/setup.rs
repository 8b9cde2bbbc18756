use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gradebook", bin_name = "gradebook", version)]
#[command(about = "Interactive gradebook backed by a CSV file", long_about = None)]
pub struct Cli {
    /// CSV file holding the roster (overrides the config file)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory containing gradebook.json [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output on stderr (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Logs go to stderr so they never interleave with prompts on stdout. The
/// filter comes from the command line only.
pub fn init_logging(verbosity: u8) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level_for(verbosity)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
}
