//! # Gradebook CLI
//!
//! The binary is intentionally thin: the interactive shell lives in `cli/`,
//! and this file only invokes `cli::run()` and maps failure to an exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/gradebook/cli/)                             │
//! │  - clap argument parsing + logging setup (setup.rs)         │
//! │  - Context wiring (commands.rs)                             │
//! │  - Menu loop and prompts (shell.rs)                         │
//! │  - Table / stats / message rendering (print.rs)             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!            gradebook::api::GradebookApi<CsvStore>
//! ```
//!
//! Recoverable problems (bad input, unknown id, declined confirmation) are
//! reported inside the shell and never reach this file. Anything that does
//! reach it is an I/O or configuration fault, which exits with status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
