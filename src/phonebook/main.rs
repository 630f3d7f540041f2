//! # Phonebook CLI
//!
//! The binary is thin: everything terminal-specific lives in
//! `cli/`, and this file only invokes `cli::run()` and maps failure to an
//! exit code.
//!
//! - `cli/setup.rs`: clap argument definitions and the version string
//! - `cli/commands.rs`: context wiring, logging, per-subcommand handlers
//! - `cli/menu.rs`: the interactive menu (default when no subcommand is given)
//! - `cli/print.rs`: tables and colored messages
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI decides all wording,
//! including how a `PhonebookError` is shown to the user.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
