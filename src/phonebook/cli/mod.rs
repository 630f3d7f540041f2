//! # CLI Behavior
//!
//! This is **one possible UI client** for the phonebook.
//!
//! ## Naked Execution (`phonebook`)
//!
//! Running `phonebook` with no arguments opens the interactive menu, the same
//! as `phonebook menu`. Scriptable subcommands (`list`, `create`, `search`,
//! `update`, `delete`, `init`) cover every operation for non-interactive use.
//!
//! ## Numbering
//!
//! Listings number contacts from 0. Those numbers are what `update` and
//! `delete` accept, and they shift after every delete.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `menu`: Interactive menu loop
//! - `print`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod menu;
mod print;
pub mod setup;

pub use commands::run;
