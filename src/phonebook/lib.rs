//! # Phonebook Architecture
//!
//! Phonebook is a **UI-agnostic contact store** with a terminal client on top.
//! The library owns the data, its validation, and its persistence; the binary
//! only gathers input and renders output.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands, interactive menu, tables and colors         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - ContactStore: init, load, save, create, find, update,    │
//! │    delete                                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load, validate, then write; never print                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records and Ordinal References
//!
//! A contact is stored as a [`model::Record`]: `[name, phone, comment]`. There
//! are no ids. `update` and `delete` take the record's position in the list
//! the caller last loaded, which is only valid until the next write.
//!
//! ## Errors
//!
//! Every operation returns [`error::Result`]. Validation and index errors are
//! recoverable and never touch the store; a corrupt backing file is reported
//! as-is and never repaired or truncated.
//!
//! ## Module Overview
//!
//! - [`api`]: The `ContactStore` facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Contact`, `Record`, `ContactField`, validators
//! - [`config`]: Configuration loading and default paths
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
