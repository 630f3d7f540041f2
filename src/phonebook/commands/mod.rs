//! # Command Layer
//!
//! The business logic of the phonebook. Each operation lives in its own
//! submodule as a plain function over a [`DataStore`](crate::store::DataStore).
//!
//! Commands:
//! - take regular Rust arguments and return regular Rust values
//! - never print, prompt, or pick user-facing wording
//! - always run a full load, validate, save cycle, so a failed validation or
//!   index check never reaches the store
//!
//! ## Ordinal references
//!
//! `update` and `delete` address a record by its position in the collection
//! as it was loaded. That position is only meaningful until the next write:
//! deleting index 0 shifts every later record down by one. Callers that show
//! a numbered list must re-read before acting on a number again.
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` and cover every branch, including
//! failures that must leave the store untouched.
//!
//! ## Command Modules
//!
//! - [`init`]: Create the backing store if missing
//! - [`list`]: Read every record
//! - [`create`]: Validate and append a contact
//! - [`search`]: Case-insensitive substring search over all fields
//! - [`update`]: Replace one field of one record
//! - [`delete`]: Remove one record
//! - [`helpers`]: Shared index checks

pub mod create;
pub mod delete;
pub mod helpers;
pub mod init;
pub mod list;
pub mod search;
pub mod update;
