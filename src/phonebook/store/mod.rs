//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the contact collection lives so the
//! command layer can run against a real file or an in-memory vector.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! `FileStore` keeps the whole phonebook in a single UTF-8 file:
//!
//! ```text
//! [["Alice","+123456789","work"],["Bob","987654321",""]]
//! ```
//!
//! Every operation reads the full collection and writes the full collection
//! back. There is no append log and no partial update.

use crate::error::Result;
use crate::model::Record;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for contact storage.
pub trait DataStore {
    /// Whether the backing store has been created.
    fn is_initialized(&self) -> bool;

    /// Read the full collection in storage order.
    ///
    /// An uninitialized store reads as empty. Content that is not a list of
    /// three-string records must be reported as `StoreCorrupt`.
    fn load_records(&self) -> Result<Vec<Record>>;

    /// Replace the full collection. Must be all-or-nothing.
    fn save_records(&mut self, records: &[Record]) -> Result<()>;

    /// Where the records live (a real path for file-based stores).
    fn location(&self) -> PathBuf;
}
