//! # API Facade
//!
//! [`ContactStore`] is the whole public surface of the phonebook core. Every
//! client (the CLI subcommands, the interactive menu, tests) goes through it.
//!
//! The facade dispatches to `commands/*` and returns structured values. It
//! never formats messages: a client matches on
//! [`PhonebookError`](crate::error::PhonebookError) and picks its own wording.
//!
//! ## Generic Over DataStore
//!
//! - Production: `ContactStore<FileStore>`
//! - Testing: `ContactStore<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{ContactField, Record};
use crate::store::fs::FileStore;
use crate::store::DataStore;
use std::path::PathBuf;

pub use crate::commands::init::InitOutcome;

/// Sole owner of the persisted contact collection.
pub struct ContactStore<S: DataStore> {
    store: S,
}

impl ContactStore<FileStore> {
    /// A store backed by the JSON file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileStore::new(path))
    }
}

impl<S: DataStore> ContactStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates the backing store with an empty collection if it is missing.
    pub fn init(&mut self) -> Result<InitOutcome> {
        commands::init::run(&mut self.store)
    }

    pub fn load(&self) -> Result<Vec<Record>> {
        commands::list::run(&self.store)
    }

    /// Replaces the whole collection with `records`.
    pub fn save(&mut self, records: &[Record]) -> Result<()> {
        self.store.save_records(records)
    }

    pub fn create(&mut self, name: &str, phone: &str, comment: &str) -> Result<Record> {
        commands::create::run(&mut self.store, name, phone, comment)
    }

    pub fn find(&self, query: &str) -> Result<Vec<Record>> {
        commands::search::run(&self.store, query)
    }

    pub fn update(&mut self, index: usize, field: ContactField, value: &str) -> Result<Record> {
        commands::update::run(&mut self.store, index, field, value)
    }

    pub fn delete(&mut self, index: usize) -> Result<Record> {
        commands::delete::run(&mut self.store, index)
    }

    pub fn location(&self) -> PathBuf {
        self.store.location()
    }
}
