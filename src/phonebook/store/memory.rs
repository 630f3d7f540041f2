use super::DataStore;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use std::path::PathBuf;

/// In-memory storage for testing.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Option<Vec<Record>>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Some(records),
            simulate_write_error: false,
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl DataStore for InMemoryStore {
    fn is_initialized(&self) -> bool {
        self.records.is_some()
    }

    fn load_records(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone().unwrap_or_default())
    }

    fn save_records(&mut self, records: &[Record]) -> Result<()> {
        if self.simulate_write_error {
            return Err(PhonebookError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        self.records = Some(records.to_vec());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://phonebook")
    }
}
