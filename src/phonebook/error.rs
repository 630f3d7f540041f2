use crate::model::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No contact at index {index} (phonebook has {len} contacts)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Phonebook file {} is corrupt: {reason}", path.display())]
    StoreCorrupt { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl PhonebookError {
    /// Errors caused by user input. The store is untouched and the caller can
    /// re-prompt; everything else should abort the current operation.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PhonebookError::Validation(_) | PhonebookError::IndexOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
