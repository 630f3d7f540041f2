use super::DataStore;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PhonebookError::Io)?;
            }
        }
        Ok(())
    }

    fn corrupt(&self, reason: impl Into<String>) -> PhonebookError {
        let reason = reason.into();
        warn!("corrupt phonebook at {}: {}", self.path.display(), reason);
        PhonebookError::StoreCorrupt {
            path: self.path.clone(),
            reason,
        }
    }
}

impl DataStore for FileStore {
    fn is_initialized(&self) -> bool {
        self.path.is_file()
    }

    fn load_records(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            debug!("no phonebook at {}, reading as empty", self.path.display());
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => self.corrupt("file is not valid UTF-8"),
            _ => PhonebookError::Io(e),
        })?;
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(|e| self.corrupt(e.to_string()))?;
        debug!(
            "loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn save_records(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string(records).map_err(PhonebookError::Serialization)?;

        // Atomic write: a crash leaves either the old file or the new one
        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("phonebook");
        let tmp_path = self
            .path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(PhonebookError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PhonebookError::Io(e));
        }

        debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("phonebook.json"));
        assert!(!store.is_initialized());
        assert!(store.load_records().unwrap().is_empty());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("phonebook.json");
        let mut store = FileStore::new(&path);
        store.save_records(&[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn non_utf8_content_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("phonebook.json");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let store = FileStore::new(&path);
        assert!(matches!(
            store.load_records(),
            Err(PhonebookError::StoreCorrupt { .. })
        ));
    }
}
