//! # Configuration
//!
//! Phonebook configuration is managed by [`confique`], which layers
//! environment variables over a TOML file.
//!
//! ## Resolution Order
//!
//! The backing file is picked in priority order:
//! 1. **CLI flag**: `--file <PATH>` (applied by the binary, not here).
//! 2. **Environment**: `PHONEBOOK_FILE`.
//! 3. **Config file**: `file = "..."` in `phonebook.toml` inside the OS config
//!    directory (via the `directories` crate), or the file passed with
//!    `--config`.
//! 4. **Default**: `phonebook.json` in the OS data directory.
//!
//! The resolved path is handed to [`FileStore::new`](crate::store::fs::FileStore::new);
//! nothing in the library reads process-wide path state.

use crate::error::{PhonebookError, Result};
use confique::Config;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "phonebook.toml";
pub const DEFAULT_STORE_FILENAME: &str = "phonebook.json";

/// Configuration for phonebook, stored in `phonebook.toml`.
#[derive(Config, Debug, Clone, Default, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Path of the JSON file holding the contacts.
    #[config(env = "PHONEBOOK_FILE")]
    pub file: Option<PathBuf>,
}

impl PhonebookConfig {
    /// Loads the environment layer over `config_file` (if given).
    ///
    /// A config file that does not exist is skipped.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = config_file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| PhonebookError::Config(e.to_string()))
    }

    /// The configured backing file, or `phonebook.json` in the OS data directory.
    pub fn store_file(&self) -> Result<PathBuf> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => Ok(default_data_dir()?.join(DEFAULT_STORE_FILENAME)),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "phonebook", "phonebook")
        .ok_or_else(|| PhonebookError::Config("Could not determine home directory".to_string()))
}

/// `phonebook.toml` in the OS config directory.
pub fn default_config_file() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILENAME))
}

/// The OS data directory used when no file is configured.
pub fn default_data_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_store_file_is_phonebook_json() {
        let config = PhonebookConfig::default();
        if let Ok(path) = config.store_file() {
            assert!(path.ends_with(DEFAULT_STORE_FILENAME));
        }
    }

    #[test]
    fn explicit_file_is_used_verbatim() {
        let config = PhonebookConfig {
            file: Some(PathBuf::from("/tmp/contacts.json")),
        };
        assert_eq!(
            config.store_file().unwrap(),
            PathBuf::from("/tmp/contacts.json")
        );
    }

    #[test]
    fn reads_file_from_toml() {
        if std::env::var_os("PHONEBOOK_FILE").is_some() {
            return;
        }
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "file = \"/srv/contacts.json\"\n").unwrap();

        let config = PhonebookConfig::load(Some(&config_path)).unwrap();
        assert_eq!(config.file, Some(PathBuf::from("/srv/contacts.json")));
    }

    #[test]
    fn missing_config_file_is_skipped() {
        if std::env::var_os("PHONEBOOK_FILE").is_some() {
            return;
        }
        let dir = TempDir::new().unwrap();
        let config = PhonebookConfig::load(Some(&dir.path().join(CONFIG_FILENAME))).unwrap();
        assert_eq!(config, PhonebookConfig::default());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "file = [").unwrap();

        assert!(matches!(
            PhonebookConfig::load(Some(&config_path)),
            Err(PhonebookError::Config(_))
        ));
    }
}
