//! # Configuration
//!
//! Shipyard configuration is managed by [`confique`], which handles layered
//! loading from TOML files and environment variables.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `SHIPYARD_DATA_FILE`, `SHIPYARD_PAGE_SIZE`,
//!    `SHIPYARD_ORDER`.
//! 2. **Explicit file**: passed by the client (e.g. `--config`).
//! 3. **User config**: `shipyard.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: via `#[config(default = ...)]` or accessor fallbacks.
//!
//! Missing files are skipped silently.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `<data dir>/ships.json` | JSON file backing the store |
//! | `page_size` | `3` | Page size for listings when the client gives none |
//! | `order` | `id` | Sort key for listings when the client gives none |

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, ShipyardError};
use crate::page::{ShipOrder, DEFAULT_PAGE_SIZE};

pub const CONFIG_FILE_NAME: &str = "shipyard.toml";
pub const DATA_FILE_NAME: &str = "ships.json";

/// Configuration for shipyard, stored in `shipyard.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShipyardConfig {
    /// Path of the JSON data file. When absent, the OS data directory is used.
    #[config(env = "SHIPYARD_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Default number of ships per page.
    #[config(env = "SHIPYARD_PAGE_SIZE", default = 3)]
    pub page_size: u32,

    /// Default listing order: "id", "speed", "prodDate" or "rating".
    #[config(env = "SHIPYARD_ORDER")]
    pub order: Option<ShipOrder>,
}

impl Default for ShipyardConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            page_size: DEFAULT_PAGE_SIZE,
            order: None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "shipyard")
}

/// `shipyard.toml` in the OS config directory, if one can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

impl ShipyardConfig {
    /// Loads the layered configuration. `explicit` wins over the user file.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = ShipyardConfig::builder().env();
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ShipyardError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("config file not found: {}", path.display()),
                )));
            }
            builder = builder.file(path);
        }
        if let Some(path) = user_config_path() {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// The configured data file, or `ships.json` in the OS data directory.
    pub fn data_file(&self) -> Result<PathBuf> {
        if let Some(path) = &self.data_file {
            return Ok(path.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().join(DATA_FILE_NAME))
            .ok_or_else(|| {
                ShipyardError::Store("cannot determine a data directory; set SHIPYARD_DATA_FILE".into())
            })
    }

    /// Get the listing order, using the default if not configured.
    pub fn order(&self) -> ShipOrder {
        self.order.unwrap_or_default()
    }

    /// Page size, never below one.
    pub fn page_size(&self) -> u32 {
        self.page_size.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShipyardConfig::default();
        assert_eq!(config.page_size(), 3);
        assert_eq!(config.order(), ShipOrder::Id);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_explicit_data_file_wins() {
        let config = ShipyardConfig {
            data_file: Some(PathBuf::from("/tmp/fleet.json")),
            ..Default::default()
        };
        assert_eq!(config.data_file().unwrap(), PathBuf::from("/tmp/fleet.json"));
    }

    #[test]
    fn test_page_size_floor() {
        let config = ShipyardConfig {
            page_size: 0,
            ..Default::default()
        };
        assert_eq!(config.page_size(), 1);
    }

    #[test]
    fn test_loads_explicit_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let written = ShipyardConfig {
            data_file: Some(dir.path().join("ships.json")),
            page_size: 7,
            order: Some(ShipOrder::Rating),
        };
        std::fs::write(&path, toml::to_string(&written).unwrap()).unwrap();

        let loaded = ShipyardConfig::load(Some(&path)).unwrap();
        if std::env::var_os("SHIPYARD_ORDER").is_none() {
            assert_eq!(loaded.order(), ShipOrder::Rating);
        }
        // Environment may override these two on a developer machine
        if std::env::var_os("SHIPYARD_PAGE_SIZE").is_none() {
            assert_eq!(loaded.page_size(), 7);
        }
        if std::env::var_os("SHIPYARD_DATA_FILE").is_none() {
            assert_eq!(loaded.data_file().unwrap(), dir.path().join("ships.json"));
        }
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(ShipyardConfig::load(Some(&missing)).is_err());
    }
}
