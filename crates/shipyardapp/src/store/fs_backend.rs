use super::backend::StorageBackend;
use super::ShipTable;
use crate::error::{Result, ShipyardError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Stores the table as one pretty-printed JSON document.
pub struct FsBackend {
    data_file: PathBuf,
}

impl FsBackend {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn ensure_parent(&self) -> Result<PathBuf> {
        let parent = match self.data_file.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !parent.exists() {
            fs::create_dir_all(&parent).map_err(ShipyardError::Io)?;
        }
        Ok(parent)
    }
}

impl StorageBackend for FsBackend {
    fn load_table(&self) -> Result<ShipTable> {
        if !self.data_file.exists() {
            debug!(path = %self.data_file.display(), "no data file yet, starting empty");
            return Ok(ShipTable::default());
        }
        let content = fs::read_to_string(&self.data_file).map_err(ShipyardError::Io)?;
        let table: ShipTable =
            serde_json::from_str(&content).map_err(ShipyardError::Serialization)?;
        Ok(table)
    }

    fn save_table(&self, table: &ShipTable) -> Result<()> {
        let dir = self.ensure_parent()?;
        let content = serde_json::to_string_pretty(table).map_err(ShipyardError::Serialization)?;

        // Atomic write
        let tmp_file = dir.join(format!(".ships-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(ShipyardError::Io)?;
        fs::rename(&tmp_file, &self.data_file).map_err(ShipyardError::Io)?;

        debug!(
            path = %self.data_file.display(),
            rows = table.ships.len(),
            "saved ship table"
        );
        Ok(())
    }
}
