use super::fs_backend::FsBackend;
use super::table_store::TableStore;
use std::path::{Path, PathBuf};

/// Production store: one JSON document on disk.
pub type FileStore = TableStore<FsBackend>;

impl FileStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        TableStore::with_backend(FsBackend::new(data_file))
    }

    pub fn data_file(&self) -> &Path {
        self.backend.data_file()
    }
}
