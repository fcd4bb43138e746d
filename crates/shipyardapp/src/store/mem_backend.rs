use super::backend::StorageBackend;
use super::ShipTable;
use crate::error::{Result, ShipyardError};
use std::cell::RefCell;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the service is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    table: RefCell<ShipTable>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load_table(&self) -> Result<ShipTable> {
        Ok(self.table.borrow().clone())
    }

    fn save_table(&self, table: &ShipTable) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShipyardError::Store("Simulated write error".to_string()));
        }
        *self.table.borrow_mut() = table.clone();
        Ok(())
    }
}
