//! # Storage Layer
//!
//! This module defines the storage abstraction for the catalog. The
//! [`ShipStore`] trait is everything the command layer needs from persistence:
//!
//! - insert returning the assigned id
//! - get / exists / update / delete by id
//! - filtered queries, paginated or not, and filtered counts
//!
//! ## Two Layers
//!
//! - [`backend::StorageBackend`]: raw I/O of the whole ship table (memory or
//!   JSON file). Knows nothing about ids, filters or pages.
//! - [`table_store::TableStore`]: implements [`ShipStore`] on top of any
//!   backend. Assigns ids, evaluates [`FilterExpression`]s, sorts and pages.
//!
//! ## Atomicity
//!
//! Every mutating call is one load-modify-save cycle of the table, and the
//! file backend saves with write-to-temp-then-rename. A single operation is
//! therefore all or nothing. There are no multi-operation transactions and no
//! concurrency tokens: two writers racing on the same id is last-write-wins.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON file on disk, used by the CLI.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! ships.json
//! {
//!   "nextId": 4,
//!   "ships": [ { "id": 1, "name": "...", ... }, ... ]   # ordered by id
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::FilterExpression;
use crate::model::{Ship, ShipData, ShipId};
use crate::page::{Page, PageRequest};

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod table_store;

/// The persisted table: every ship, ordered by id, plus the id sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipTable {
    pub next_id: u64,
    pub ships: Vec<Ship>,
}

impl Default for ShipTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            ships: Vec::new(),
        }
    }
}

impl ShipTable {
    pub(crate) fn position(&self, id: ShipId) -> Option<usize> {
        self.ships.binary_search_by_key(&id, |s| s.id).ok()
    }
}

/// Abstract interface for ship persistence.
pub trait ShipStore {
    /// Persists a new ship and returns it with its assigned id.
    fn insert(&mut self, data: ShipData) -> Result<Ship>;

    /// Fails with `NotFound` if the id does not exist.
    fn get(&self, id: ShipId) -> Result<Ship>;

    fn exists(&self, id: ShipId) -> Result<bool>;

    /// Replaces the stored ship with the same id. Fails with `NotFound` if absent.
    fn update(&mut self, ship: &Ship) -> Result<()>;

    /// Fails with `NotFound` if the id does not exist.
    fn delete(&mut self, id: ShipId) -> Result<()>;

    /// Matching ships, ordered and cut to the requested page.
    fn query(&self, filter: &FilterExpression, page: &PageRequest) -> Result<Page<Ship>>;

    /// Every matching ship, ordered by id.
    fn find_all(&self, filter: &FilterExpression) -> Result<Vec<Ship>>;

    fn count(&self, filter: &FilterExpression) -> Result<u64>;
}
