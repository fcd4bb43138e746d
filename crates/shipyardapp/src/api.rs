//! # Ship Service
//!
//! The service is a **thin facade** over the command layer. It is the single
//! entry point for catalog operations regardless of the client in front of it.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the appropriate command function
//! - **Owns the store** for the duration of the session
//! - **Returns structured types**: `Ship`, `Page<Ship>`, `bool`, `u64`
//!
//! ## What the Service Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Presentation**: no strings for humans, no status codes. Clients map
//!   [`ShipyardError::class`](crate::error::ShipyardError::class) onto their
//!   own conventions.
//!
//! ## Generic Over ShipStore
//!
//! - Production: `ShipService<FileStore>`
//! - Testing: `ShipService<InMemoryStore>`
//!
//! Writes take `&mut self`, reads take `&self`; one service instance is one
//! unit of exclusive access to its store.

use crate::commands;
use crate::criteria::ShipCriteria;
use crate::error::Result;
use crate::model::{Ship, ShipDraft, ShipId};
use crate::page::{Page, PageRequest};
use crate::store::ShipStore;

pub struct ShipService<S: ShipStore> {
    store: S,
}

impl<S: ShipStore> ShipService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self, criteria: &ShipCriteria, page: &PageRequest) -> Result<Page<Ship>> {
        commands::list::run(&self.store, criteria, page)
    }

    pub fn list_all(&self, criteria: &ShipCriteria) -> Result<Vec<Ship>> {
        commands::list::all(&self.store, criteria)
    }

    pub fn count(&self, criteria: &ShipCriteria) -> Result<u64> {
        commands::list::count(&self.store, criteria)
    }

    pub fn create(&mut self, draft: ShipDraft) -> Result<Ship> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn get(&self, id: ShipId) -> Result<Ship> {
        commands::get::run(&self.store, id)
    }

    pub fn update(&mut self, id: ShipId, patch: ShipDraft) -> Result<Ship> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete(&mut self, id: ShipId) -> Result<()> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn exists(&self, id: ShipId) -> Result<bool> {
        commands::exists::run(&self.store, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

pub use crate::criteria::Range;
pub use crate::error::{ErrorClass, ShipyardError};
pub use crate::page::ShipOrder;
