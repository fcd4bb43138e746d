use super::backend::StorageBackend;
use super::{ShipStore, ShipTable};
use crate::error::{Result, ShipyardError};
use crate::filter::FilterExpression;
use crate::model::{Ship, ShipData, ShipId};
use crate::page::{Page, PageRequest};
use tracing::debug;

pub struct TableStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> TableStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Matching ships in id order.
    fn scan(&self, filter: &FilterExpression) -> Result<Vec<Ship>> {
        let table = self.backend.load_table()?;
        let matched: Vec<Ship> = if filter.is_unconstrained() {
            table.ships
        } else {
            table
                .ships
                .into_iter()
                .filter(|ship| filter.matches(ship))
                .collect()
        };
        debug!(%filter, matched = matched.len(), "scanned ship table");
        Ok(matched)
    }

    fn modify<T>(&mut self, f: impl FnOnce(&mut ShipTable) -> Result<T>) -> Result<T> {
        let mut table = self.backend.load_table()?;
        let out = f(&mut table)?;
        self.backend.save_table(&table)?;
        Ok(out)
    }
}

impl<B: StorageBackend> ShipStore for TableStore<B> {
    fn insert(&mut self, data: ShipData) -> Result<Ship> {
        self.modify(|table| {
            let id = ShipId::new(table.next_id);
            table.next_id += 1;
            let ship = Ship { id, data };
            // Ids only grow, so pushing keeps the table ordered
            table.ships.push(ship.clone());
            Ok(ship)
        })
    }

    fn get(&self, id: ShipId) -> Result<Ship> {
        let table = self.backend.load_table()?;
        let pos = table.position(id).ok_or(ShipyardError::NotFound(id))?;
        Ok(table.ships[pos].clone())
    }

    fn exists(&self, id: ShipId) -> Result<bool> {
        Ok(self.backend.load_table()?.position(id).is_some())
    }

    fn update(&mut self, ship: &Ship) -> Result<()> {
        self.modify(|table| {
            let pos = table
                .position(ship.id)
                .ok_or(ShipyardError::NotFound(ship.id))?;
            table.ships[pos] = ship.clone();
            Ok(())
        })
    }

    fn delete(&mut self, id: ShipId) -> Result<()> {
        self.modify(|table| {
            let pos = table.position(id).ok_or(ShipyardError::NotFound(id))?;
            table.ships.remove(pos);
            Ok(())
        })
    }

    fn query(&self, filter: &FilterExpression, page: &PageRequest) -> Result<Page<Ship>> {
        let mut matched = self.scan(filter)?;
        matched.sort_by(|a, b| page.order.compare(a, b));
        Ok(Page::slice(matched, page))
    }

    fn find_all(&self, filter: &FilterExpression) -> Result<Vec<Ship>> {
        self.scan(filter)
    }

    fn count(&self, filter: &FilterExpression) -> Result<u64> {
        Ok(self.scan(filter)?.len() as u64)
    }
}
