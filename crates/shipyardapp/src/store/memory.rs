use super::mem_backend::MemBackend;
use super::table_store::TableStore;

pub type InMemoryStore = TableStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        TableStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ShipData, ShipDraft, ShipType};
    use crate::store::ShipStore;
    use chrono::{TimeZone, Utc};

    /// A complete, valid create request: year 3015, speed 0.5, rating 8.0 when new.
    pub fn sample_draft(name: &str) -> ShipDraft {
        ShipDraft {
            name: Some(name.to_string()),
            planet: Some("Earth".to_string()),
            ship_type: Some(ShipType::Merchant),
            prod_date: Some(Utc.with_ymd_and_hms(3015, 1, 1, 0, 0, 0).unwrap()),
            speed: Some(0.5),
            crew_size: Some(10),
            is_used: None,
        }
    }

    /// A valid, rated record: merchant from Earth, speed 0.5, crew 10, new.
    pub fn sample_data(name: &str, year: i32) -> ShipData {
        let mut data = ShipData {
            name: name.to_string(),
            planet: "Earth".to_string(),
            ship_type: ShipType::Merchant,
            prod_date: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
            speed: 0.5,
            crew_size: 10,
            is_used: false,
            rating: 0.0,
        };
        data.refresh_rating();
        data
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_ships(mut self, count: usize) -> Self {
            for i in 0..count {
                let data = sample_data(&format!("Test Ship {}", i + 1), 3000);
                self.store.insert(data).unwrap();
            }
            self
        }

        pub fn with_ship(mut self, data: ShipData) -> Self {
            self.store.insert(data).unwrap();
            self
        }

        pub fn with_used_ship(mut self, name: &str) -> Self {
            let mut data = sample_data(name, 3000);
            data.is_used = true;
            data.refresh_rating();
            self.store.insert(data).unwrap();
            self
        }

        pub fn with_typed_ship(mut self, name: &str, ship_type: ShipType) -> Self {
            let mut data = sample_data(name, 3000);
            data.ship_type = ship_type;
            self.store.insert(data).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{sample_data, StoreFixture};
    use super::*;
    use crate::error::ShipyardError;
    use crate::filter::{CompareOp, FilterExpression, Value};
    use crate::model::{Field, ShipId, ShipType};
    use crate::page::{PageRequest, ShipOrder};
    use crate::store::ShipStore;

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut store = InMemoryStore::new();
        let a = store.insert(sample_data("A", 3000)).unwrap();
        let b = store.insert(sample_data("B", 3000)).unwrap();
        assert_eq!(a.id, ShipId::new(1));
        assert_eq!(b.id, ShipId::new(2));
        assert_eq!(store.get(b.id).unwrap(), b);
    }

    #[test]
    fn get_missing_is_not_found() {
        let store = InMemoryStore::new();
        match store.get(ShipId::new(42)) {
            Err(ShipyardError::NotFound(id)) => assert_eq!(id, ShipId::new(42)),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn delete_not_found() {
        let mut store = InMemoryStore::new();
        match store.delete(ShipId::new(5)) {
            Err(ShipyardError::NotFound(err_id)) => assert_eq!(err_id, ShipId::new(5)),
            _ => panic!("Expected NotFound"),
        }
    }

    #[test]
    fn delete_then_exists_is_false() {
        let mut fixture = StoreFixture::new().with_ships(3);
        let id = ShipId::new(2);
        assert!(fixture.store.exists(id).unwrap());
        fixture.store.delete(id).unwrap();
        assert!(!fixture.store.exists(id).unwrap());
        assert!(fixture.store.exists(ShipId::new(3)).unwrap());
    }

    #[test]
    fn update_replaces_row() {
        let mut fixture = StoreFixture::new().with_ships(2);
        let mut ship = fixture.store.get(ShipId::new(1)).unwrap();
        ship.data.name = "Renamed".into();
        fixture.store.update(&ship).unwrap();
        assert_eq!(
            fixture.store.get(ShipId::new(1)).unwrap().data.name,
            "Renamed"
        );
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut store = InMemoryStore::new();
        let ship = crate::model::Ship {
            id: ShipId::new(9),
            data: sample_data("Ghost", 3000),
        };
        assert!(matches!(
            store.update(&ship),
            Err(ShipyardError::NotFound(_))
        ));
    }

    #[test]
    fn failed_save_leaves_table_untouched() {
        let mut fixture = StoreFixture::new().with_ships(1);
        fixture.store.backend().set_simulate_write_error(true);
        assert!(fixture.store.insert(sample_data("Lost", 3000)).is_err());
        fixture.store.backend().set_simulate_write_error(false);
        assert_eq!(
            fixture.store.count(&FilterExpression::NoConstraint).unwrap(),
            1
        );
    }

    #[test]
    fn query_filters_sorts_and_pages() {
        let mut fixture = StoreFixture::new();
        for (name, speed) in [("A", 0.9), ("B", 0.2), ("C", 0.5), ("D", 0.2)] {
            let mut data = sample_data(name, 3000);
            data.speed = speed;
            data.refresh_rating();
            fixture = fixture.with_ship(data);
        }
        let filter = FilterExpression::compare(Field::Speed, CompareOp::Lte, Value::Decimal(0.5));

        let page = fixture
            .store
            .query(&filter, &PageRequest::new(0, 2, ShipOrder::Speed))
            .unwrap();
        let names: Vec<&str> = page.items.iter().map(|s| s.data.name.as_str()).collect();
        // B and D tie on speed, id breaks the tie
        assert_eq!(names, vec!["B", "D"]);
        assert_eq!(page.total_items, 3);
        assert_eq!(page.total_pages, 2);

        let second = fixture
            .store
            .query(&filter, &PageRequest::new(1, 2, ShipOrder::Speed))
            .unwrap();
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].data.name, "C");
    }

    #[test]
    fn count_and_find_all_agree() {
        let fixture = StoreFixture::new()
            .with_ships(2)
            .with_typed_ship("Warbird", ShipType::Military)
            .with_used_ship("Rustbucket");
        let military = FilterExpression::compare(
            Field::ShipType,
            CompareOp::Eq,
            Value::ShipType(ShipType::Military),
        );
        assert_eq!(fixture.store.count(&military).unwrap(), 1);
        assert_eq!(fixture.store.find_all(&military).unwrap()[0].data.name, "Warbird");

        let all = fixture.store.find_all(&FilterExpression::NoConstraint).unwrap();
        assert_eq!(all.len(), 4);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }
}
