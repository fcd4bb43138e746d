use crate::criteria::ShipCriteria;
use crate::error::Result;
use crate::filter::compose;
use crate::model::Ship;
use crate::page::{Page, PageRequest};
use crate::store::ShipStore;
use tracing::debug;

/// One page of the ships matching `criteria`.
pub fn run<S: ShipStore>(store: &S, criteria: &ShipCriteria, page: &PageRequest) -> Result<Page<Ship>> {
    let filter = compose(criteria);
    debug!(%filter, number = page.number, size = page.size, order = %page.order, "listing ships");
    store.query(&filter, page)
}

/// Every ship matching `criteria`, in id order.
pub fn all<S: ShipStore>(store: &S, criteria: &ShipCriteria) -> Result<Vec<Ship>> {
    let filter = compose(criteria);
    debug!(%filter, "listing all ships");
    store.find_all(&filter)
}

pub fn count<S: ShipStore>(store: &S, criteria: &ShipCriteria) -> Result<u64> {
    let filter = compose(criteria);
    debug!(%filter, "counting ships");
    store.count(&filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Range;
    use crate::model::ShipType;
    use crate::page::ShipOrder;
    use crate::store::memory::fixtures::{sample_data, StoreFixture};
    use chrono::{TimeZone, Utc};

    fn catalog() -> StoreFixture {
        let mut fast = sample_data("Falcon", 3015);
        fast.speed = 0.9;
        fast.refresh_rating();

        let mut old = sample_data("Relic", 2850);
        old.planet = "Pluto".into();
        old.crew_size = 3000;

        StoreFixture::new()
            .with_ship(fast)
            .with_ship(old)
            .with_used_ship("Hauler")
            .with_typed_ship("Lancer", ShipType::Military)
    }

    #[test]
    fn empty_criteria_lists_everything() {
        let fixture = catalog();
        let everything = all(&fixture.store, &ShipCriteria::default()).unwrap();
        assert_eq!(everything.len(), 4);
        assert_eq!(count(&fixture.store, &ShipCriteria::default()).unwrap(), 4);
    }

    #[test]
    fn default_page_holds_three() {
        let fixture = catalog();
        let page = run(&fixture.store, &ShipCriteria::default(), &PageRequest::default()).unwrap();
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total_items, 4);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn filters_by_text_and_flag() {
        let fixture = catalog();
        let criteria = ShipCriteria {
            planet: Some("Plu".into()),
            ..Default::default()
        };
        let found = all(&fixture.store, &criteria).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].data.name, "Relic");

        let used = ShipCriteria {
            is_used: Some(true),
            ..Default::default()
        };
        assert_eq!(count(&fixture.store, &used).unwrap(), 1);
    }

    #[test]
    fn filters_by_date_window() {
        let fixture = catalog();
        let criteria = ShipCriteria {
            prod_date: Range::between(
                Utc.with_ymd_and_hms(2800, 1, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2900, 1, 1, 0, 0, 0).unwrap(),
            ),
            ..Default::default()
        };
        let found = all(&fixture.store, &criteria).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].data.name, "Relic");
    }

    #[test]
    fn orders_by_rating() {
        let fixture = catalog();
        let page = run(
            &fixture.store,
            &ShipCriteria::default(),
            &PageRequest::new(0, 10, ShipOrder::Rating),
        )
        .unwrap();
        let ratings: Vec<f64> = page.items.iter().map(|s| s.data.rating).collect();
        assert!(ratings.windows(2).all(|w| w[0] <= w[1]), "{:?}", ratings);
        assert_eq!(page.items.last().unwrap().data.name, "Falcon");
    }

    #[test]
    fn combined_criteria_narrow_results() {
        let fixture = catalog();
        let criteria = ShipCriteria {
            ship_type: Some(ShipType::Merchant),
            is_used: Some(false),
            crew_size: Range::at_most(100),
            ..Default::default()
        };
        let names: Vec<String> = all(&fixture.store, &criteria)
            .unwrap()
            .into_iter()
            .map(|s| s.data.name)
            .collect();
        assert_eq!(names, vec!["Falcon".to_string()]);
    }
}
