//! Pagination and ordering of list results.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ShipyardError};
use crate::model::Ship;

pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// Sort key for listings. Always ascending, ties broken by id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "String")]
pub enum ShipOrder {
    #[default]
    Id,
    Speed,
    ProdDate,
    Rating,
}

impl ShipOrder {
    pub fn compare(self, a: &Ship, b: &Ship) -> Ordering {
        let primary = match self {
            ShipOrder::Id => Ordering::Equal,
            ShipOrder::Speed => a.data.speed.total_cmp(&b.data.speed),
            ShipOrder::ProdDate => a.data.prod_date.cmp(&b.data.prod_date),
            ShipOrder::Rating => a.data.rating.total_cmp(&b.data.rating),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

impl fmt::Display for ShipOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShipOrder::Id => "id",
            ShipOrder::Speed => "speed",
            ShipOrder::ProdDate => "prodDate",
            ShipOrder::Rating => "rating",
        };
        f.write_str(s)
    }
}

impl FromStr for ShipOrder {
    type Err = ShipyardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(ShipOrder::Id),
            "speed" => Ok(ShipOrder::Speed),
            "date" | "proddate" | "prod_date" => Ok(ShipOrder::ProdDate),
            "rating" => Ok(ShipOrder::Rating),
            _ => Err(ShipyardError::Parse(format!(
                "unknown order '{}' (expected id, speed, date or rating)",
                s
            ))),
        }
    }
}

impl TryFrom<String> for ShipOrder {
    type Error = ShipyardError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Which slice of the ordered result to return. `number` is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub number: u32,
    pub size: u32,
    pub order: ShipOrder,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: 0,
            size: DEFAULT_PAGE_SIZE,
            order: ShipOrder::Id,
        }
    }
}

impl PageRequest {
    /// A size of zero is raised to one.
    pub fn new(number: u32, size: u32, order: ShipOrder) -> Self {
        Self {
            number,
            size: size.max(1),
            order,
        }
    }

    pub fn offset(&self) -> usize {
        self.number as usize * self.size.max(1) as usize
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Cuts the requested page out of an already ordered result.
    pub fn slice(all: Vec<T>, request: &PageRequest) -> Self {
        let size = request.size.max(1);
        let total_items = all.len() as u64;
        let total_pages = total_items.div_ceil(u64::from(size));
        let items = all
            .into_iter()
            .skip(request.offset())
            .take(size as usize)
            .collect();
        Self {
            items,
            number: request.number,
            size,
            total_items,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_is_first_page_of_three_by_id() {
        let request = PageRequest::default();
        assert_eq!(request.number, 0);
        assert_eq!(request.size, 3);
        assert_eq!(request.order, ShipOrder::Id);
    }

    #[test]
    fn slice_cuts_pages() {
        let all: Vec<u32> = (1..=7).collect();
        let page = Page::slice(all.clone(), &PageRequest::new(1, 3, ShipOrder::Id));
        assert_eq!(page.items, vec![4, 5, 6]);
        assert_eq!(page.total_items, 7);
        assert_eq!(page.total_pages, 3);

        let last = Page::slice(all.clone(), &PageRequest::new(2, 3, ShipOrder::Id));
        assert_eq!(last.items, vec![7]);

        let beyond = Page::slice(all, &PageRequest::new(5, 3, ShipOrder::Id));
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total_pages, 3);
    }

    #[test]
    fn zero_size_is_raised_to_one() {
        let request = PageRequest::new(0, 0, ShipOrder::Id);
        assert_eq!(request.size, 1);
        let page = Page::slice(vec![1, 2], &request);
        assert_eq!(page.items, vec![1]);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn empty_result_has_no_pages() {
        let page: Page<u32> = Page::slice(Vec::new(), &PageRequest::default());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn order_parses_aliases() {
        assert_eq!("date".parse::<ShipOrder>().unwrap(), ShipOrder::ProdDate);
        assert_eq!("prodDate".parse::<ShipOrder>().unwrap(), ShipOrder::ProdDate);
        assert_eq!("RATING".parse::<ShipOrder>().unwrap(), ShipOrder::Rating);
        assert!("crew".parse::<ShipOrder>().is_err());
    }
}
