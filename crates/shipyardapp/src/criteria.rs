//! Listing criteria.
//!
//! [`ShipCriteria`] holds the optional inputs of a list request. Every field is
//! independent, and an absent field places no constraint on the result. The
//! translation into a store filter lives in [`crate::filter::compose`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ShipType;

/// An inclusive range where either end may be open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for Range<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T> Range<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    pub fn between(min: T, max: T) -> Self {
        Self::new(Some(min), Some(max))
    }

    pub fn at_least(min: T) -> Self {
        Self::new(Some(min), None)
    }

    pub fn at_most(max: T) -> Self {
        Self::new(None, Some(max))
    }

    /// True when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Filter inputs of a list request.
///
/// `prod_date.min` is the `after` bound and `prod_date.max` the `before` bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipCriteria {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    pub prod_date: Range<DateTime<Utc>>,
    pub is_used: Option<bool>,
    pub speed: Range<f64>,
    pub crew_size: Range<i32>,
    pub rating: Range<f64>,
}

impl ShipCriteria {
    /// True when no dimension carries a constraint.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.planet.is_none()
            && self.ship_type.is_none()
            && self.prod_date.is_unbounded()
            && self.is_used.is_none()
            && self.speed.is_unbounded()
            && self.crew_size.is_unbounded()
            && self.rating.is_unbounded()
    }
}
