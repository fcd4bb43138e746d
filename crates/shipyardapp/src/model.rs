//! # Domain Model
//!
//! This module defines the core data structures of the catalog: [`Ship`],
//! [`ShipData`], [`ShipDraft`], [`ShipType`] and [`ShipId`].
//!
//! ## Complete vs. Partial Records
//!
//! A persisted [`Ship`] always carries every field. Inbound writes arrive as a
//! [`ShipDraft`], where every field is optional:
//!
//! - **Create**: every required field must be present in the draft. `is_used`
//!   falls back to `false`. See [`ShipDraft::into_data`].
//! - **Update**: the draft is laid over the stored record. Present fields win,
//!   absent fields keep their stored value. See [`ShipDraft::apply_to`].
//!
//! In both cases the `rating` is never taken from the caller; it is recomputed
//! from `speed`, `is_used` and `prod_date` once the record is complete.
//!
//! ## Time Policy
//!
//! `prod_date` is a UTC instant. Its calendar year (used by validation and
//! rating) is always read in UTC, so results never depend on the host locale.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ShipyardError};
use crate::rating;

/// Store-assigned identifier of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipId(u64);

impl ShipId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Validates an id coming from a transport (signed, possibly garbage).
    pub fn parse(raw: i64) -> Result<Self> {
        if raw <= 0 {
            return Err(ShipyardError::InvalidId(raw));
        }
        Ok(Self(raw as u64))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipType {
    Transport,
    Military,
    Merchant,
}

impl ShipType {
    pub const ALL: [ShipType; 3] = [ShipType::Transport, ShipType::Military, ShipType::Merchant];

    pub fn as_str(self) -> &'static str {
        match self {
            ShipType::Transport => "TRANSPORT",
            ShipType::Military => "MILITARY",
            ShipType::Merchant => "MERCHANT",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipType {
    type Err = ShipyardError;

    fn from_str(s: &str) -> Result<Self> {
        ShipType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ShipyardError::Parse(format!(
                    "unknown ship type '{}' (expected TRANSPORT, MILITARY or MERCHANT)",
                    s
                ))
            })
    }
}

/// Names of the ship's fields, shared by validation errors and filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Name,
    Planet,
    ShipType,
    ProdDate,
    Speed,
    CrewSize,
    IsUsed,
    Rating,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Planet => "planet",
            Field::ShipType => "shipType",
            Field::ProdDate => "prodDate",
            Field::Speed => "speed",
            Field::CrewSize => "crewSize",
            Field::IsUsed => "isUsed",
            Field::Rating => "rating",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every persisted field of a ship except its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipData {
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: DateTime<Utc>,
    pub speed: f64,
    pub crew_size: i32,
    pub is_used: bool,
    pub rating: f64,
}

impl ShipData {
    /// Calendar year of `prod_date`, read in UTC.
    pub fn prod_year(&self) -> i32 {
        self.prod_date.year()
    }

    /// Recomputes `rating` from the current speed, usage flag and year.
    pub fn refresh_rating(&mut self) {
        self.rating = rating::rating(self.speed, self.is_used, self.prod_year());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: ShipId,
    #[serde(flatten)]
    pub data: ShipData,
}

/// A partial ship as supplied by a caller. Absent fields are `None`.
///
/// There is intentionally no `rating` here: it is always derived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipDraft {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    pub prod_date: Option<DateTime<Utc>>,
    pub speed: Option<f64>,
    pub crew_size: Option<i32>,
    pub is_used: Option<bool>,
}

impl ShipDraft {
    /// Returns the first required field (in declaration order) that is absent.
    pub fn first_missing(&self) -> Option<Field> {
        if self.name.is_none() {
            Some(Field::Name)
        } else if self.planet.is_none() {
            Some(Field::Planet)
        } else if self.ship_type.is_none() {
            Some(Field::ShipType)
        } else if self.prod_date.is_none() {
            Some(Field::ProdDate)
        } else if self.speed.is_none() {
            Some(Field::Speed)
        } else if self.crew_size.is_none() {
            Some(Field::CrewSize)
        } else {
            None
        }
    }

    /// Turns a complete draft into a record ready for insertion.
    ///
    /// Fails with `MissingField` naming the first absent required field.
    /// `is_used` defaults to `false`; the rating is computed here.
    pub fn into_data(self) -> Result<ShipData> {
        let missing = |field| ShipyardError::MissingField(field);
        let mut data = ShipData {
            name: self.name.ok_or_else(|| missing(Field::Name))?,
            planet: self.planet.ok_or_else(|| missing(Field::Planet))?,
            ship_type: self.ship_type.ok_or_else(|| missing(Field::ShipType))?,
            prod_date: self.prod_date.ok_or_else(|| missing(Field::ProdDate))?,
            speed: self.speed.ok_or_else(|| missing(Field::Speed))?,
            crew_size: self.crew_size.ok_or_else(|| missing(Field::CrewSize))?,
            is_used: self.is_used.unwrap_or(false),
            rating: 0.0,
        };
        data.refresh_rating();
        Ok(data)
    }

    /// Lays the present fields over `data` and recomputes the rating.
    pub fn apply_to(self, data: &mut ShipData) {
        if let Some(name) = self.name {
            data.name = name;
        }
        if let Some(planet) = self.planet {
            data.planet = planet;
        }
        if let Some(ship_type) = self.ship_type {
            data.ship_type = ship_type;
        }
        if let Some(prod_date) = self.prod_date {
            data.prod_date = prod_date;
        }
        if let Some(speed) = self.speed {
            data.speed = speed;
        }
        if let Some(crew_size) = self.crew_size {
            data.crew_size = crew_size;
        }
        if let Some(is_used) = self.is_used {
            data.is_used = is_used;
        }
        data.refresh_rating();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn full_draft() -> ShipDraft {
        ShipDraft {
            name: Some("Orion".into()),
            planet: Some("Mars".into()),
            ship_type: Some(ShipType::Merchant),
            prod_date: Some(Utc.with_ymd_and_hms(3015, 6, 1, 0, 0, 0).unwrap()),
            speed: Some(0.5),
            crew_size: Some(12),
            is_used: None,
        }
    }

    #[test]
    fn ship_id_rejects_non_positive() {
        assert!(matches!(
            ShipId::parse(0),
            Err(ShipyardError::InvalidId(0))
        ));
        assert!(matches!(
            ShipId::parse(-4),
            Err(ShipyardError::InvalidId(-4))
        ));
        assert_eq!(ShipId::parse(9).unwrap(), ShipId::new(9));
    }

    #[test]
    fn ship_type_parses_case_insensitively() {
        assert_eq!("military".parse::<ShipType>().unwrap(), ShipType::Military);
        assert_eq!("MERCHANT".parse::<ShipType>().unwrap(), ShipType::Merchant);
        assert!("cruiser".parse::<ShipType>().is_err());
    }

    #[test]
    fn into_data_defaults_is_used_and_rates() {
        let data = full_draft().into_data().unwrap();
        assert!(!data.is_used);
        assert_eq!(data.rating, 8.0);
    }

    #[test]
    fn into_data_reports_first_missing_field() {
        let draft = ShipDraft {
            planet: None,
            speed: None,
            ..full_draft()
        };
        assert_eq!(draft.first_missing(), Some(Field::Planet));
        match draft.into_data() {
            Err(ShipyardError::MissingField(Field::Planet)) => {}
            other => panic!("Expected MissingField(planet), got {:?}", other),
        }
    }

    #[test]
    fn apply_to_overwrites_only_present_fields() {
        let mut data = full_draft().into_data().unwrap();
        let patch = ShipDraft {
            planet: Some("Venus".into()),
            is_used: Some(true),
            ..Default::default()
        };
        patch.apply_to(&mut data);

        assert_eq!(data.name, "Orion");
        assert_eq!(data.planet, "Venus");
        assert_eq!(data.crew_size, 12);
        assert!(data.is_used);
        assert_eq!(data.rating, 4.0);
    }

    #[test]
    fn empty_patch_keeps_record_and_rating() {
        let mut data = full_draft().into_data().unwrap();
        let before = data.clone();
        ShipDraft::default().apply_to(&mut data);
        assert_eq!(data, before);
    }

    #[test]
    fn ship_serializes_flat_with_camel_case() {
        let ship = Ship {
            id: ShipId::new(3),
            data: full_draft().into_data().unwrap(),
        };
        let json = serde_json::to_value(&ship).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["shipType"], "MERCHANT");
        assert_eq!(json["crewSize"], 12);
        assert_eq!(json["isUsed"], false);

        let back: Ship = serde_json::from_value(json).unwrap();
        assert_eq!(back, ship);
    }
}
