//! Field constraints for ship writes.
//!
//! | Field | Rule |
//! |-------|------|
//! | name | 1 to 50 characters |
//! | planet | 1 to 50 characters |
//! | crewSize | integer in 1..=9999 |
//! | speed | 0.01..=0.99 |
//! | prodDate | UTC year in 2800..=3019 |
//!
//! Only present fields are checked. Checks run in the order above and stop at
//! the first failure. Presence of required fields is a separate concern,
//! see [`require_complete`].

use chrono::{DateTime, Datelike, Utc};
use std::fmt;

use crate::error::{Result, ShipyardError};
use crate::model::{Field, ShipDraft};
use crate::rating::CURRENT_YEAR;

pub const MAX_TEXT_LEN: usize = 50;
pub const MIN_CREW_SIZE: i32 = 1;
pub const MAX_CREW_SIZE: i32 = 9999;
pub const MIN_SPEED: f64 = 0.01;
pub const MAX_SPEED: f64 = 0.99;
pub const FIRST_PROD_YEAR: i32 = 2800;
pub const LAST_PROD_YEAR: i32 = CURRENT_YEAR;

/// The rule a field violated.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    LengthBetween(usize, usize),
    IntegerBetween(i32, i32),
    DecimalBetween(f64, f64),
    YearBetween(i32, i32),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::LengthBetween(min, max) => {
                write!(f, "length must be between {} and {}", min, max)
            }
            Rule::IntegerBetween(min, max) => write!(f, "must be between {} and {}", min, max),
            Rule::DecimalBetween(min, max) => write!(f, "must be between {} and {}", min, max),
            Rule::YearBetween(min, max) => {
                write!(f, "year must be between {} and {}", min, max)
            }
        }
    }
}

fn violation(field: Field, rule: Rule) -> ShipyardError {
    ShipyardError::Validation { field, rule }
}

fn check_text(field: Field, value: &str) -> Result<()> {
    let len = value.chars().count();
    if !(1..=MAX_TEXT_LEN).contains(&len) {
        return Err(violation(field, Rule::LengthBetween(1, MAX_TEXT_LEN)));
    }
    Ok(())
}

fn check_crew_size(value: i32) -> Result<()> {
    if !(MIN_CREW_SIZE..=MAX_CREW_SIZE).contains(&value) {
        return Err(violation(
            Field::CrewSize,
            Rule::IntegerBetween(MIN_CREW_SIZE, MAX_CREW_SIZE),
        ));
    }
    Ok(())
}

fn check_speed(value: f64) -> Result<()> {
    // NaN fails the range test as well
    if !(MIN_SPEED..=MAX_SPEED).contains(&value) {
        return Err(violation(
            Field::Speed,
            Rule::DecimalBetween(MIN_SPEED, MAX_SPEED),
        ));
    }
    Ok(())
}

fn check_prod_date(value: &DateTime<Utc>) -> Result<()> {
    if !(FIRST_PROD_YEAR..=LAST_PROD_YEAR).contains(&value.year()) {
        return Err(violation(
            Field::ProdDate,
            Rule::YearBetween(FIRST_PROD_YEAR, LAST_PROD_YEAR),
        ));
    }
    Ok(())
}

/// Validates every present field of `draft`, reporting the first violation.
pub fn validate(draft: &ShipDraft) -> Result<()> {
    if let Some(name) = &draft.name {
        check_text(Field::Name, name)?;
    }
    if let Some(planet) = &draft.planet {
        check_text(Field::Planet, planet)?;
    }
    if let Some(crew_size) = draft.crew_size {
        check_crew_size(crew_size)?;
    }
    if let Some(speed) = draft.speed {
        check_speed(speed)?;
    }
    if let Some(prod_date) = &draft.prod_date {
        check_prod_date(prod_date)?;
    }
    Ok(())
}

/// Fails with `MissingField` if any field required on create is absent.
pub fn require_complete(draft: &ShipDraft) -> Result<()> {
    match draft.first_missing() {
        Some(field) => Err(ShipyardError::MissingField(field)),
        None => Ok(()),
    }
}
