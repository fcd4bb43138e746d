use crate::model::{Field, ShipId};
use crate::validation::Rule;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShipyardError {
    #[error("Missing required field: {0}")]
    MissingField(Field),

    #[error("Invalid {field}: {rule}")]
    Validation { field: Field, rule: Rule },

    #[error("Ship not found: {0}")]
    NotFound(ShipId),

    #[error("Invalid ship id: {0} (must be a positive integer)")]
    InvalidId(i64),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),
}

/// Coarse outcome class a transport maps an error onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The caller sent something unacceptable (missing field, bad range, bad id).
    BadRequest,
    /// The addressed ship does not exist.
    NotFound,
    /// Store or environment failure.
    Internal,
}

impl ErrorClass {
    /// HTTP-equivalent status code for this class.
    pub fn http_status(self) -> u16 {
        match self {
            ErrorClass::BadRequest => 400,
            ErrorClass::NotFound => 404,
            ErrorClass::Internal => 500,
        }
    }
}

impl ShipyardError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ShipyardError::MissingField(_)
            | ShipyardError::Validation { .. }
            | ShipyardError::InvalidId(_)
            | ShipyardError::Parse(_) => ErrorClass::BadRequest,
            ShipyardError::NotFound(_) => ErrorClass::NotFound,
            ShipyardError::Io(_)
            | ShipyardError::Serialization(_)
            | ShipyardError::Config(_)
            | ShipyardError::Store(_) => ErrorClass::Internal,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.class() != ErrorClass::Internal
    }
}

pub type Result<T> = std::result::Result<T, ShipyardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_bad_requests() {
        assert_eq!(
            ShipyardError::MissingField(Field::Name).class(),
            ErrorClass::BadRequest
        );
        assert_eq!(ShipyardError::InvalidId(0).class().http_status(), 400);
        let err = ShipyardError::Validation {
            field: Field::CrewSize,
            rule: Rule::IntegerBetween(1, 9999),
        };
        assert!(err.is_client_error());
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ShipyardError::NotFound(ShipId::new(7));
        assert_eq!(err.class().http_status(), 404);
        assert_eq!(err.to_string(), "Ship not found: 7");
    }

    #[test]
    fn store_failures_are_internal() {
        let err = ShipyardError::Store("disk on fire".into());
        assert_eq!(err.class(), ErrorClass::Internal);
        assert!(!err.is_client_error());
    }

    #[test]
    fn validation_message_names_field_and_rule() {
        let err = ShipyardError::Validation {
            field: Field::Name,
            rule: Rule::LengthBetween(1, 50),
        };
        assert_eq!(
            err.to_string(),
            "Invalid name: length must be between 1 and 50"
        );
    }
}
