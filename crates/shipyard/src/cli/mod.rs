//! # CLI Behavior
//!
//! This is **one client** of the shipyard library, not the application itself.
//! For the overall architecture, see the library documentation in `shipyardapp`.
//!
//! ## Commands
//!
//! - `create`: all six required fields as flags, `--used` optional
//! - `get`, `delete`, `exists`: take a positive integer id
//! - `update`: id plus any subset of the ship fields
//! - `list`: criteria flags plus `--page`, `--page-size`, `--order`
//! - `count`: criteria flags
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Storage or environment failure |
//! | 2 | Bad request: missing field, validation failure, bad id, bad flag |
//! | 3 | Ship not found |
//!
//! ## Module Structure
//!
//! - `commands`: wiring of config, store and service, plus dispatch
//! - `render`: tables and JSON
//! - `setup`: argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;

use shipyardapp::error::{ErrorClass, ShipyardError};

/// Maps an error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ShipyardError>().map(ShipyardError::class) {
        Some(ErrorClass::BadRequest) => 2,
        Some(ErrorClass::NotFound) => 3,
        Some(ErrorClass::Internal) | None => 1,
    }
}
