//! # Command Layer
//!
//! This module contains the **core business logic** of the catalog. Each
//! operation lives in its own submodule as a plain `run` function generic over
//! [`ShipStore`](crate::store::ShipStore).
//!
//! ## Role and Responsibilities
//!
//! - Validate inbound drafts before touching the store
//! - Derive the rating on every write
//! - Compose listing filters from criteria
//! - Return domain types (`Ship`, `Page<Ship>`, `bool`, `u64`)
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** beyond the store: no stdout, no formatting
//! - **Argument parsing**: that's the client's job
//! - **Recovery or retries**: input errors and store errors go straight back
//!   to the caller
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` and cover every branch, including the
//! error paths. This is where most of the testing lives.
//!
//! ## Command Modules
//!
//! - [`create`]: Validate, default, rate and insert a new ship
//! - [`get`]: Fetch one ship by id
//! - [`update`]: Validate, merge, re-rate and persist
//! - [`delete`]: Remove a ship
//! - [`exists`]: Existence check
//! - [`list`]: Filtered listing (paged or not) and counting

pub mod create;
pub mod delete;
pub mod exists;
pub mod get;
pub mod list;
pub mod update;
