//! # Shipyard Architecture
//!
//! Shipyard is a **UI-agnostic ship catalog library**. It keeps a collection of
//! spaceship records, derives a rating for each one, validates every write, and
//! answers filtered, sorted and paged queries. The bundled CLI is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the `shipyard` binary, or anything else)           │
//! │  - Parses input, formats output, maps errors to exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service Layer (api.rs)                                     │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, rating, merge rules                          │
//! │  - Criteria → filter composition                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ShipStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the
//! process and never assumes a terminal. Diagnostics go through `tracing`; the
//! client decides whether and where they are printed.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of the business rules against
//!    `InMemoryStore`. Most of the testing lives here.
//! 2. **Service** (`api.rs`): dispatch tests.
//! 3. **Store** (`store/`): in-memory behavior plus file round trips in a temp dir.
//! 4. **CLI**: end-to-end runs of the binary against a temp data file.
//!
//! ## Module Overview
//!
//! - [`api`]: The service facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Ship`, `ShipData`, `ShipDraft`, `ShipType`)
//! - [`criteria`]: Optional search criteria supplied by clients
//! - [`filter`]: Filter expressions and their composition from criteria
//! - [`page`]: Page requests, ordering and result pages
//! - [`rating`]: The derived rating and its rounding
//! - [`validation`]: Field rules for create and update
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod criteria;
pub mod error;
pub mod filter;
pub mod model;
pub mod page;
pub mod rating;
pub mod store;
pub mod validation;
