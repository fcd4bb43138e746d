//! # Listing Filters
//!
//! Translating a [`ShipCriteria`](crate::criteria::ShipCriteria) into something
//! a store can run happens in two steps:
//!
//! 1. [`compose`] turns each present dimension into comparisons and AND-s them.
//! 2. The store runs the resulting [`FilterExpression`] against its rows.
//!
//! ## Per-Dimension Policy
//!
//! | Dimension | Predicate |
//! |-----------|-----------|
//! | `name`, `planet` | case-sensitive substring |
//! | `shipType`, `isUsed` | equality |
//! | `prodDate`, `speed`, `crewSize`, `rating` | inclusive range, either end optional |
//!
//! An absent dimension contributes nothing, so empty criteria compose to
//! [`FilterExpression::NoConstraint`] and list the whole catalog.
//!
//! ## Usage
//!
//! ```
//! use shipyardapp::criteria::{Range, ShipCriteria};
//! use shipyardapp::filter::{compose, FilterExpression};
//!
//! assert_eq!(compose(&ShipCriteria::default()), FilterExpression::NoConstraint);
//!
//! let criteria = ShipCriteria {
//!     name: Some("Star".into()),
//!     speed: Range::between(0.2, 0.8),
//!     ..Default::default()
//! };
//! assert_eq!(
//!     compose(&criteria).to_string(),
//!     "name contains \"Star\" AND speed >= 0.2 AND speed <= 0.8"
//! );
//! ```

mod compose;
mod expr;

pub use compose::compose;
pub use expr::{Compare, CompareOp, FilterExpression, Value};
