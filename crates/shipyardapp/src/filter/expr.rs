//! Filter expressions.
//!
//! A [`FilterExpression`] is a closed tree: a conjunction of comparisons, or
//! the empty filter [`FilterExpression::NoConstraint`]. Stores either evaluate
//! it directly with [`FilterExpression::matches`] or translate it into their
//! own query language.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;

use crate::model::{Field, Ship, ShipType};

/// A typed literal on the right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    ShipType(ShipType),
    Instant(DateTime<Utc>),
    Decimal(f64),
    Integer(i32),
    Bool(bool),
}

impl Value {
    /// Reads `field` from a ship.
    pub fn of(ship: &Ship, field: Field) -> Value {
        let data = &ship.data;
        match field {
            Field::Name => Value::Text(data.name.clone()),
            Field::Planet => Value::Text(data.planet.clone()),
            Field::ShipType => Value::ShipType(data.ship_type),
            Field::ProdDate => Value::Instant(data.prod_date),
            Field::Speed => Value::Decimal(data.speed),
            Field::CrewSize => Value::Integer(data.crew_size),
            Field::IsUsed => Value::Bool(data.is_used),
            Field::Rating => Value::Decimal(data.rating),
        }
    }

    /// Orders two values of the same kind. Mixed kinds are incomparable.
    fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Instant(a), Value::Instant(b)) => Some(a.cmp(b)),
            (Value::Decimal(a), Value::Decimal(b)) => a.partial_cmp(b),
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::ShipType(a), Value::ShipType(b)) => (a == b).then_some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{:?}", s),
            Value::ShipType(t) => write!(f, "{}", t),
            Value::Instant(t) => write!(f, "{}", t.to_rfc3339()),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Exact equality.
    Eq,
    /// Greater than or equal (inclusive lower bound).
    Gte,
    /// Less than or equal (inclusive upper bound).
    Lte,
    /// Case-sensitive substring match on text.
    Contains,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompareOp::Eq => "=",
            CompareOp::Gte => ">=",
            CompareOp::Lte => "<=",
            CompareOp::Contains => "contains",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Compare {
    pub field: Field,
    pub op: CompareOp,
    pub value: Value,
}

impl Compare {
    pub fn new(field: Field, op: CompareOp, value: Value) -> Self {
        Self { field, op, value }
    }

    /// Returns `false` when the ship's value and the literal are of different kinds.
    pub fn matches(&self, ship: &Ship) -> bool {
        let actual = Value::of(ship, self.field);
        match self.op {
            CompareOp::Eq => actual.compare(&self.value) == Some(Ordering::Equal),
            CompareOp::Gte => matches!(
                actual.compare(&self.value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            CompareOp::Lte => matches!(
                actual.compare(&self.value),
                Some(Ordering::Less | Ordering::Equal)
            ),
            CompareOp::Contains => match (&actual, &self.value) {
                (Value::Text(haystack), Value::Text(needle)) => haystack.contains(needle.as_str()),
                _ => false,
            },
        }
    }
}

impl fmt::Display for Compare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterExpression {
    /// Matches every ship.
    #[default]
    NoConstraint,
    Compare(Compare),
    /// Matches when every child matches.
    And(Vec<FilterExpression>),
}

impl FilterExpression {
    pub fn compare(field: Field, op: CompareOp, value: Value) -> Self {
        Self::Compare(Compare::new(field, op, value))
    }

    /// Conjunction in normal form.
    ///
    /// Nested `And`s are flattened and `NoConstraint` children dropped. No
    /// children left gives `NoConstraint`; a single child is returned as is.
    pub fn and(parts: impl IntoIterator<Item = FilterExpression>) -> Self {
        let mut flat = Vec::new();
        for part in parts {
            match part {
                FilterExpression::NoConstraint => {}
                FilterExpression::And(children) => flat.extend(children),
                leaf @ FilterExpression::Compare(_) => flat.push(leaf),
            }
        }
        match flat.len() {
            0 => FilterExpression::NoConstraint,
            1 => flat.remove(0),
            _ => FilterExpression::And(flat),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        matches!(self, FilterExpression::NoConstraint)
    }

    pub fn matches(&self, ship: &Ship) -> bool {
        match self {
            FilterExpression::NoConstraint => true,
            FilterExpression::Compare(cmp) => cmp.matches(ship),
            FilterExpression::And(children) => children.iter().all(|c| c.matches(ship)),
        }
    }

    /// The comparisons of this expression, in order.
    pub fn comparisons(&self) -> Vec<&Compare> {
        match self {
            FilterExpression::NoConstraint => Vec::new(),
            FilterExpression::Compare(cmp) => vec![cmp],
            FilterExpression::And(children) => {
                children.iter().flat_map(|c| c.comparisons()).collect()
            }
        }
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterExpression::NoConstraint => f.write_str("(no constraint)"),
            FilterExpression::Compare(cmp) => write!(f, "{}", cmp),
            FilterExpression::And(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" AND ")?;
                    }
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
        }
    }
}
