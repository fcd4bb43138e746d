use crate::criteria::{Range, ShipCriteria};
use crate::model::Field;

use super::expr::{CompareOp, FilterExpression, Value};

/// Builds the store filter for a list request.
///
/// Each present dimension yields its predicates and the whole is one
/// conjunction; absent dimensions yield nothing. Empty criteria give
/// [`FilterExpression::NoConstraint`].
pub fn compose(criteria: &ShipCriteria) -> FilterExpression {
    FilterExpression::and([
        contains(Field::Name, criteria.name.as_deref()),
        contains(Field::Planet, criteria.planet.as_deref()),
        equals(Field::ShipType, criteria.ship_type.map(Value::ShipType)),
        range(Field::ProdDate, &criteria.prod_date, Value::Instant),
        equals(Field::IsUsed, criteria.is_used.map(Value::Bool)),
        range(Field::Speed, &criteria.speed, Value::Decimal),
        range(Field::CrewSize, &criteria.crew_size, Value::Integer),
        range(Field::Rating, &criteria.rating, Value::Decimal),
    ])
}

fn contains(field: Field, needle: Option<&str>) -> FilterExpression {
    match needle {
        Some(needle) => FilterExpression::compare(
            field,
            CompareOp::Contains,
            Value::Text(needle.to_string()),
        ),
        None => FilterExpression::NoConstraint,
    }
}

fn equals(field: Field, value: Option<Value>) -> FilterExpression {
    match value {
        Some(value) => FilterExpression::compare(field, CompareOp::Eq, value),
        None => FilterExpression::NoConstraint,
    }
}

/// Inclusive on both ends; each bound contributes only when present.
fn range<T: Copy>(field: Field, range: &Range<T>, wrap: fn(T) -> Value) -> FilterExpression {
    let lower = range
        .min
        .map(|min| FilterExpression::compare(field, CompareOp::Gte, wrap(min)));
    let upper = range
        .max
        .map(|max| FilterExpression::compare(field, CompareOp::Lte, wrap(max)));
    FilterExpression::and(lower.into_iter().chain(upper))
}
