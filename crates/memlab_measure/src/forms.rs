//! The seven derived forms built around a probe value.

use memlab_value::Value;
use thiserror::Error;

/// Key under which the probe value is stored in the "Dict (as Val)" form.
pub const MAP_VALUE_KEY: &str = "key";

/// One of the derived container forms, in table order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Text cast of the value.
    String,
    /// Integer cast of the value's text.
    Integer,
    /// `[value]`
    List,
    /// `(value,)`
    Tuple,
    /// `{value}`
    Set,
    /// `{value: 0}`
    DictKey,
    /// `{'key': value}`
    DictVal,
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::String,
        Shape::Integer,
        Shape::List,
        Shape::Tuple,
        Shape::Set,
        Shape::DictKey,
        Shape::DictVal,
    ];

    /// Row label.
    pub fn label(self) -> &'static str {
        match self {
            Shape::String => "String",
            Shape::Integer => "Integer",
            Shape::List => "List",
            Shape::Tuple => "Tuple",
            Shape::Set => "Set",
            Shape::DictKey => "Dict (as Key)",
            Shape::DictVal => "Dict (as Val)",
        }
    }
}

/// Why a form could not be built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum NotApplicable {
    /// The value cannot be a set member or map key.
    #[error("value is not hashable")]
    Unhashable,
    /// The value's text is not a plain integer.
    #[error("value text is not an integer")]
    NotInteger,
}

/// Integer cast of `text`: an optional leading `-` followed by ASCII digits
/// only, within `i64` range.
pub fn integer_cast(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Build the `shape` form around `value`.
///
/// `hashable` gates the set and dict-key forms; the factories are still
/// consulted, so a wrong flag yields a not-applicable row rather than an
/// invalid container.
pub fn build_form(shape: Shape, value: &Value, hashable: bool) -> Result<Value, NotApplicable> {
    match shape {
        Shape::String => Ok(Value::string(value.to_text())),
        Shape::Integer => integer_cast(&value.to_text())
            .map(Value::Int)
            .ok_or(NotApplicable::NotInteger),
        Shape::List => Ok(Value::list(vec![value.clone()])),
        Shape::Tuple => Ok(Value::tuple(vec![value.clone()])),
        Shape::Set if hashable => {
            Value::set(vec![value.clone()]).map_err(|_| NotApplicable::Unhashable)
        }
        Shape::DictKey if hashable => Value::map(vec![(value.clone(), Value::Int(0))])
            .map_err(|_| NotApplicable::Unhashable),
        Shape::Set | Shape::DictKey => Err(NotApplicable::Unhashable),
        Shape::DictVal => Value::map(vec![(Value::string(MAP_VALUE_KEY), value.clone())])
            .map_err(|_| NotApplicable::Unhashable),
    }
}

#[cfg(test)]
mod tests;
