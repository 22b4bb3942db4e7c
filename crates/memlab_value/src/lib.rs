//! Value model for memlab.
//!
//! A probe value is one of a closed set of variants. Scalars are stored
//! inline; strings and containers live behind [`Heap`], a shared handle whose
//! allocation identity lets the size walker count each allocation once.
//!
//! # Construction
//!
//! Heap values are only built through factory methods, which trim every
//! buffer to its length so equal values always own equal allocations:
//!
//! ```text
//! let s = Value::string("nome");
//! let l = Value::list(vec![Value::Int(1), Value::Int(2)]);
//! let set = Value::set(vec![Value::Int(1)])?;           // may be Unhashable
//! let map = Value::map(vec![(Value::string("key"), Value::Int(0))])?;
//! ```
//!
//! # Hashability
//!
//! Lists, sets and maps are mutable containers and cannot be set members or
//! map keys. Tuples are hashable only when every element is.

mod heap;
mod repr;

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

pub use heap::Heap;

/// A set member or map key that cannot be hashed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unhashable type: '{type_name}'")]
pub struct Unhashable {
    /// Type name of the offending value.
    pub type_name: &'static str,
}

/// A probe value or a container derived from one.
#[derive(Clone)]
pub enum Value {
    // Scalars (inline, no allocation)
    /// The absent value.
    None,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),

    // Heap-backed
    /// Text.
    Str(Heap<String>),
    /// Ordered, mutable sequence.
    List(Heap<Vec<Value>>),
    /// Ordered, immutable sequence.
    Tuple(Heap<Vec<Value>>),
    /// Unique hashable members in insertion order.
    Set(Heap<Vec<Value>>),
    /// Unique hashable keys in insertion order.
    Map(Heap<Vec<(Value, Value)>>),
}

// Factory Methods

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        let mut text = s.into();
        text.shrink_to_fit();
        Value::Str(Heap::new(text))
    }

    /// Create a list value.
    pub fn list(mut items: Vec<Value>) -> Self {
        items.shrink_to_fit();
        Value::List(Heap::new(items))
    }

    /// Create a tuple value.
    pub fn tuple(mut items: Vec<Value>) -> Self {
        items.shrink_to_fit();
        Value::Tuple(Heap::new(items))
    }

    /// Create a set value, dropping duplicate members.
    ///
    /// Fails on the first unhashable member.
    pub fn set(items: Vec<Value>) -> Result<Self, Unhashable> {
        let mut seen = FxHashSet::default();
        let mut members = Vec::with_capacity(items.len());
        for item in items {
            item.ensure_hashable()?;
            if seen.insert(item.clone()) {
                members.push(item);
            }
        }
        members.shrink_to_fit();
        Ok(Value::Set(Heap::new(members)))
    }

    /// Create a map value.
    ///
    /// A repeated key keeps its first position and takes the last value.
    /// Fails on the first unhashable key.
    pub fn map(entries: Vec<(Value, Value)>) -> Result<Self, Unhashable> {
        let mut index: FxHashMap<Value, usize> = FxHashMap::default();
        let mut out: Vec<(Value, Value)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            key.ensure_hashable()?;
            if let Some(&slot) = index.get(&key) {
                out[slot].1 = value;
            } else {
                index.insert(key.clone(), out.len());
                out.push((key, value));
            }
        }
        out.shrink_to_fit();
        Ok(Value::Map(Heap::new(out)))
    }
}

// Value Methods

impl Value {
    /// Whether the value can be a set member or map key.
    ///
    /// Every scalar is hashable, `None` included, so `{None}` and
    /// `{None: 0}` are valid containers.
    pub fn is_hashable(&self) -> bool {
        match self {
            Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => true,
            Value::Tuple(items) => items.iter().all(Value::is_hashable),
            Value::List(_) | Value::Set(_) | Value::Map(_) => false,
        }
    }

    /// Fails with the type of the first unhashable part of this value.
    fn ensure_hashable(&self) -> Result<(), Unhashable> {
        match self {
            Value::Tuple(items) => items.iter().try_for_each(Value::ensure_hashable),
            Value::List(_) | Value::Set(_) | Value::Map(_) => Err(Unhashable {
                type_name: self.type_name(),
            }),
            _ => Ok(()),
        }
    }

    /// Get the type name for messages and logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
        }
    }

    /// Text conversion: strings yield their raw text, everything else its
    /// literal rendering.
    pub fn to_text(&self) -> String {
        match self {
            Value::Str(s) => s.to_string(),
            other => other.to_string(),
        }
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x:?})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Tuple(items) => write!(f, "Tuple({:?})", &**items),
            Value::Set(items) => write!(f, "Set({:?})", &**items),
            Value::Map(entries) => write!(f, "Map({:?})", &**entries),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => repr::write_float(f, *x),
            Value::Str(s) => repr::write_quoted(f, s),
            Value::List(items) => {
                f.write_str("[")?;
                repr::write_items(f, items)?;
                f.write_str("]")
            }
            Value::Tuple(items) => {
                f.write_str("(")?;
                repr::write_items(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Value::Set(items) if items.is_empty() => f.write_str("set()"),
            Value::Set(items) => {
                f.write_str("{")?;
                repr::write_items(f, items)?;
                f.write_str("}")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                repr::write_entries(f, entries)?;
                f.write_str("}")
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b))
            | (Value::Tuple(a), Value::Tuple(b))
            | (Value::Set(a), Value::Set(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Value::None => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(n) => n.hash(state),
            // -0.0 == 0.0, so both must hash alike
            Value::Float(x) => {
                let bits = if *x == 0.0 { 0 } else { x.to_bits() };
                bits.hash(state);
            }
            Value::Str(s) => s.hash(state),
            Value::List(items) | Value::Tuple(items) | Value::Set(items) => {
                items.len().hash(state);
                for item in items.iter() {
                    item.hash(state);
                }
            }
            Value::Map(entries) => {
                entries.len().hash(state);
                for (key, value) in entries.iter() {
                    key.hash(state);
                    value.hash(state);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
