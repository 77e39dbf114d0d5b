//! The [`Value`] data model.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Object payload of a [`Value`].
///
/// Keys are unique. Iteration order is by key, which keeps encoding and
/// hashing deterministic; insertion order is not preserved.
pub type Map = BTreeMap<String, Value>;

/// A container for untyped JSON values.
///
/// Every legal JSON value maps to exactly one variant. There is a single
/// numeric representation (`f64`) and no "absent" variant: lookups that miss
/// return `None` instead.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A JSON string.
    String(String),
    /// A JSON number.
    Number(f64),
    /// A JSON boolean.
    Bool(bool),
    /// A JSON object. All values are recursively other `Value`s.
    Object(Map),
    /// A JSON array. All elements are recursively other `Value`s.
    Array(Vec<Value>),
    /// JSON `null`.
    #[default]
    Null,
}

/// The variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    Bool,
    Object,
    Array,
    Null,
}

impl ValueKind {
    /// Lowercase JSON type name.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Bool => "boolean",
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// An object with no entries.
    ///
    /// Encodes to `{}`, never to `null`.
    pub const EMPTY_OBJECT: Value = Value::Object(Map::new());

    /// Returns [`Value::EMPTY_OBJECT`].
    pub fn empty_object() -> Value {
        Value::EMPTY_OBJECT
    }

    pub fn string(s: impl Into<String>) -> Value {
        Value::String(s.into())
    }

    pub fn number(n: f64) -> Value {
        Value::Number(n)
    }

    pub fn bool(b: bool) -> Value {
        Value::Bool(b)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Bool,
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
            Value::Null => ValueKind::Null,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

// `NaN != NaN` makes `Eq` non-reflexive for that one payload. JSON text cannot
// produce it, and encoding rejects it.
impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::String(s) => s.hash(state),
            Value::Number(n) => number_hash_bits(*n).hash(state),
            Value::Bool(b) => b.hash(state),
            Value::Object(map) => map.hash(state),
            Value::Array(items) => items.hash(state),
            Value::Null => {}
        }
    }
}

/// `-0.0 == 0.0`, so both must hash the same.
fn number_hash_bits(n: f64) -> u64 {
    if n == 0.0 {
        0.0f64.to_bits()
    } else {
        n.to_bits()
    }
}
