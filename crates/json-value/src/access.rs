//! Keyed and indexed lookup, and object merging.
//!
//! Lookups come in two flavors. The passthrough [`Value::get`] hands back the
//! receiver itself when it is not the right kind of container, so chains of
//! lookups over scalars are no-ops. The strict [`Value::get_strict`] returns
//! `None` instead.

use std::ops::Index;

use tracing::debug;

use crate::error::{Error, Result};
use crate::value::{Value, ValueKind};

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: Sealed + ?Sized> Sealed for &T {}
}

/// A key into an object (`&str`, `String`) or a position in an array
/// (`usize`).
///
/// Sealed; it cannot be implemented outside this crate.
pub trait ValueIndex: private::Sealed {
    #[doc(hidden)]
    fn addresses(&self, value: &Value) -> bool;

    #[doc(hidden)]
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value>;

    #[doc(hidden)]
    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value>;
}

impl ValueIndex for usize {
    fn addresses(&self, value: &Value) -> bool {
        value.is_array()
    }

    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match value {
            Value::Array(items) => items.get(*self),
            _ => None,
        }
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        match value {
            Value::Array(items) => items.get_mut(*self),
            _ => None,
        }
    }
}

impl ValueIndex for str {
    fn addresses(&self, value: &Value) -> bool {
        value.is_object()
    }

    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match value {
            Value::Object(map) => map.get(self),
            _ => None,
        }
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        match value {
            Value::Object(map) => map.get_mut(self),
            _ => None,
        }
    }
}

impl ValueIndex for String {
    fn addresses(&self, value: &Value) -> bool {
        self.as_str().addresses(value)
    }

    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        self.as_str().index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        self.as_str().index_into_mut(value)
    }
}

impl<T> ValueIndex for &T
where
    T: ValueIndex + ?Sized,
{
    fn addresses(&self, value: &Value) -> bool {
        (**self).addresses(value)
    }

    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        (**self).index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        (**self).index_into_mut(value)
    }
}

impl Value {
    /// Passthrough lookup.
    ///
    /// On an object (for a key) or an array (for a position), returns the
    /// entry, or `None` when the key is missing or the position is out of
    /// bounds. On any other receiver, returns the receiver itself.
    ///
    /// # Example
    ///
    /// ```
    /// use json_value::Value;
    ///
    /// let doc = Value::decode(r#"{"tags": ["a", "b"]}"#).unwrap();
    /// assert_eq!(doc.get("tags").and_then(|t| t.get(1)), Some(&Value::string("b")));
    /// assert_eq!(doc.get("missing"), None);
    ///
    /// let scalar = Value::number(7.0);
    /// assert_eq!(scalar.get("anything"), Some(&scalar));
    /// assert_eq!(scalar.get(3), Some(&scalar));
    /// ```
    pub fn get<I: ValueIndex>(&self, index: I) -> Option<&Value> {
        if index.addresses(self) {
            index.index_into(self)
        } else {
            Some(self)
        }
    }

    /// Strict lookup: like [`Value::get`], but `None` when the receiver is
    /// not the container kind the index addresses.
    ///
    /// # Example
    ///
    /// ```
    /// use json_value::Value;
    ///
    /// assert_eq!(Value::number(7.0).get_strict("anything"), None);
    /// assert_eq!(Value::EMPTY_OBJECT.get_strict(0), None);
    /// ```
    pub fn get_strict<I: ValueIndex>(&self, index: I) -> Option<&Value> {
        index.index_into(self)
    }

    /// Strict mutable lookup.
    pub fn get_mut<I: ValueIndex>(&mut self, index: I) -> Option<&mut Value> {
        index.index_into_mut(self)
    }

    /// Unchecked positional access.
    ///
    /// Returns the receiver itself when it is not an array.
    ///
    /// # Panics
    ///
    /// Panics if the receiver is an array and `position` is out of bounds.
    pub fn at(&self, position: usize) -> &Value {
        match self {
            Value::Array(items) => &items[position],
            _ => self,
        }
    }

    /// Merges two objects into a new one.
    ///
    /// The result holds every key of either operand. When both have a key,
    /// the receiver's value is kept. Values are taken whole; nested objects
    /// are not merged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MergeOnNonObject`] unless both operands are objects.
    ///
    /// # Example
    ///
    /// ```
    /// use json_value::Value;
    ///
    /// let a = Value::decode(r#"{"x": 1}"#).unwrap();
    /// let b = Value::decode(r#"{"x": 2, "y": 3}"#).unwrap();
    /// assert_eq!(a.merge_object(&b).unwrap(), Value::decode(r#"{"x": 1, "y": 3}"#).unwrap());
    /// ```
    pub fn merge_object(&self, other: &Value) -> Result<Value> {
        match (self, other) {
            (Value::Object(receiver), Value::Object(argument)) => {
                let mut merged = receiver.clone();
                for (key, value) in argument {
                    if !merged.contains_key(key) {
                        merged.insert(key.clone(), value.clone());
                    }
                }
                Ok(Value::Object(merged))
            }
            _ => Err(merge_error(self.kind(), other.kind())),
        }
    }

    /// In-place form of [`Value::merge_object`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MergeOnNonObject`] unless both operands are objects.
    /// The receiver is left untouched on error.
    pub fn merge_object_in_place(&mut self, other: Value) -> Result<()> {
        let receiver_kind = self.kind();
        let argument_kind = other.kind();
        match (self.as_object_mut(), other) {
            (Some(receiver), Value::Object(argument)) => {
                for (key, value) in argument {
                    receiver.entry(key).or_insert(value);
                }
                Ok(())
            }
            _ => Err(merge_error(receiver_kind, argument_kind)),
        }
    }
}

fn merge_error(receiver: ValueKind, argument: ValueKind) -> Error {
    debug!(%receiver, %argument, "merge requires two objects");
    Error::MergeOnNonObject { receiver, argument }
}

impl Index<usize> for Value {
    type Output = Value;

    /// Same as [`Value::at`].
    fn index(&self, position: usize) -> &Value {
        self.at(position)
    }
}
