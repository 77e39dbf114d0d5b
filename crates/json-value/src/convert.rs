//! Typed conversions between native types and [`Value`].
//!
//! [`JsonConvertible`] is the direct mapping: a total projection into a
//! `Value` and a partial injection back out. [`JsonInterpolatable`] is the
//! indirect one: a type names a "core" type that is already convertible and
//! supplies two small adapters, and gets `JsonConvertible` for free.
//!
//! A failed conversion is not an error. It shows up as `None`, the same as a
//! lookup miss.

use std::path::PathBuf;

use crate::access::ValueIndex;
use crate::value::{Map, Value};

/// Direct conversion to and from [`Value`].
///
/// # Example
///
/// ```
/// use json_value::{JsonConvertible, Value};
///
/// struct Celsius(f64);
///
/// impl JsonConvertible for Celsius {
///     fn to_json(&self) -> Value {
///         Value::number(self.0)
///     }
///
///     fn from_json(value: &Value) -> Option<Self> {
///         value.as_f64().map(Celsius)
///     }
/// }
///
/// let doc = Value::decode(r#"{"temp": 21.5}"#).unwrap();
/// assert_eq!(doc.get_as::<Celsius, _>("temp").map(|c| c.0), Some(21.5));
/// ```
pub trait JsonConvertible: Sized {
    fn to_json(&self) -> Value;

    /// Returns `None` if `value` has the wrong shape for `Self`.
    fn from_json(value: &Value) -> Option<Self>;
}

/// Conversion routed through an intermediate, already convertible type.
///
/// # Example
///
/// ```
/// use json_value::{JsonConvertible, JsonInterpolatable, Value};
///
/// #[derive(Debug, PartialEq)]
/// struct Port(u16);
///
/// impl JsonInterpolatable for Port {
///     type Core = u16;
///
///     fn to_core(&self) -> u16 {
///         self.0
///     }
///
///     fn from_core(core: u16) -> Option<Self> {
///         (core != 0).then_some(Port(core))
///     }
/// }
///
/// assert_eq!(Port(8080).to_json(), Value::number(8080.0));
/// assert_eq!(Port::from_json(&Value::number(0.0)), None);
/// ```
pub trait JsonInterpolatable: Sized {
    type Core: JsonConvertible;

    fn to_core(&self) -> Self::Core;

    fn from_core(core: Self::Core) -> Option<Self>;
}

impl<T> JsonConvertible for T
where
    T: JsonInterpolatable,
{
    fn to_json(&self) -> Value {
        self.to_core().to_json()
    }

    fn from_json(value: &Value) -> Option<Self> {
        T::Core::from_json(value).and_then(T::from_core)
    }
}

impl JsonConvertible for Value {
    fn to_json(&self) -> Value {
        self.clone()
    }

    fn from_json(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl JsonConvertible for String {
    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl JsonConvertible for f64 {
    fn to_json(&self) -> Value {
        Value::Number(*self)
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl JsonConvertible for bool {
    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl JsonConvertible for Map {
    fn to_json(&self) -> Value {
        Value::Object(self.clone())
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

/// All or nothing: one element that fails to convert rejects the array.
impl<T> JsonConvertible for Vec<T>
where
    T: JsonConvertible,
{
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(JsonConvertible::to_json).collect())
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::from_json).collect()
    }
}

/// `Null` converts to `Some(None)`. Anything else goes through `T`, so
/// `None` means `T` rejected a non-null value.
impl<T> JsonConvertible for Option<T>
where
    T: JsonConvertible,
{
    fn to_json(&self) -> Value {
        match self {
            Some(inner) => inner.to_json(),
            None => Value::Null,
        }
    }

    fn from_json(value: &Value) -> Option<Self> {
        if value.is_null() {
            return Some(None);
        }
        T::from_json(value).map(Some)
    }
}

/// Integers go through `f64` and only accept integral numbers in range.
macro_rules! interpolate_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl JsonInterpolatable for $ty {
                type Core = f64;

                fn to_core(&self) -> f64 {
                    *self as f64
                }

                fn from_core(core: f64) -> Option<Self> {
                    // MAX + 1 is a power of two, so the bound is exact even
                    // where MAX itself rounds in f64
                    if core.fract() != 0.0
                        || core < <$ty>::MIN as f64
                        || core >= <$ty>::MAX as f64 + 1.0
                    {
                        return None;
                    }
                    Some(core as $ty)
                }
            }
        )*
    };
}

interpolate_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl JsonInterpolatable for f32 {
    type Core = f64;

    fn to_core(&self) -> f64 {
        f64::from(*self)
    }

    fn from_core(core: f64) -> Option<Self> {
        let narrowed = core as f32;
        narrowed.is_finite().then_some(narrowed)
    }
}

impl JsonInterpolatable for Box<str> {
    type Core = String;

    fn to_core(&self) -> String {
        self.to_string()
    }

    fn from_core(core: String) -> Option<Self> {
        Some(core.into_boxed_str())
    }
}

/// A string of exactly one character.
impl JsonInterpolatable for char {
    type Core = String;

    fn to_core(&self) -> String {
        self.to_string()
    }

    fn from_core(core: String) -> Option<Self> {
        let mut chars = core.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl JsonInterpolatable for PathBuf {
    type Core = String;

    fn to_core(&self) -> String {
        self.to_string_lossy().into_owned()
    }

    fn from_core(core: String) -> Option<Self> {
        Some(PathBuf::from(core))
    }
}

impl Value {
    /// Strict lookup followed by a typed conversion.
    ///
    /// A missing entry, a receiver of the wrong container kind, and a value
    /// that `T` rejects all give `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use json_value::Value;
    ///
    /// let doc = Value::decode(r#"{"n": 3, "xs": [1, "oops", 3]}"#).unwrap();
    /// assert_eq!(doc.get_as::<u8, _>("n"), Some(3));
    /// assert_eq!(doc.get_as::<String, _>("n"), None);
    /// assert_eq!(doc.get_as::<Vec<f64>, _>("xs"), None);
    /// ```
    pub fn get_as<T, I>(&self, index: I) -> Option<T>
    where
        T: JsonConvertible,
        I: ValueIndex,
    {
        self.get_strict(index).and_then(T::from_json)
    }

    /// Converts the whole value with `T`'s injection.
    pub fn convert<T: JsonConvertible>(&self) -> Option<T> {
        T::from_json(self)
    }
}
