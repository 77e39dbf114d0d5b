//! Encoding to and decoding from JSON text.
//!
//! Lexing and parsing are done by `serde_json`. This module only decides
//! which [`Value`] variant a parsed node becomes, and how each variant is
//! written back out.

use std::str::FromStr;

use serde::de::{self, Deserialize, DeserializeOwned, Deserializer};
use serde::ser::{self, Serialize, Serializer};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::path::{Path, PathStep};
use crate::value::{Map, Value};

/// Numbers below this magnitude with no fractional part are written as
/// integers. 2^53, the largest range where every integer is exact in `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Deepest container nesting that [`Value::decode`] reads back.
///
/// `serde_json` refuses text with 128 or more open brackets, so encoding
/// rejects trees nested deeper than this instead of writing text that cannot
/// be decoded.
pub const MAX_DEPTH: usize = 127;

/// Options for [`Value::encode_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Indent nested containers with two spaces.
    pub pretty: bool,
}

impl EncodeOptions {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Object(map) => serializer.collect_map(map),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Null => serializer.serialize_unit(),
        }
    }
}

fn serialize_number<S>(n: f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !n.is_finite() {
        return Err(ser::Error::custom(format!(
            "number {n} has no JSON representation"
        )));
    }
    if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(n as i64)
    } else {
        serializer.serialize_f64(n)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = serde_json::Value::deserialize(deserializer)?;
        decode_root(json).map_err(de::Error::custom)
    }
}

/// A node that matched no variant.
///
/// Steps are collected leaf-first while the error unwinds, so the success
/// path never builds a path at all.
#[derive(Debug)]
struct Mismatch {
    node: String,
    steps_from_leaf: Vec<PathStep>,
}

impl Mismatch {
    fn at(node: &serde_json::Value) -> Self {
        Mismatch {
            node: node.to_string(),
            steps_from_leaf: Vec::new(),
        }
    }

    fn within(mut self, step: PathStep) -> Self {
        self.steps_from_leaf.push(step);
        self
    }

    fn into_error(self) -> Error {
        let mut steps = self.steps_from_leaf;
        steps.reverse();
        let path = Path::from_steps(steps);
        debug!(path = %path, node = %self.node, "no value variant matches node");
        Error::decode("not a JSON value", path)
    }
}

fn decode_root(json: serde_json::Value) -> Result<Value> {
    decode_node(json).map_err(Mismatch::into_error)
}

/// Picks the variant for one parsed node.
///
/// Candidates are tried in a fixed order: object, array, string, number,
/// bool, then an explicit null check. The first one that accepts the node
/// wins. Strings are never reinterpreted as numbers.
fn decode_node(json: serde_json::Value) -> std::result::Result<Value, Mismatch> {
    use serde_json::Value as Json;

    let json = match json {
        Json::Object(entries) => {
            let mut map = Map::new();
            for (key, child) in entries {
                match decode_node(child) {
                    Ok(value) => {
                        map.insert(key, value);
                    }
                    Err(mismatch) => return Err(mismatch.within(PathStep::Key(key))),
                }
            }
            return Ok(Value::Object(map));
        }
        other => other,
    };
    let json = match json {
        Json::Array(elements) => {
            let mut items = Vec::with_capacity(elements.len());
            for (index, child) in elements.into_iter().enumerate() {
                items.push(decode_node(child).map_err(|m| m.within(PathStep::Index(index)))?);
            }
            return Ok(Value::Array(items));
        }
        other => other,
    };
    let json = match json {
        Json::String(s) => return Ok(Value::String(s)),
        other => other,
    };
    if let Some(n) = json.as_f64() {
        return Ok(Value::Number(n));
    }
    if let Some(b) = json.as_bool() {
        return Ok(Value::Bool(b));
    }
    if json.is_null() {
        return Ok(Value::Null);
    }

    Err(Mismatch::at(&json))
}

fn check_depth(value: &Value) -> Result<()> {
    if nests_deeper_than(value, MAX_DEPTH) {
        debug!(max_depth = MAX_DEPTH, "value nests too deep to decode");
        return Err(Error::encode(format!(
            "value nests more than {MAX_DEPTH} containers"
        )));
    }
    Ok(())
}

/// Stops descending once `limit` is used up, so recursion stays bounded by
/// `limit` however deep the tree is.
fn nests_deeper_than(value: &Value, limit: usize) -> bool {
    match value {
        Value::Object(map) => {
            limit == 0 || map.values().any(|child| nests_deeper_than(child, limit - 1))
        }
        Value::Array(items) => {
            limit == 0 || items.iter().any(|child| nests_deeper_than(child, limit - 1))
        }
        _ => false,
    }
}

fn syntax_error(err: &serde_json::Error) -> Error {
    debug!(error = %err, "malformed JSON text");
    Error::decode(err.to_string(), Path::root())
}

impl Value {
    /// Decodes a single JSON value from text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the text is not valid JSON or a node
    /// matches no variant.
    ///
    /// # Example
    ///
    /// ```
    /// use json_value::Value;
    ///
    /// let value = Value::decode(r#"{"a": [1, "two", null]}"#).unwrap();
    /// assert_eq!(value.get("a").and_then(|a| a.get(1)), Some(&Value::string("two")));
    /// assert_eq!(Value::decode("{}").unwrap(), Value::EMPTY_OBJECT);
    /// ```
    pub fn decode(text: &str) -> Result<Value> {
        trace!(len = text.len(), "decoding value from text");
        let json: serde_json::Value = serde_json::from_str(text).map_err(|e| syntax_error(&e))?;
        decode_root(json)
    }

    /// Decodes a single JSON value from UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// Same as [`Value::decode`].
    pub fn decode_slice(bytes: &[u8]) -> Result<Value> {
        trace!(len = bytes.len(), "decoding value from bytes");
        let json: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| syntax_error(&e))?;
        decode_root(json)
    }

    /// Encodes as compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the tree contains a non-finite number or
    /// nests more than [`MAX_DEPTH`] containers.
    ///
    /// # Example
    ///
    /// ```
    /// use json_value::Value;
    ///
    /// assert_eq!(Value::EMPTY_OBJECT.encode().unwrap(), "{}");
    /// assert_eq!(Value::number(3.0).encode().unwrap(), "3");
    /// assert!(Value::number(f64::NAN).encode().is_err());
    /// ```
    pub fn encode(&self) -> Result<String> {
        self.encode_with(&EncodeOptions::default())
    }

    /// Encodes as JSON text using `options`.
    ///
    /// # Errors
    ///
    /// Same as [`Value::encode`].
    pub fn encode_with(&self, options: &EncodeOptions) -> Result<String> {
        trace!(kind = %self.kind(), pretty = options.pretty, "encoding value");
        check_depth(self)?;
        let encoded = if options.pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        encoded.map_err(|err| {
            debug!(error = %err, "failed to encode value");
            Error::encode(err.to_string())
        })
    }

    /// Encodes as compact JSON bytes.
    ///
    /// # Errors
    ///
    /// Same as [`Value::encode`].
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        check_depth(self)?;
        serde_json::to_vec(self).map_err(|err| {
            debug!(error = %err, "failed to encode value");
            Error::encode(err.to_string())
        })
    }

    /// Builds a value from any serde-serializable type by way of JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if `source` cannot be represented as JSON
    /// (for example a map with non-string keys).
    ///
    /// # Example
    ///
    /// ```
    /// use json_value::Value;
    /// use std::collections::BTreeMap;
    ///
    /// let mut scores = BTreeMap::new();
    /// scores.insert("ada", 3);
    /// let value = Value::from_serializable(&scores).unwrap();
    /// assert_eq!(value.get_as::<f64, _>("ada"), Some(3.0));
    /// ```
    pub fn from_serializable<T>(source: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_value(source).map_err(|err| {
            debug!(error = %err, "failed to encode serializable source");
            Error::encode(err.to_string())
        })?;
        decode_root(json)
    }

    /// Deserializes a serde type from this value by way of JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if this tree cannot be encoded, or
    /// [`Error::Decode`] if the target type rejects its shape.
    pub fn to_deserializable<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let json = serde_json::Value::try_from(self)?;
        serde_json::from_value(json).map_err(|err| {
            debug!(error = %err, "target type rejected value");
            Error::decode(err.to_string(), Path::root())
        })
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Value::decode(s)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        decode_root(json)
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        serde_json::to_value(value).map_err(|err| {
            debug!(error = %err, "failed to encode value");
            Error::encode(err.to_string())
        })
    }
}
