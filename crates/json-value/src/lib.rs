//! Dynamically-typed JSON values.
//!
//! [`Value`] models every legal JSON value with six variants. On top of it
//! this crate provides:
//!
//! - text encoding and decoding (parsing itself is done by `serde_json`),
//! - passthrough and strict lookup by key or position,
//! - a shallow, receiver-wins merge of two objects,
//! - typed conversions through [`JsonConvertible`] and [`JsonInterpolatable`].
//!
//! # Example
//!
//! ```
//! use json_value::Value;
//!
//! let doc = Value::decode(r#"{"user": {"name": "ada", "langs": ["en", "fr"]}}"#).unwrap();
//!
//! // Navigate
//! let user = doc.get("user").unwrap();
//! assert_eq!(user.get_as::<String, _>("name"), Some("ada".to_string()));
//! assert_eq!(user.get_as::<Vec<String>, _>("langs").map(|l| l.len()), Some(2));
//!
//! // Merge: the receiver's keys win
//! let defaults = Value::object([("name", "anonymous"), ("theme", "dark")]);
//! let merged = user.merge_object(&defaults).unwrap();
//! assert_eq!(merged.get_as::<String, _>("name"), Some("ada".to_string()));
//! assert_eq!(merged.get_as::<String, _>("theme"), Some("dark".to_string()));
//!
//! // Encode
//! assert_eq!(Value::EMPTY_OBJECT.encode().unwrap(), "{}");
//! ```

mod access;
mod build;
mod codec;
mod convert;
mod error;
pub mod path;
mod value;

pub use access::ValueIndex;
pub use codec::{EncodeOptions, MAX_DEPTH};
pub use convert::{JsonConvertible, JsonInterpolatable};
pub use error::{Error, Result};
pub use path::{Path, PathStep};
pub use value::{Map, Value, ValueKind};
