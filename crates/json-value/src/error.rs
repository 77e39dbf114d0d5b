//! Error types for decoding, encoding, and merging.

use thiserror::Error;

use crate::path::Path;
use crate::value::ValueKind;

/// Hard failures. Lookup misses and failed typed conversions are not errors;
/// they come back as `None`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The input did not match any variant, or was not valid JSON text.
    ///
    /// `path` is the JSON Pointer of the offending node (`""` for the root).
    #[error("failed to decode value at \"{path}\": {message}")]
    Decode { message: String, path: Path },
    /// The value could not be encoded.
    #[error("failed to encode value: {0}")]
    Encode(String),
    /// A merge was attempted where one operand is not an object.
    #[error("cannot merge {receiver} with {argument}: both operands must be objects")]
    MergeOnNonObject {
        receiver: ValueKind,
        argument: ValueKind,
    },
}

impl Error {
    pub(crate) fn decode(message: impl Into<String>, path: Path) -> Self {
        Error::Decode {
            message: message.into(),
            path,
        }
    }

    pub(crate) fn encode(message: impl Into<String>) -> Self {
        Error::Encode(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
