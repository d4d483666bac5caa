use crate::algorithm::Algorithm;
use crate::error::{Error, Result};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Token type written into every header produced by the encoder
pub const TOKEN_TYPE: &str = "JWT";

/// JWT header structure
///
/// Decoded headers come from untrusted input. Every member is kept as the raw
/// JSON value, so any non-empty object decodes; `alg` is only turned into an
/// [`Algorithm`] when a signature is checked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Header {
    #[serde(rename = "typ", default, skip_serializing_if = "Option::is_none")]
    pub(crate) token_type: Option<Value>,

    #[serde(rename = "alg", default, skip_serializing_if = "Option::is_none")]
    pub(crate) algorithm: Option<Value>,

    #[serde(rename = "kid", default, skip_serializing_if = "Option::is_none")]
    pub(crate) key_id: Option<Value>,

    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

impl Header {
    /// Header for a freshly signed token
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            token_type: Some(Value::from(TOKEN_TYPE)),
            algorithm: Some(Value::from(algorithm.as_str())),
            key_id: None,
            extra: Map::new(),
        }
    }

    /// Token type (typically "JWT"), if present as a string
    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_ref().and_then(Value::as_str)
    }

    /// Get algorithm as string, if present as a string
    pub fn algorithm_str(&self) -> Option<&str> {
        self.algorithm.as_ref().and_then(Value::as_str)
    }

    /// Parse algorithm from header
    ///
    /// A missing, empty or non-string `alg` is [`Error::InvalidAlgorithm`]; a
    /// name outside the HMAC family is [`Error::UnsupportedAlgorithm`].
    pub fn parse_algorithm(&self) -> Result<Algorithm> {
        match self.algorithm_str() {
            None | Some("") => Err(Error::InvalidAlgorithm),
            Some(name) => Algorithm::from_name(name),
        }
    }

    /// Key ID, if present as a string
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_ref().and_then(Value::as_str)
    }

    /// Header fields other than `typ`, `alg` and `kid`
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Get the raw value of a header field by name, including `typ`, `alg`
    /// and `kid`
    pub fn get(&self, name: &str) -> Option<&Value> {
        match name {
            "typ" => self.token_type.as_ref(),
            "alg" => self.algorithm.as_ref(),
            "kid" => self.key_id.as_ref(),
            _ => self.extra.get(name),
        }
    }
}
