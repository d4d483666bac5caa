//! JSON serialization for token segments
//!
//! Serialization failures surface as [`Error::Encoding`] with a reason
//! instead of a bare `serde_json` error. Decoding helpers reject values that
//! carry nothing (`null`, `false`, `0`, `""`, `"0"`, `[]`, `{}`), which never
//! form a usable header or payload.
//!
//! Reasons reachable from [`to_string`]: `DepthExceeded`, `Syntax` (e.g. a
//! map with non-string keys), `EmptyResult` and `Unknown` (errors raised by a
//! `Serialize` impl). Checking JSON text with
//! [`Encoder::encode_json`](crate::Encoder::encode_json) can additionally
//! report `ControlCharacter`.

use crate::error::{EncodingFailure, Error, Result};
use crate::limits::MAX_JSON_DEPTH;
use crate::utils::base64url;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use serde_json::Value;

/// Serialize a value to a compact JSON string
///
/// Output nested deeper than [`MAX_JSON_DEPTH`] fails with
/// [`EncodingFailure::DepthExceeded`], since the decoder could not read it
/// back.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).map_err(|e| Error::Encoding(encoding_failure(&e)))?;

    if json.is_empty() {
        return Err(EncodingFailure::EmptyResult.into());
    }
    if nesting_depth(&json) > MAX_JSON_DEPTH {
        return Err(EncodingFailure::DepthExceeded.into());
    }

    Ok(json)
}

/// Check that `json` is text the decoder will accept as a segment
pub(crate) fn check_text(json: &str) -> Result<()> {
    if json.trim().is_empty() {
        return Err(EncodingFailure::EmptyResult.into());
    }

    let value: Value =
        serde_json::from_str(json).map_err(|e| Error::Encoding(encoding_failure(&e)))?;

    if is_empty_value(&value) {
        return Err(EncodingFailure::EmptyResult.into());
    }

    Ok(())
}

/// Deepest array/object nesting in serialized JSON
fn nesting_depth(json: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in json.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}

/// Whether a JSON string holds a value with no content
pub fn is_empty_json(json: &str) -> bool {
    serde_json::from_str::<Value>(json)
        .map(|value| is_empty_value(&value))
        .unwrap_or(json.trim().is_empty())
}

/// Whether a JSON value has no content
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Decode a Base64URL token segment and parse it as JSON
///
/// Every failure is reported through `unreadable`, so the caller decides
/// which segment the error names.
pub(crate) fn from_segment<T: DeserializeOwned>(
    segment: &str,
    unreadable: fn(String) -> Error,
) -> Result<T> {
    let bytes = base64url::decode_bytes(segment).map_err(|e| unreadable(e.to_string()))?;

    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|e| unreadable(format!("JSON parsing failed: {e}")))?;

    if is_empty_value(&value) {
        return Err(unreadable("decoded to an empty value".to_string()));
    }

    serde_json::from_value(value).map_err(|e| unreadable(format!("unexpected JSON shape: {e}")))
}

/// Map a `serde_json` error to the reason reported to callers
pub(crate) fn encoding_failure(err: &serde_json::Error) -> EncodingFailure {
    let message = err.to_string();

    if message.contains("recursion limit exceeded") {
        return EncodingFailure::DepthExceeded;
    }
    if message.contains("control character") {
        return EncodingFailure::ControlCharacter;
    }

    match err.classify() {
        Category::Syntax | Category::Eof => EncodingFailure::Syntax(message),
        Category::Io | Category::Data => EncodingFailure::Unknown(message),
    }
}
