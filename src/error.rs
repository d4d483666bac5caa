//! Error types for token encoding and decoding
//!
//! Every failure in the codec is reported as an [`Error`] value. Nothing is
//! retried and nothing is swallowed: format and signature errors are not
//! transient, so callers should treat any decode error as "reject the token".

use thiserror::Error;

/// Errors that can occur while encoding, decoding or verifying a token
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Malformed token: expected three parts separated by '.'")]
    MalformedToken,

    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    #[error("Token header is unreadable: {0}")]
    HeaderUnreadable(String),

    #[error("Token payload is unreadable: {0}")]
    PayloadUnreadable(String),

    #[error("Base64URL decoding failed: {0}")]
    DecodeError(String),

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Token header does not declare a signing algorithm")]
    InvalidAlgorithm,

    #[error("Algorithm '{0}' is not supported")]
    UnsupportedAlgorithm(String),

    #[error("Algorithm '{found}' not allowed. Allowed: {allowed:?}")]
    AlgorithmNotAllowed { found: String, allowed: Vec<String> },

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    InvalidSignature,

    #[error("Signature verification requested without a key")]
    KeyRequired,

    #[error("Signing key must not be empty")]
    EmptyKey,

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    #[error("JSON encoding failed: {0}")]
    Encoding(EncodingFailure),
}

/// Reason a value could not be serialized to JSON
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingFailure {
    #[error("maximum stack depth exceeded")]
    DepthExceeded,

    #[error("unexpected control character found")]
    ControlCharacter,

    #[error("syntax error, malformed JSON: {0}")]
    Syntax(String),

    #[error("serialization produced an empty result")]
    EmptyResult,

    #[error("unknown error: {0}")]
    Unknown(String),
}

impl From<EncodingFailure> for Error {
    fn from(failure: EncodingFailure) -> Self {
        Error::Encoding(failure)
    }
}

impl Error {
    /// Whether the error comes from the authenticity check rather than the
    /// token's structure
    ///
    /// Useful for callers that answer signature failures differently from
    /// malformed input (e.g. 401 versus 400).
    pub fn is_signature_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidSignature
                | Error::InvalidAlgorithm
                | Error::UnsupportedAlgorithm(_)
                | Error::AlgorithmNotAllowed { .. }
        )
    }
}

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, Error>;
