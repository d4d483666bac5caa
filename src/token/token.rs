use crate::token::Header;

use serde_json::Value;

/// A decoded token: header and payload
///
/// Whether the signature was checked depends on how the token was decoded.
/// Values returned by [`decode_unverified`](crate::decode_unverified) are
/// exactly what the token claims and must not be trusted for authorization.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenData<P = Value> {
    /// Parsed header
    pub header: Header,

    /// Parsed payload
    pub payload: P,
}
