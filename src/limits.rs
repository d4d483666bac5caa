//! Size limit constants for input validation

/// Default maximum length for a token string accepted by the decoder (64KB)
pub const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum length for the algorithm (alg) name
/// Algorithm names are short (e.g., "HS256", "HS384", "HS512")
pub(crate) const MAX_ALG_LENGTH: usize = 16;

/// Deepest array/object nesting a header or payload may have
/// (serde_json's parser rejects 128 levels)
pub const MAX_JSON_DEPTH: usize = 127;
