//! Signing keys for HMAC algorithms
//!
//! A [`Key`] holds the shared secret used both to sign and to verify tokens.
//! The bytes are wiped when the key is dropped and never appear in `Debug`
//! output.

use zeroize::Zeroizing;

/// Symmetric secret for HS256, HS384 and HS512
#[derive(Clone)]
pub struct Key {
    secret: Zeroizing<Vec<u8>>,
}

impl Key {
    /// Create a key from secret bytes
    pub fn symmetric(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: Zeroizing::new(secret.into()),
        }
    }

    /// Get the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }

    /// Length of the secret in bytes
    pub fn len(&self) -> usize {
        self.secret.len()
    }

    /// Whether the secret is empty
    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key")
            .field("len", &self.secret.len())
            .finish_non_exhaustive()
    }
}

impl From<Vec<u8>> for Key {
    fn from(secret: Vec<u8>) -> Self {
        Self::symmetric(secret)
    }
}

impl From<&[u8]> for Key {
    fn from(secret: &[u8]) -> Self {
        Self::symmetric(secret)
    }
}

impl<const N: usize> From<&[u8; N]> for Key {
    fn from(secret: &[u8; N]) -> Self {
        Self::symmetric(secret.as_slice())
    }
}

impl From<String> for Key {
    fn from(secret: String) -> Self {
        Self::symmetric(secret.into_bytes())
    }
}

impl From<&str> for Key {
    fn from(secret: &str) -> Self {
        Self::symmetric(secret.as_bytes())
    }
}
