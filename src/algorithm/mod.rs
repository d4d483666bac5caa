pub(crate) mod hmac;

use crate::error::{Error, Result};
use crate::limits::MAX_ALG_LENGTH;

use serde::{Deserialize, Serialize};

/// Signing algorithm named in the `alg` header field
///
/// Only the HMAC family is supported. Any other name, including `"none"` and
/// case variants of the supported names, is rejected when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// HMAC with SHA-256
    #[default]
    HS256,

    /// HMAC with SHA-384
    HS384,

    /// HMAC with SHA-512
    HS512,
}

impl Algorithm {
    /// Every supported algorithm
    pub const ALL: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

    /// Parse algorithm name from a JWT header or caller input
    pub fn from_name(name: &str) -> Result<Self> {
        if name.len() > MAX_ALG_LENGTH {
            return Err(Error::UnsupportedAlgorithm(format!(
                "Algorithm string too long: {} bytes (maximum: {} bytes)",
                name.len(),
                MAX_ALG_LENGTH
            )));
        }

        match name {
            "HS256" => Ok(Algorithm::HS256),
            "HS384" => Ok(Algorithm::HS384),
            "HS512" => Ok(Algorithm::HS512),
            _ => Err(Error::UnsupportedAlgorithm(name.to_string())),
        }
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
        }
    }

    /// Length in bytes of the signature this algorithm produces
    pub const fn digest_len(&self) -> usize {
        match self {
            Algorithm::HS256 => 32,
            Algorithm::HS384 => 48,
            Algorithm::HS512 => 64,
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::from_name(s)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for Algorithm {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Policy for algorithms accepted during verification
///
/// The default policy accepts every supported algorithm. Restrict it when the
/// issuer is known to sign with a single algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmPolicy {
    allowed: Vec<Algorithm>,
}

impl AlgorithmPolicy {
    /// Policy that allows only HS256
    pub fn hs256_only() -> Self {
        Self::allow_only(vec![Algorithm::HS256])
    }

    /// Policy that allows only HS384
    pub fn hs384_only() -> Self {
        Self::allow_only(vec![Algorithm::HS384])
    }

    /// Policy that allows only HS512
    pub fn hs512_only() -> Self {
        Self::allow_only(vec![Algorithm::HS512])
    }

    /// Policy that allows every supported algorithm
    pub fn allow_all() -> Self {
        Self::allow_only(Algorithm::ALL.to_vec())
    }

    /// Create a policy that allows only specific algorithms
    pub fn allow_only(algorithms: Vec<Algorithm>) -> Self {
        Self {
            allowed: algorithms,
        }
    }

    /// Validate algorithm against policy
    pub fn validate(&self, algorithm: Algorithm) -> Result<()> {
        if self.is_allowed(algorithm) {
            Ok(())
        } else {
            Err(Error::AlgorithmNotAllowed {
                found: algorithm.to_string(),
                allowed: self.allowed.iter().map(ToString::to_string).collect(),
            })
        }
    }

    /// Check if an algorithm is allowed
    pub fn is_allowed(&self, algorithm: Algorithm) -> bool {
        self.allowed.contains(&algorithm)
    }
}

impl Default for AlgorithmPolicy {
    fn default() -> Self {
        Self::allow_all()
    }
}
