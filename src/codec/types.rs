//! Nonce value types and error definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A signing nonce packing an account number and a sequence.
///
/// Always `<= 2^53 - 1`, so it survives a round trip through an IEEE-754 double
/// (e.g. a JSON number consumed by a JavaScript signer) without losing precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Nonce(u64);

impl Nonce {
    /// Largest integer an f64 represents exactly, and so the largest valid nonce.
    pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

    /// The nonce of account 0 at sequence 0.
    pub const ZERO: Nonce = Nonce(0);

    /// Wrap a raw value, rejecting anything beyond `MAX_SAFE_INTEGER`.
    pub fn new(value: u64) -> NonceResult<Self> {
        if value > Self::MAX_SAFE_INTEGER {
            return Err(NonceError::Unrepresentable(value.to_string()));
        }
        Ok(Self(value))
    }

    /// The raw integer value.
    pub fn get(self) -> u64 {
        self.0
    }

    /// The nonce as a double. Exact for every valid nonce.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl TryFrom<u64> for Nonce {
    type Error = NonceError;

    fn try_from(value: u64) -> NonceResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<f64> for Nonce {
    type Error = NonceError;

    /// Accepts only finite, non-negative, integral doubles within the safe range.
    fn try_from(value: f64) -> NonceResult<Self> {
        if !value.is_finite()
            || value < 0.0
            || value.fract() != 0.0
            || value > Self::MAX_SAFE_INTEGER as f64
        {
            return Err(NonceError::Unrepresentable(value.to_string()));
        }
        Ok(Self(value as u64))
    }
}

impl From<Nonce> for u64 {
    fn from(nonce: Nonce) -> Self {
        nonce.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The data needed from an account to build a nonce.
///
/// Both fields are decimal strings, as returned by chain account queries.
/// Named fields keep callers from swapping the two arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonceInfo {
    /// Chain-assigned account identifier.
    pub account_number: String,
    /// Per-account transaction counter.
    pub sequence: String,
}

impl NonceInfo {
    pub fn new(account_number: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            sequence: sequence.into(),
        }
    }
}

/// Which half of a nonce a value or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonceField {
    AccountNumber,
    Sequence,
}

impl NonceField {
    pub fn as_str(self) -> &'static str {
        match self {
            NonceField::AccountNumber => "account number",
            NonceField::Sequence => "sequence",
        }
    }
}

impl fmt::Display for NonceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the `2^bits` boundary itself is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Values must be strictly below `2^bits`.
    #[default]
    Strict,
    /// Values up to and including `2^bits` are accepted (legacy `>` check).
    ///
    /// A sequence of exactly `2^bits` carries into the account number.
    Permissive,
}

impl BoundaryPolicy {
    /// Whether `value` is within a field whose limit is `limit` (`2^bits`).
    pub fn admits(self, value: u64, limit: u64) -> bool {
        match self {
            BoundaryPolicy::Strict => value < limit,
            BoundaryPolicy::Permissive => value <= limit,
        }
    }
}

/// Errors that can occur while encoding or decoding a nonce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NonceError {
    /// A field does not fit its bit budget.
    #[error("{field} {value} does not fit the {bits}-bit nonce budget, nonce layout must be updated")]
    OutOfRange {
        field: NonceField,
        value: String,
        bits: u32,
    },

    /// A field is not a non-negative base-10 integer.
    #[error("Malformed {field}: {input:?} is not a non-negative base-10 integer")]
    MalformedInput { field: NonceField, input: String },

    /// A value cannot be held exactly in a double.
    #[error("Value {0} cannot be represented exactly as a nonce (maximum 2^53 - 1)")]
    Unrepresentable(String),
}

/// Result type for nonce operations.
pub type NonceResult<T> = Result<T, NonceError>;
