//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::codec::{BoundaryPolicy, NonceLayout, ParsePolicy};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Nonce layout and policies.
    pub nonce: NonceConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Nonce codec configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct NonceConfig {
    /// Bits reserved for the account number.
    pub account_bits: u32,

    /// Bits reserved for the sequence (low bits of the nonce).
    pub sequence_bits: u32,

    /// Whether a value of exactly `2^bits` is accepted.
    pub boundary: BoundaryPolicy,

    /// How decimal account fields are parsed.
    pub parsing: ParsePolicy,
}

impl Default for NonceConfig {
    fn default() -> Self {
        let layout = NonceLayout::STANDARD;
        Self {
            account_bits: layout.account_bits(),
            sequence_bits: layout.sequence_bits(),
            boundary: BoundaryPolicy::Strict,
            parsing: ParsePolicy::Strict,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
