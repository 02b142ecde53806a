//! Packing account number and sequence into a single nonce, and back.
//!
//! # Responsibilities
//! - Parse decimal account fields under the configured parse policy
//! - Enforce per-field bit budgets under the configured boundary policy
//! - Pack fields as `account_number * 2^sequence_bits + sequence`
//! - Decompose a nonce back into decimal strings

use crate::codec::layout::{LayoutError, NonceLayout};
use crate::codec::parse::ParsePolicy;
use crate::codec::types::{BoundaryPolicy, Nonce, NonceError, NonceField, NonceInfo, NonceResult};
use crate::config::schema::NonceConfig;

/// Converts between account info and nonces.
///
/// Holds only plain values, so it is `Copy` and can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NonceCodec {
    layout: NonceLayout,
    boundary: BoundaryPolicy,
    parsing: ParsePolicy,
}

impl NonceCodec {
    /// Create a codec from its parts.
    pub fn new(layout: NonceLayout, boundary: BoundaryPolicy, parsing: ParsePolicy) -> Self {
        Self {
            layout,
            boundary,
            parsing,
        }
    }

    /// Build a codec from the `[nonce]` config section.
    pub fn from_config(config: &NonceConfig) -> Result<Self, LayoutError> {
        let layout = NonceLayout::new(config.account_bits, config.sequence_bits)?;
        Ok(Self::new(layout, config.boundary, config.parsing))
    }

    pub fn layout(&self) -> NonceLayout {
        self.layout
    }

    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    pub fn parsing(&self) -> ParsePolicy {
        self.parsing
    }

    /// Encode decimal account number and sequence into a nonce.
    ///
    /// # Arguments
    /// * `account_number` - Decimal account number from the account query
    /// * `sequence` - Decimal sequence from the account query
    ///
    /// # Errors
    /// `MalformedInput` if either string does not parse, `OutOfRange` if either
    /// value exceeds its bit budget.
    pub fn encode(&self, account_number: &str, sequence: &str) -> NonceResult<Nonce> {
        let account = self.parsing.parse(NonceField::AccountNumber, account_number)?;
        let sequence = self.parsing.parse(NonceField::Sequence, sequence)?;
        self.pack(account, sequence)
    }

    /// Encode a [`NonceInfo`].
    pub fn encode_info(&self, info: &NonceInfo) -> NonceResult<Nonce> {
        self.encode(&info.account_number, &info.sequence)
    }

    /// Pack already-parsed values.
    pub fn pack(&self, account_number: u64, sequence: u64) -> NonceResult<Nonce> {
        self.check(NonceField::AccountNumber, account_number)?;
        self.check(NonceField::Sequence, sequence)?;

        // Addition, not OR: a permissive sequence of 2^bits carries into the account bits.
        let packed = account_number
            .checked_mul(self.layout.sequence_limit())
            .and_then(|shifted| shifted.checked_add(sequence))
            .ok_or_else(|| {
                NonceError::Unrepresentable(format!(
                    "{} * 2^{} + {}",
                    account_number,
                    self.layout.sequence_bits(),
                    sequence
                ))
            })?;

        Nonce::new(packed)
    }

    /// Extract the account number from a nonce as a decimal string.
    ///
    /// # Errors
    /// `OutOfRange` if the implied account number exceeds its bit budget.
    pub fn decode_account_number(&self, nonce: Nonce) -> NonceResult<String> {
        let account = nonce.get() >> self.layout.sequence_bits();
        self.check(NonceField::AccountNumber, account)?;
        Ok(account.to_string())
    }

    /// Extract the sequence from a nonce as a decimal string.
    ///
    /// The mask keeps the result in range, so this never fails.
    pub fn decode_sequence(&self, nonce: Nonce) -> String {
        (nonce.get() & self.layout.sequence_mask()).to_string()
    }

    /// Decode both fields back into a [`NonceInfo`].
    pub fn decode(&self, nonce: Nonce) -> NonceResult<NonceInfo> {
        Ok(NonceInfo {
            account_number: self.decode_account_number(nonce)?,
            sequence: self.decode_sequence(nonce),
        })
    }

    fn check(&self, field: NonceField, value: u64) -> NonceResult<()> {
        if self.boundary.admits(value, self.layout.limit(field)) {
            return Ok(());
        }
        Err(NonceError::OutOfRange {
            field,
            value: value.to_string(),
            bits: self.layout.bits(field),
        })
    }
}

/// Encode account info with the standard layout and strict policies.
pub fn account_to_nonce(info: &NonceInfo) -> NonceResult<Nonce> {
    NonceCodec::default().encode_info(info)
}

/// Extract the account number with the standard layout and strict policies.
pub fn nonce_to_account_number(nonce: Nonce) -> NonceResult<String> {
    NonceCodec::default().decode_account_number(nonce)
}

/// Extract the sequence with the standard layout.
pub fn nonce_to_sequence(nonce: Nonce) -> String {
    NonceCodec::default().decode_sequence(nonce)
}
