//! Bit allocation of a nonce.
//!
//! ```text
//!  52          43 42                    20 19                   0
//! ┌──────────────┬────────────────────────┬──────────────────────┐
//! │   (unused)   │  account number (23)   │    sequence (20)     │
//! └──────────────┴────────────────────────┴──────────────────────┘
//! ```

use thiserror::Error;

use crate::codec::types::NonceField;

/// Significant bits of an IEEE-754 double.
pub const SAFE_INTEGER_BITS: u32 = 53;

/// Errors from constructing a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A field was given zero bits.
    #[error("{0} must have at least one bit")]
    EmptyField(NonceField),

    /// The fields together need more bits than a double can hold exactly.
    #[error("Layout needs {total} bits, at most {} are available", SAFE_INTEGER_BITS)]
    TooWide { total: u32 },
}

/// Bit widths of the two nonce fields.
///
/// The sequence occupies the low `sequence_bits`, the account number the
/// `account_bits` directly above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonceLayout {
    account_bits: u32,
    sequence_bits: u32,
}

impl NonceLayout {
    /// 23 bits (8 million) for accounts, 20 bits (1 million) for transactions per account.
    pub const STANDARD: NonceLayout = NonceLayout {
        account_bits: 23,
        sequence_bits: 20,
    };

    /// Create a layout, checking it fits in a double.
    pub fn new(account_bits: u32, sequence_bits: u32) -> Result<Self, LayoutError> {
        if account_bits == 0 {
            return Err(LayoutError::EmptyField(NonceField::AccountNumber));
        }
        if sequence_bits == 0 {
            return Err(LayoutError::EmptyField(NonceField::Sequence));
        }
        let total = account_bits.saturating_add(sequence_bits);
        if total > SAFE_INTEGER_BITS {
            return Err(LayoutError::TooWide { total });
        }
        Ok(Self {
            account_bits,
            sequence_bits,
        })
    }

    pub fn account_bits(&self) -> u32 {
        self.account_bits
    }

    pub fn sequence_bits(&self) -> u32 {
        self.sequence_bits
    }

    /// Bit width of the given field.
    pub fn bits(&self, field: NonceField) -> u32 {
        match field {
            NonceField::AccountNumber => self.account_bits,
            NonceField::Sequence => self.sequence_bits,
        }
    }

    /// `2^bits` for the given field.
    pub fn limit(&self, field: NonceField) -> u64 {
        1u64 << self.bits(field)
    }

    /// `2^account_bits`.
    pub fn account_limit(&self) -> u64 {
        self.limit(NonceField::AccountNumber)
    }

    /// `2^sequence_bits`.
    pub fn sequence_limit(&self) -> u64 {
        self.limit(NonceField::Sequence)
    }

    /// Mask selecting the sequence bits.
    pub fn sequence_mask(&self) -> u64 {
        self.sequence_limit() - 1
    }

    /// Largest nonce whose fields are both strictly in range.
    pub fn max_nonce(&self) -> u64 {
        ((self.account_limit() - 1) << self.sequence_bits) | self.sequence_mask()
    }
}

impl Default for NonceLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_limits() {
        let layout = NonceLayout::STANDARD;
        assert_eq!(layout.account_limit(), 8_388_608);
        assert_eq!(layout.sequence_limit(), 1_048_576);
        assert_eq!(layout.sequence_mask(), 0xF_FFFF);
        assert_eq!(layout.max_nonce(), (1u64 << 43) - 1);
    }

    #[test]
    fn test_new_validates_widths() {
        assert_eq!(NonceLayout::new(23, 20).unwrap(), NonceLayout::STANDARD);
        assert!(NonceLayout::new(33, 20).is_ok());
        assert_eq!(
            NonceLayout::new(0, 20),
            Err(LayoutError::EmptyField(NonceField::AccountNumber))
        );
        assert_eq!(
            NonceLayout::new(23, 0),
            Err(LayoutError::EmptyField(NonceField::Sequence))
        );
        assert_eq!(
            NonceLayout::new(34, 20),
            Err(LayoutError::TooWide { total: 54 })
        );
        assert!(NonceLayout::new(u32::MAX, u32::MAX).is_err());
    }

    #[test]
    fn test_widest_layout_max_nonce_is_safe() {
        let layout = NonceLayout::new(33, 20).unwrap();
        assert_eq!(layout.max_nonce(), (1u64 << 53) - 1);
    }
}
