//! Decimal string parsing for account fields.

use serde::{Deserialize, Serialize};

use crate::codec::types::{NonceError, NonceField, NonceResult};

/// How decimal strings coming from account queries are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// The whole string must be ASCII digits.
    #[default]
    Strict,
    /// Leading whitespace and `+` are skipped, then the leading digits are taken
    /// and anything after them ignored, the way JavaScript's `parseInt` does.
    Lenient,
}

impl ParsePolicy {
    /// Parse `input` as a non-negative integer for `field`.
    ///
    /// Values too large for a u64 are reported as out of range for the field,
    /// since no layout could ever hold them.
    pub fn parse(self, field: NonceField, input: &str) -> NonceResult<u64> {
        let digits = match self {
            ParsePolicy::Strict => input,
            ParsePolicy::Lenient => leading_digits(input),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NonceError::MalformedInput {
                field,
                input: input.to_string(),
            });
        }

        digits.parse::<u64>().map_err(|_| NonceError::OutOfRange {
            field,
            value: digits.to_string(),
            bits: u64::BITS,
        })
    }
}

fn leading_digits(input: &str) -> &str {
    let trimmed = input.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    &unsigned[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: NonceField = NonceField::AccountNumber;

    #[test]
    fn test_strict_accepts_digits() {
        assert_eq!(ParsePolicy::Strict.parse(FIELD, "0").unwrap(), 0);
        assert_eq!(ParsePolicy::Strict.parse(FIELD, "42").unwrap(), 42);
        assert_eq!(ParsePolicy::Strict.parse(FIELD, "007").unwrap(), 7);
    }

    #[test]
    fn test_strict_rejects_garbage() {
        for input in ["", " 5", "5 ", "+5", "-5", "5x", "0x10", "1e3", "4.2"] {
            let err = ParsePolicy::Strict.parse(FIELD, input).unwrap_err();
            assert!(
                matches!(err, NonceError::MalformedInput { .. }),
                "expected malformed for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_lenient_matches_parse_int() {
        assert_eq!(ParsePolicy::Lenient.parse(FIELD, "42abc").unwrap(), 42);
        assert_eq!(ParsePolicy::Lenient.parse(FIELD, "  17").unwrap(), 17);
        assert_eq!(ParsePolicy::Lenient.parse(FIELD, "+9").unwrap(), 9);
        assert_eq!(ParsePolicy::Lenient.parse(FIELD, "4.9").unwrap(), 4);
        assert_eq!(ParsePolicy::Lenient.parse(FIELD, "1e3").unwrap(), 1);
    }

    #[test]
    fn test_lenient_still_rejects_non_numbers() {
        for input in ["", "abc", "-5", " ", "+", "+-1"] {
            assert!(
                ParsePolicy::Lenient.parse(FIELD, input).is_err(),
                "expected error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_overflowing_u64_is_out_of_range() {
        let err = ParsePolicy::Strict
            .parse(FIELD, "99999999999999999999999")
            .unwrap_err();
        assert!(matches!(
            err,
            NonceError::OutOfRange {
                field: NonceField::AccountNumber,
                ..
            }
        ));
    }
}
