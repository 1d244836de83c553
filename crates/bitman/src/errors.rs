//! Error types for literal parsing and bit-field updates.

use num_bigint::BigUint;
use thiserror::Error;

use crate::radix::Radix;

/// Errors produced when a number or bit index cannot be read from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Digits after the optional `0x` prefix are empty or not valid in the detected radix.
    #[error("Unable to parse '{literal}' with base={}", .radix.base())]
    InvalidLiteral { literal: String, radix: Radix },
    /// Start bit is not a non-negative decimal integer.
    #[error("Invalid start bit '{0}'")]
    InvalidStartBit(String),
    /// Stop bit is not a non-negative decimal integer.
    #[error("Invalid stop bit '{0}'")]
    InvalidStopBit(String),
}

/// Errors produced when a value or a range does not fit the requested bit field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Replacement value needs more bits than the field is wide.
    #[error("Value '{value}' is greater than allowed value={max}")]
    ValueTooLarge { value: String, max: BigUint },
    #[error("Start bit {start_bit} is greater than stop bit {stop_bit}")]
    InvertedRange { start_bit: usize, stop_bit: usize },
    /// Width `stop_bit - start_bit + 1` does not fit in a `usize`.
    #[error("Bit range {start_bit}..={stop_bit} is too wide")]
    TooWide { start_bit: usize, stop_bit: usize },
}

/// Any failure of [crate::extract] or [crate::replace].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Range(#[from] RangeError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_literal_message() {
        let err = ParseError::InvalidLiteral {
            literal: "foo".to_string(),
            radix: Radix::Decimal,
        };
        assert_eq!(err.to_string(), "Unable to parse 'foo' with base=10");
    }

    #[test]
    fn test_value_too_large_message() {
        let err = RangeError::ValueTooLarge {
            value: "5".to_string(),
            max: BigUint::from(1u32),
        };
        assert_eq!(err.to_string(), "Value '5' is greater than allowed value=1");
    }

    #[test]
    fn test_error_is_transparent() {
        let err: Error = ParseError::InvalidStopBit("x".to_string()).into();
        assert_eq!(err.to_string(), "Invalid stop bit 'x'");
    }
}
