//! Text forms of numbers: plain decimal, or hexadecimal prefixed with `0x`.

use num_bigint::BigUint;

use crate::errors::ParseError;

const HEX_PREFIX: &str = "0x";

/// Base a literal is written in, chosen by its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Decimal,
    Hex,
}

impl Radix {
    /// Splits `literal` into its radix and the digits that follow the prefix.
    ///
    /// Only a lowercase `0x` selects hexadecimal; anything else is read as decimal.
    pub fn detect(literal: &str) -> (Radix, &str) {
        match literal.strip_prefix(HEX_PREFIX) {
            Some(digits) => (Radix::Hex, digits),
            None => (Radix::Decimal, literal),
        }
    }

    /// Numeric base: 10 or 16.
    pub fn base(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal literal.
///
/// Hex digits may be in either case. Signs, separators and whitespace are rejected.
pub fn parse_literal(literal: &str) -> Result<BigUint, ParseError> {
    let (radix, digits) = Radix::detect(literal);
    let invalid = || ParseError::InvalidLiteral {
        literal: digits.to_string(),
        radix,
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix.base())) {
        return Err(invalid());
    }

    BigUint::parse_bytes(digits.as_bytes(), radix.base()).ok_or_else(invalid)
}

/// Renders `value` in decimal.
pub fn format_decimal(value: &BigUint) -> String {
    value.to_str_radix(10)
}

/// Renders `value` as lowercase hexadecimal with a `0x` prefix.
pub fn format_hex(value: &BigUint) -> String {
    format!("{HEX_PREFIX}{value:x}")
}
