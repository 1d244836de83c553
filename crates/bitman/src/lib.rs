//! # bitman
//!
//! Read and modify bit fields of numbers of any width.
//!
//! Numbers are given as text, either decimal or hexadecimal prefixed with `0x`.
//! A field is an inclusive [BitRange] counted from the least significant bit.
//! [extract] returns the field in decimal, [replace] returns the whole updated
//! number in lowercase hexadecimal.
//!
//! ## Example
//!
//! ```
//! use bitman::{extract, replace, BitRange};
//!
//! let range = BitRange::new(77, 92).unwrap();
//! assert_eq!(extract("0x86460000000000000000000", range).unwrap(), "17187");
//!
//! let range = BitRange::new(4, 7).unwrap();
//! assert_eq!(replace("0x235004", range, "8").unwrap(), "0x235084");
//! ```

pub mod errors;
pub mod field;
pub mod radix;
pub mod range;

pub use errors::{Error, ParseError, RangeError, Result};
pub use range::BitRange;

use crate::{
    field::{get_field, set_field},
    radix::{format_decimal, format_hex, parse_literal},
};

/// Reads the bits of `number` covered by `range` and renders them in decimal.
pub fn extract(number: &str, range: BitRange) -> Result<String> {
    let value = parse_literal(number)?;

    Ok(format_decimal(&get_field(&value, range)))
}

/// Writes `new_value` into the bits of `number` covered by `range` and renders
/// the result as `0x`-prefixed lowercase hexadecimal.
///
/// See [set_field] for which bits outside the range are kept.
pub fn replace(number: &str, range: BitRange, new_value: &str) -> Result<String> {
    let value = parse_literal(number)?;
    let field = parse_literal(new_value)?;

    let updated = set_field(&value, range, &field).map_err(|err| match err {
        RangeError::ValueTooLarge { max, .. } => RangeError::ValueTooLarge {
            value: new_value.to_string(),
            max,
        },
        other => other,
    })?;

    Ok(format_hex(&updated))
}
