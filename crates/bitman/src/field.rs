//! Bit-field reads and writes on arbitrary-precision unsigned integers.
//!
//! Bits are addressed LSB-first: bit 0 is the least significant bit.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{errors::RangeError, range::BitRange};

/// Returns a value with the low `len` bits set.
pub fn ones(len: usize) -> BigUint {
    (BigUint::one() << len) - 1u32
}

/// Reads the bits covered by `range`. Positions past the end of `value` read as zero.
pub fn get_field(value: &BigUint, range: BitRange) -> BigUint {
    let shifted = value >> range.start_bit();
    if fits(&shifted, range) {
        return shifted;
    }

    shifted & ones(range.width())
}

/// Whether `value` needs no more than `range.width()` bits.
fn fits(value: &BigUint, range: BitRange) -> bool {
    value.bits() <= range.width() as u64
}

/// Writes `field` into the bits covered by `range`.
///
/// Bits below `start_bit` are kept. Bits from `stop_bit` up to the current bit
/// length of `value` are kept as well, so a `stop_bit` that is already set in
/// `value` stays set whatever `field` holds. Fails if `field` is wider than
/// the range.
pub fn set_field(value: &BigUint, range: BitRange, field: &BigUint) -> Result<BigUint, RangeError> {
    if !fits(field, range) {
        return Err(RangeError::ValueTooLarge {
            value: field.to_string(),
            max: range.max_value(),
        });
    }

    let bit_len = value.bits() as usize;
    let upper = if bit_len > range.stop_bit() {
        ones(bit_len - range.stop_bit()) << range.stop_bit()
    } else {
        BigUint::zero()
    };
    let lower = ones(range.start_bit());
    let keep = upper | lower;

    Ok((value & &keep) | (field << range.start_bit()))
}
