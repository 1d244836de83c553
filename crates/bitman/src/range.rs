//! Inclusive bit ranges and their validation.

use std::fmt;

use num_bigint::BigUint;

use crate::{
    errors::{ParseError, RangeError},
    field::ones,
};

/// Inclusive range of bit positions, counted from the least significant bit.
///
/// Always satisfies `start_bit <= stop_bit`, and `width()` fits in a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BitRange {
    start_bit: usize,
    stop_bit: usize,
}

impl BitRange {
    pub fn new(start_bit: usize, stop_bit: usize) -> Result<Self, RangeError> {
        if start_bit > stop_bit {
            return Err(RangeError::InvertedRange {
                start_bit,
                stop_bit,
            });
        }
        if stop_bit - start_bit == usize::MAX {
            return Err(RangeError::TooWide {
                start_bit,
                stop_bit,
            });
        }

        Ok(BitRange {
            start_bit,
            stop_bit,
        })
    }

    /// Builds a range from bit positions written as decimal text.
    pub fn parse(start_bit: &str, stop_bit: &str) -> crate::Result<Self> {
        let start = start_bit
            .parse()
            .map_err(|_| ParseError::InvalidStartBit(start_bit.to_string()))?;
        let stop = stop_bit
            .parse()
            .map_err(|_| ParseError::InvalidStopBit(stop_bit.to_string()))?;

        Ok(BitRange::new(start, stop)?)
    }

    pub fn start_bit(&self) -> usize {
        self.start_bit
    }

    pub fn stop_bit(&self) -> usize {
        self.stop_bit
    }

    /// Number of bits covered, `stop_bit - start_bit + 1`.
    pub fn width(&self) -> usize {
        self.stop_bit - self.start_bit + 1
    }

    /// Largest value that fits in the range: `2^width - 1`.
    pub fn max_value(&self) -> BigUint {
        ones(self.width())
    }
}

impl fmt::Display for BitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.stop_bit, self.start_bit)
    }
}
