//! Asymptotically fast arithmetic for big integers.
//!
//! Schoolbook long division and digit-by-digit radix conversion are both
//! quadratic in the number of digits, and become the dominant cost once
//! operands reach tens of thousands of digits. This crate layers
//! divide-and-conquer replacements on top of [`num_bigint`]: operands are
//! split in half and the halves recombined with one sub-quadratic
//! multiplication per recursion level, so the overall cost tracks the
//! multiplication algorithm (Karatsuba-class, about O(n^1.585)) instead.
//!
//! Provided operations:
//!
//! - [`int_to_decimal_string`]: exact decimal text for a [`BigInt`].
//! - [`int_from_string`] / [`str_to_int`]: decimal text back to a [`BigInt`],
//!   tolerant of `_` grouping separators, and (for `str_to_int`) of a leading
//!   sign and surrounding whitespace.
//! - [`int_divmod`]: floored division with remainder, via the recursive
//!   2n-by-n-bit algorithm of Burnikel and Ziegler.
//! - [`compute_powers`]: the power table precomputation shared by the
//!   recursive algorithms, usable on its own.
//!
//! Below (crate-private) size thresholds every operation falls back to the
//! native `num_bigint` path, so small operands pay almost nothing.
//!
//! # Example
//!
//! ```
//! use fastint::{int_divmod, int_to_decimal_string, str_to_int};
//! use num_bigint::BigInt;
//!
//! let a = str_to_int(" -17 ")?;
//! let (q, r) = int_divmod(&a, &BigInt::from(5))?;
//! assert_eq!((q, r), (BigInt::from(-4), BigInt::from(3)));
//! assert_eq!(int_to_decimal_string(&a), "-17");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! All functions are pure: every power table and digit vector is built and
//! consumed within one call, so concurrent use from independent threads needs
//! no locking.

use core::fmt;

pub use num_bigint::{BigInt, BigUint};

pub mod algorithms;
mod traits;

pub use crate::algorithms::{
    compute_powers, int_divmod, int_from_string, int_to_decimal_string, str_to_int, PowerTable,
};
pub use crate::traits::{DivModFloor, ToDecimalString};

/// An error which can be returned when parsing a decimal string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseErrorKind {
    Empty,
    InvalidDigit,
}

impl ParseError {
    pub(crate) fn empty() -> Self {
        ParseError {
            kind: ParseErrorKind::Empty,
        }
    }

    pub(crate) fn invalid_digit() -> Self {
        ParseError {
            kind: ParseErrorKind::InvalidDigit,
        }
    }

    fn description(&self) -> &str {
        match self.kind {
            ParseErrorKind::Empty => "cannot parse integer from empty string",
            ParseErrorKind::InvalidDigit => "invalid digit found in string",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl std::error::Error for ParseError {}

/// The error returned by [`int_divmod`] when the divisor is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionByZeroError;

impl fmt::Display for DivisionByZeroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("attempt to divide by zero")
    }
}

impl std::error::Error for DivisionByZeroError {}
