use num_bigint::BigInt;

use crate::algorithms::{int_divmod, int_to_decimal_string};
use crate::DivisionByZeroError;

/// Generic trait for floored division with remainder.
///
/// Computes `(q, r)` such that `self = other * q + r`, with the quotient
/// rounded toward negative infinity and the remainder taking the sign of the
/// divisor whenever it is non-zero.
///
/// Returns an error when the divisor is zero.
pub trait DivModFloor<R: Sized>: Sized {
    /// The quotient/remainder type.
    type Output: Sized;

    /// Returns the floored `(quotient, remainder)` pair for `self / other`.
    fn divmod_floor(self, other: R) -> Result<(Self::Output, Self::Output), DivisionByZeroError>;
}

// --- DivModFloor impls ---

impl DivModFloor<&BigInt> for &BigInt {
    type Output = BigInt;

    fn divmod_floor(self, other: &BigInt) -> Result<(BigInt, BigInt), DivisionByZeroError> {
        int_divmod(self, other)
    }
}

impl DivModFloor<BigInt> for BigInt {
    type Output = BigInt;

    fn divmod_floor(self, other: BigInt) -> Result<(BigInt, BigInt), DivisionByZeroError> {
        int_divmod(&self, &other)
    }
}

impl DivModFloor<&BigInt> for BigInt {
    type Output = BigInt;

    fn divmod_floor(self, other: &BigInt) -> Result<(BigInt, BigInt), DivisionByZeroError> {
        int_divmod(&self, other)
    }
}

/// Exact decimal rendering through the divide-and-conquer converter.
pub trait ToDecimalString {
    /// Returns the conventional decimal representation.
    fn to_decimal_string(&self) -> String;
}

impl ToDecimalString for BigInt {
    fn to_decimal_string(&self) -> String {
        int_to_decimal_string(self)
    }
}
