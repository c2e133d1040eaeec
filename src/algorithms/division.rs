//! Recursive floored division.
//!
//! The algorithm is due to Burnikel and Ziegler, "Fast Recursive Division":
//! the dividend is decomposed into digits in base `2^n` (`n` = bit length of
//! the divisor) and each digit is divided by a recursive 2n-by-n-bit
//! primitive that splits the divisor in half per level. All heavy lifting
//! lands in `num_bigint`'s sub-quadratic multiplication instead of
//! quadratic digit-by-digit work.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::DivisionByZeroError;

/// Bit-length excess below which `div2n1n` falls back to the native divmod.
const DIV_LIMIT: usize = 4000;

fn bit_length(x: &BigUint) -> usize {
    x.bits().to_usize().expect("bit length exceeds usize")
}

/// Divides a `2n`-bit non-negative `a` by an `n`-bit positive `b`, where
/// `a < 2^n * b`, returning `(q, r)` with `a = b*q + r` and `0 <= r < b`.
fn div2n1n(a: BigUint, b: &BigUint, n: usize) -> (BigUint, BigUint) {
    if bit_length(&a).saturating_sub(n) <= DIV_LIMIT {
        return a.div_rem(b);
    }
    let mut a = a;
    let mut n = n;
    let shifted;
    let mut b = b;
    let pad = n & 1 == 1;
    if pad {
        // The split below needs an even n; shift everything up one bit.
        a <<= 1usize;
        shifted = b << 1usize;
        b = &shifted;
        n += 1;
    }
    let half_n = n >> 1;
    let mask = (BigUint::one() << half_n) - 1u32;
    let b1 = b >> half_n;
    let b2 = b & &mask;
    let (q1, r) = div3n2n(&a >> n, (&a >> half_n) & &mask, b, &b1, &b2, half_n);
    let (q2, mut r) = div3n2n(r, &a & &mask, b, &b1, &b2, half_n);
    if pad {
        r >>= 1usize;
    }
    ((q1 << half_n) | q2, r)
}

/// Helper for [`div2n1n`]: one quotient digit of at most `n` bits, from the
/// top `2n` bits `a12` and the next `n` bits `a3` of the dividend.
fn div3n2n(
    a12: BigUint,
    a3: BigUint,
    b: &BigUint,
    b1: &BigUint,
    b2: &BigUint,
    n: usize,
) -> (BigUint, BigUint) {
    let (mut q, r) = if &(&a12 >> n) == b1 {
        // The true digit would overflow an n-bit register; clamp it to
        // 2^n - 1 and take the corresponding remainder directly.
        let q = (BigUint::one() << n) - 1u32;
        let r = (a12 - (b1 << n)) + b1;
        (q, r)
    } else {
        div2n1n(a12, b1, n)
    };
    // Correct the trial digit against the low half of the divisor. The
    // intermediate remainder can be transiently negative, so this step runs
    // in signed arithmetic; the trial digit only ever undershoots, and by a
    // bounded handful of units.
    let mut r = BigInt::from((r << n) | a3) - BigInt::from(&q * b2);
    while r.is_negative() {
        q -= 1u32;
        r += BigInt::from(b.clone());
    }
    (q, r.to_biguint().unwrap())
}

/// Decomposes non-negative `a` into little-endian digits in base `2^n`.
///
/// The most significant digit (last) is non-zero; zero decomposes to an
/// empty vector. The split is balanced so each level peels half the
/// remaining digits with a single shift.
fn int_to_digits(a: &BigUint, n: usize) -> Vec<BigUint> {
    fn inner(x: BigUint, l: usize, r: usize, n: usize, digits: &mut [BigUint]) {
        if l + 1 == r {
            digits[l] = x;
            return;
        }
        let mid = (l + r) >> 1;
        let shift = (mid - l) * n;
        let upper = &x >> shift;
        let lower = x ^ (&upper << shift);
        inner(lower, l, mid, n, digits);
        inner(upper, mid, r, n, digits);
    }

    if a.is_zero() {
        return Vec::new();
    }
    let len = (bit_length(a) + n - 1) / n;
    let mut digits = vec![BigUint::zero(); len];
    inner(a.clone(), 0, len, n, &mut digits);
    digits
}

/// Combines base-`2^n` digits back into an integer; inverse of
/// [`int_to_digits`].
fn digits_to_int(digits: &[BigUint], n: usize) -> BigUint {
    fn inner(digits: &[BigUint], l: usize, r: usize, n: usize) -> BigUint {
        if l + 1 == r {
            return digits[l].clone();
        }
        let mid = (l + r) >> 1;
        let shift = (mid - l) * n;
        (inner(digits, mid, r, n) << shift) + inner(digits, l, mid, n)
    }

    if digits.is_empty() {
        BigUint::zero()
    } else {
        inner(digits, 0, digits.len(), n)
    }
}

/// Divides non-negative `a` by positive `b`: grade-school in base `2^n`
/// with `n` = bit length of `b`, one [`div2n1n`] call per quotient digit.
pub(crate) fn divmod_pos(a: &BigUint, b: &BigUint) -> (BigUint, BigUint) {
    let n = bit_length(b);
    let a_digits = int_to_digits(a, n);

    let mut r = BigUint::zero();
    let mut q_digits = Vec::with_capacity(a_digits.len());
    for a_digit in a_digits.into_iter().rev() {
        let (q_digit, next_r) = div2n1n((r << n) | a_digit, b, n);
        debug_assert!(&next_r < b);
        q_digits.push(q_digit);
        r = next_r;
    }
    q_digits.reverse();
    (digits_to_int(&q_digits, n), r)
}

/// Floored division with remainder.
///
/// Returns the unique `(q, r)` with `a = b*q + r` and `r` taking the sign of
/// `b` whenever it is non-zero (the floor-division convention, matching
/// [`num_integer::Integer::div_mod_floor`]). Errors when `b` is zero.
///
/// Time complexity is O(n^1.58) in the combined bit length, against O(n^2)
/// for the schoolbook algorithm.
///
/// # Example
///
/// ```
/// use fastint::int_divmod;
/// use num_bigint::BigInt;
///
/// let (q, r) = int_divmod(&BigInt::from(-17), &BigInt::from(5))?;
/// assert_eq!((q, r), (BigInt::from(-4), BigInt::from(3)));
/// # Ok::<(), fastint::DivisionByZeroError>(())
/// ```
pub fn int_divmod(a: &BigInt, b: &BigInt) -> Result<(BigInt, BigInt), DivisionByZeroError> {
    if b.is_zero() {
        Err(DivisionByZeroError)
    } else if b.is_negative() {
        let (q, r) = int_divmod(&-a, &-b)?;
        Ok((q, -r))
    } else if a.is_negative() {
        // Complement identity: with (q', r') = divmod(~a, b), the floored
        // result for the negative dividend is (~q', b + ~r'). This keeps
        // the recursive core entirely non-negative.
        let (q, r) = int_divmod(&(-a - 1), b)?;
        Ok((-q - 1, b - r - 1))
    } else {
        let (q, r) = divmod_pos(a.magnitude(), b.magnitude());
        Ok((q.into(), r.into()))
    }
}
