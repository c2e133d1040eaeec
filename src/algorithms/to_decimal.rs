//! Integer to decimal string conversion.
//!
//! Divide-and-conquer on the decimal digit count: the operand is split by
//! `divmod` against a cached power of ten, both halves are converted
//! recursively, and the low half is zero-padded to its slot width. The
//! powers of ten come cheap: `5^k << k == 10^k`, so only powers of five are
//! actually exponentiated.

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, ToPrimitive, Zero};

use super::divmod_pos;
use super::powers::{compute_powers, PowerTable};

/// Below this many decimal digits, conversion is handed to the native path.
const DIGLIM: usize = 1000;

/// log10(2); used to estimate the digit count from the bit length.
const LOG10_2: f64 = 0.3010299956639812;

// Writes the decimal digits of `n`, zero-padded on the left to exactly `w`
// characters. The caller guarantees n < 10^w.
fn inner(n: BigUint, w: usize, pow10: &PowerTable, out: &mut String) {
    if w <= DIGLIM {
        let s = n.to_string();
        debug_assert!(s.len() <= w);
        for _ in s.len()..w {
            out.push('0');
        }
        out.push_str(&s);
        return;
    }
    let w2 = w >> 1;
    let (hi, lo) = divmod_pos(&n, &pow10[&w2]);
    inner(hi, w - w2, pow10, out);
    inner(lo, w2, pow10, out);
}

/// Converts a [`BigInt`] to its exact decimal string.
///
/// Output is byte-for-byte the conventional representation: no leading
/// zeros except a lone `"0"`, and a leading `-` for negative values. Only
/// the asymptotics differ from `n.to_string()`: O(n^1.58)-class instead of
/// quadratic in the digit count.
///
/// # Example
///
/// ```
/// use fastint::int_to_decimal_string;
/// use num_bigint::BigInt;
///
/// assert_eq!(int_to_decimal_string(&BigInt::from(-1234)), "-1234");
/// ```
pub fn int_to_decimal_string(n: &BigInt) -> String {
    let mag = n.magnitude();
    if mag.is_zero() {
        return "0".to_owned();
    }
    let bits = mag.bits().to_usize().expect("bit length exceeds usize");
    // Digit count estimate. Guessing high is harmless: it only produces
    // leading zeros, stripped below. Guessing low cannot happen for any
    // operand that fits in addressable memory.
    let w = (bits as f64 * LOG10_2) as usize + 1;
    let mut pow10 = compute_powers(w, &BigUint::from(5u32), DIGLIM);
    for (k, v) in pow10.iter_mut() {
        *v <<= *k; // 5^k << k == 10^k
    }

    let mut digits = String::with_capacity(w + 1);
    inner(mag.clone(), w, &pow10, &mut digits);

    let stripped = digits.trim_start_matches('0');
    let mut out = String::with_capacity(stripped.len() + 1);
    if n.is_negative() {
        out.push('-');
    }
    out.push_str(stripped);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_bigint::RandBigInt;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn small_values_match_native() {
        for i in -1100i32..1100 {
            let n = BigInt::from(i);
            assert_eq!(int_to_decimal_string(&n), n.to_string());
        }
    }

    #[test]
    fn power_of_ten_with_sign() {
        let n = -BigInt::from(10u32).pow(50);
        let expected = format!("-1{}", "0".repeat(50));
        assert_eq!(int_to_decimal_string(&n), expected);
    }

    #[test]
    fn random_large_values_match_native() {
        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        for bits in [100u64, 3_000, 10_000, 50_000] {
            let n = rng.gen_bigint(bits);
            assert_eq!(int_to_decimal_string(&n), n.to_string(), "{} bits", bits);
        }
    }

    #[test]
    fn digit_counts_straddling_the_recursion_threshold() {
        // Exactly DIGLIM-1, DIGLIM, and DIGLIM+1 digits, plus neighbors of
        // the power of ten at the boundary.
        for digits in [DIGLIM - 1, DIGLIM, DIGLIM + 1] {
            let p = BigInt::from(10u32).pow(digits as u32 - 1);
            for n in [&p - 1, p.clone(), &p + 1, -&p] {
                assert_eq!(int_to_decimal_string(&n), n.to_string());
            }
        }
    }

    #[test]
    fn nine_runs_are_not_mangled() {
        // All-nines values sit right below a power of ten, where a
        // digit-count estimate off by one would show up as a stray zero.
        for digits in [1usize, 10, 999, 1_000, 1_001, 2_500] {
            let n = BigInt::from(10u32).pow(digits as u32) - 1;
            assert_eq!(int_to_decimal_string(&n), "9".repeat(digits));
        }
    }
}
