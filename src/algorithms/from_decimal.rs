//! Decimal string to integer conversion.
//!
//! Divide-and-conquer on the digit count: a digit substring is split in the
//! middle, both halves are converted recursively, and the high half is
//! recombined as `high * 10^len(low) + low`, with `10^k` obtained from a
//! cached `5^k` and a `k`-bit shift.

use num_bigint::{BigInt, BigUint};

use super::powers::{compute_powers, PowerTable};
use crate::ParseError;

/// Below this many digits, a substring is handed to the native parser.
const DIGLIM: usize = 2048;

// Converts the digit substring s[a..b]. Precondition: s is all ASCII digits.
fn inner(s: &[u8], a: usize, b: usize, pow5: &PowerTable) -> BigUint {
    if b - a <= DIGLIM {
        return BigUint::parse_bytes(&s[a..b], 10).unwrap();
    }
    let mid = (a + b + 1) >> 1;
    inner(s, mid, b, pow5) + ((inner(s, a, mid, pow5) * &pow5[&(b - mid)]) << (b - mid))
}

fn str_to_int_inner(s: &[u8]) -> BigUint {
    let pow5 = compute_powers(s.len(), &BigUint::from(5u32), DIGLIM);
    inner(s, 0, s.len(), &pow5)
}

/// Converts a string of decimal digits into a (non-negative) [`BigInt`].
///
/// Embedded `_` grouping separators and trailing whitespace are accepted;
/// any sign must already have been handled by the caller (see
/// [`str_to_int`]). Errors if, after separator removal, the input is empty
/// or contains a non-digit.
///
/// # Example
///
/// ```
/// use fastint::int_from_string;
/// use num_bigint::BigInt;
///
/// let n = int_from_string("12_345_678_901_234_567_890")?;
/// assert_eq!(n, "12345678901234567890".parse::<BigInt>().unwrap());
/// # Ok::<(), fastint::ParseError>(())
/// ```
pub fn int_from_string(s: &str) -> Result<BigInt, ParseError> {
    let s = s.trim_end();
    let digits: Vec<u8> = s.bytes().filter(|&b| b != b'_').collect();
    if digits.is_empty() {
        return Err(ParseError::empty());
    }
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(ParseError::invalid_digit());
    }
    Ok(BigInt::from(str_to_int_inner(&digits)))
}

/// Parses decimal text into a [`BigInt`].
///
/// Accepts what a simple anchored pattern would: optional leading
/// whitespace, an optional `+` or `-`, one or more digits possibly mixed
/// with `_` separators, then optional whitespace up to the end of input.
/// Anything else is a format error; in particular trailing non-whitespace
/// junk is rejected rather than ignored.
pub fn str_to_int(s: &str) -> Result<BigInt, ParseError> {
    let t = s.trim_start();
    let (negative, t) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let body = t.trim_end();
    if !body.bytes().all(|b| b.is_ascii_digit() || b == b'_') {
        return Err(ParseError::invalid_digit());
    }
    let v = int_from_string(body)?;
    Ok(if negative { -v } else { v })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_digits() {
        let n = int_from_string("12345678901234567890").unwrap();
        assert_eq!(n, "12345678901234567890".parse::<BigInt>().unwrap());
        assert_eq!(int_from_string("0").unwrap(), BigInt::from(0));
        assert_eq!(int_from_string("007").unwrap(), BigInt::from(7));
    }

    #[test]
    fn separators_and_trailing_whitespace() {
        assert_eq!(
            int_from_string("1_000_000 \n").unwrap(),
            BigInt::from(1_000_000)
        );
        assert_eq!(int_from_string("1_2_3").unwrap(), BigInt::from(123));
    }

    #[test]
    fn signs_and_surrounding_whitespace() {
        assert_eq!(str_to_int("  +42  ").unwrap(), BigInt::from(42));
        assert_eq!(str_to_int("\t-1_234\n").unwrap(), BigInt::from(-1234));
        assert_eq!(str_to_int("-0").unwrap(), BigInt::from(0));
        assert_eq!(str_to_int("17").unwrap(), BigInt::from(17));
    }

    #[test]
    fn malformed_input_is_rejected() {
        for bad in ["", "   ", "+", "-", "_", "+_", "abc", "12abc", "1.5", "0x10", "--3", "1 2"] {
            assert!(str_to_int(bad).is_err(), "{:?} should not parse", bad);
        }
        for bad in ["", " ", "abc", "-3", "+3", "1.5"] {
            assert!(int_from_string(bad).is_err(), "{:?} should not parse", bad);
        }
    }

    #[test]
    fn long_strings_straddling_the_recursion_threshold() {
        for len in [DIGLIM - 1, DIGLIM, DIGLIM + 1, 3 * DIGLIM + 17] {
            let s: String = std::iter::once('1')
                .chain(std::iter::repeat('9').take(len - 1))
                .collect();
            let n = int_from_string(&s).unwrap();
            assert_eq!(n, s.parse::<BigInt>().unwrap(), "{} digits", len);
        }
    }

    #[test]
    fn leading_zeros_in_long_strings() {
        let s = format!("{}{}", "0".repeat(100), "5".repeat(3000));
        let n = int_from_string(&s).unwrap();
        assert_eq!(n, s.parse::<BigInt>().unwrap());
    }
}
