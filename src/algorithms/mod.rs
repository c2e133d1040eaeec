//! Divide-and-conquer algorithms for big integer arithmetic.
//!
//! This module holds the recursive replacements for the quadratic paths:
//! radix conversion in both directions and floored division. Each algorithm
//! precomputes the powers its recursion will dereference with
//! [`compute_powers`] and then splits its operand in half per level,
//! recombining with a single multiplication.

#![allow(clippy::many_single_char_names)]

mod division;
mod from_decimal;
mod powers;
mod to_decimal;

pub use self::division::int_divmod;
pub use self::from_decimal::{int_from_string, str_to_int};
pub use self::powers::{compute_powers, PowerTable};
pub use self::to_decimal::int_to_decimal_string;

pub(crate) use self::division::divmod_pos;
