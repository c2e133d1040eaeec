//! Power table precomputation.
//!
//! Every recursion in this crate has the same shape: a width `w` is split as
//! `lo = w >> 1`, `hi = w - lo`, and recombination needs `base^lo`. Rather
//! than have each algorithm carry an ad-hoc on-the-fly cache (which tends to
//! do needless work), the full set of powers a recursion will dereference is
//! computed up front, as cheaply as possible, and handed to the recursion as
//! a read-only table.

use std::collections::{BTreeSet, HashMap, HashSet};

use num_bigint::BigUint;

/// A table of `base^e` values keyed by exponent.
///
/// Built by [`compute_powers`] for one top-level call and discarded when that
/// call returns; nothing is shared or persisted.
pub type PowerTable = HashMap<usize, BigUint>;

/// Computes every power of `base` that a halving recursion starting at width
/// `w` and bottoming out at widths `<= more_than` will dereference.
///
/// The exponent set is worked out first on plain integers by simulating the
/// recursion, so no power is ever computed speculatively. Values are then
/// produced in ascending exponent order, each by the cheapest available step:
/// a single multiply by `base` when the predecessor exponent is in the table,
/// otherwise by squaring the half-exponent entry (squaring a value against
/// itself is cheaper than a general multiply on some backends), plus one
/// extra factor of `base` for odd exponents.
///
/// Returns an empty table when `w <= more_than`.
///
/// # Example
///
/// ```
/// use fastint::compute_powers;
/// use num_bigint::BigUint;
///
/// let table = compute_powers(10, &BigUint::from(2u32), 3);
/// let mut keys: Vec<_> = table.keys().copied().collect();
/// keys.sort_unstable();
/// assert_eq!(keys, [2, 5]);
/// assert_eq!(table[&5], BigUint::from(32u32));
/// ```
pub fn compute_powers(w: usize, base: &BigUint, more_than: usize) -> PowerTable {
    // Bookkeeping pass: find the exponents the recursion dereferences.
    // O(log w) integer work, no big-integer arithmetic yet.
    let mut seen = HashSet::new();
    let mut need = BTreeSet::new();
    let mut pending = vec![w];
    while let Some(w) = pending.pop() {
        if w <= more_than || !seen.insert(w) {
            continue;
        }
        let lo = w >> 1;
        // Only `lo` is dereferenced at this node; whether `hi` is needed
        // depends on which widths other paths of the recursion reach.
        need.insert(lo);
        pending.push(lo);
        if w & 1 == 1 {
            pending.push(lo + 1);
        }
    }

    let mut table = PowerTable::with_capacity(need.len());
    let mut exponents = need.into_iter();
    let first = match exponents.next() {
        Some(first) => first,
        None => return table,
    };
    table.insert(first, base.pow(first as u32));
    for this in exponents {
        let value = match table.get(&(this - 1)) {
            // One extra factor of `base` is the cheapest possible step.
            Some(prev) => prev * base,
            None => {
                let lo = this >> 1;
                let hi = this - lo;
                let half = &table[&lo];
                let mut sq = half * half;
                if hi != lo {
                    debug_assert_eq!(hi, lo + 1);
                    sq *= base;
                }
                sq
            }
        };
        table.insert(this, value);
    }
    table
}
