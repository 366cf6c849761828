//! Pairwise divisibility over a single collection
//!
//! Both functions relate members of a collection only to other members of
//! the same collection: `factors_of` lists in-collection divisors, and
//! `factors_for` lists in-collection multiples. They are pure and perform
//! no I/O; caching lives in the `cache` module.

use std::collections::BTreeMap;

/// Mapping from each distinct member of a collection to the ordered list
/// of other members satisfying a divisibility relation with it.
///
/// Value lists preserve the relative order of the input; duplicate
/// occurrences of a qualifying value are each listed.
pub type FactorMapping = BTreeMap<i64, Vec<i64>>;

/// Whether `divisor` evenly divides `dividend`.
///
/// Zero never qualifies as a divisor and is skipped rather than faulted.
/// `i64::MIN % -1` overflows even though its remainder is mathematically
/// zero, so the `checked_rem` overflow case counts as divisible.
fn divides(divisor: i64, dividend: i64) -> bool {
    divisor != 0 && dividend.checked_rem(divisor).unwrap_or(0) == 0
}

/// For each distinct `n` in `numbers`, the members `i` with `i != n` and
/// `n % i == 0` (the divisors of `n` drawn from the collection).
///
/// Every nonzero member divides `0`, so key `0` lists all nonzero others.
/// Exclusion of the probed element is by value, so all occurrences of `n`
/// are excluded, not just one.
pub fn factors_of(numbers: &[i64]) -> FactorMapping {
    numbers
        .iter()
        .map(|&num| {
            let divisors = numbers
                .iter()
                .copied()
                .filter(|&i| i != num && divides(i, num))
                .collect();
            (num, divisors)
        })
        .collect()
}

/// For each distinct `n` in `numbers`, the members `i` with `i != n` and
/// `i % n == 0` (the multiples of `n` drawn from the collection).
///
/// `0` divides nothing but itself, and the probed value is excluded, so
/// key `0` always maps to an empty list. In the other direction `0` is a
/// multiple of every nonzero member, so it appears in their lists.
pub fn factors_for(numbers: &[i64]) -> FactorMapping {
    numbers
        .iter()
        .map(|&num| {
            let multiples = numbers
                .iter()
                .copied()
                .filter(|&i| i != num && divides(num, i))
                .collect();
            (num, multiples)
        })
        .collect()
}
