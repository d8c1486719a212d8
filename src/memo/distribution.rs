// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The digit-sum distribution N(S).
//!
//! N(S) is the number of ordered 6-tuples of base-13 digits whose digits
//! sum to exactly S. The achievable sums run from 0 (six zeros) to 72 (six
//! twelves), and the whole distribution is held in [`WAYS_BY_SUM`].
//!
//! # Derivation
//!
//! Dropping the upper bound on the digits first, stars-and-bars counts the
//! 6-tuples of arbitrary non-negative integers summing to S as C(S+5, 5).
//! The digits additionally satisfy d < 13, so subtract the tuples that
//! violate it. Let the bad event A_i be "digit i is 13 or more". A tuple in
//! A_i corresponds, by shifting digit i down by 13, to an unconstrained
//! tuple with target sum S - 13; the same shift works for any subset of k
//! bad digits at once, leaving target S - 13k. All C(6, k) subsets of size
//! k contribute the same count, so inclusion-exclusion collapses to a sum
//! over subset sizes:
//!
//! ```text
//! N(S) = Σ_{k=0}^{6} (-1)^k · C(6,k) · C(S - 13k + 5, 5)
//! ```
//!
//! with C(n, 5) = 0 for n < 5 (see [`choose_five`]). The 5 is one less than
//! the half length, matching the fixed lower index of `choose_five`.
//!
//! # Values
//!
//! - N(0) = N(72) = 1, and the distribution is symmetric about 36 because
//!   replacing every digit d by 12 - d maps sum S to 72 - S.
//! - For S ≤ 12 no digit can overflow, so N(S) is pure stars-and-bars.
//! - The first constrained sum is S = 13: 8562 = C(18,5) - 6.
//! - The peak is N(36) = 204 763; the full table sums to 13^6 = 4 826 809.

use crate::digits::binomial::{choose_five, CHOOSE_HALF_LENGTH};
use crate::digits::constants::{BASE, HALF_LENGTH, MAX_HALF_SUM, NSUMS};

/// N(S): the number of 6-digit base-13 sequences with digit sum `sum`.
///
/// Total over all of `usize`: sums past [`MAX_HALF_SUM`] are unachievable
/// and return 0 before any term is evaluated, so no argument ever reaches
/// [`choose_five`] above the compile-time guarded bound. Inside the domain
/// the precomputed [`WAYS_BY_SUM`] is the cheaper way to read values.
///
/// # Example
///
/// ```
/// use beautiful_numbers::ways_for_sum;
///
/// assert_eq!(ways_for_sum(0), 1);  // six zeros
/// assert_eq!(ways_for_sum(1), 6);  // a single 1, in any of six positions
/// assert_eq!(ways_for_sum(72), 1); // six twelves
/// ```
///
/// [`MAX_HALF_SUM`]: crate::digits::constants::MAX_HALF_SUM
pub const fn ways_for_sum(sum: usize) -> i64 {
    // Sums past MAX_HALF_SUM are unachievable, and large enough ones would
    // push the falling factorial inside choose_five past i64.
    if sum > MAX_HALF_SUM {
        return 0;
    }

    let mut total: i64 = 0;
    let mut sign: i64 = 1;

    let mut k = 0;
    while k <= HALF_LENGTH {
        // Stars-and-bars argument after shifting k digits down by the base.
        let argument = sum as i64 - (BASE * k) as i64 + 5;

        // Once the argument drops below 5 this term is zero, and so is
        // every later term (larger k only shrinks the argument further).
        if argument < 5 {
            break;
        }

        // (-1)^k · C(6, k) · C(sum - 13k + 5, 5)
        total += sign * CHOOSE_HALF_LENGTH[k] * choose_five(argument);
        sign = -sign;

        k += 1;
    }

    total
}

/// Evaluate [`ways_for_sum`] across the whole sum domain.
const fn build_ways_table() -> [i64; NSUMS] {
    let mut table = [0i64; NSUMS];

    let mut sum = 0;
    while sum < NSUMS {
        table[sum] = ways_for_sum(sum);
        sum += 1;
    }

    table
}

/// Lookup table of N(S) for S = 0..=72.
///
/// # Memory Layout
///
/// 73 × 8 bytes, folded into the binary at compile time. Being a `const`,
/// it is immutable by construction and safe for unsynchronized concurrent
/// reads from any number of threads.
pub const WAYS_BY_SUM: [i64; NSUMS] = build_ways_table();
