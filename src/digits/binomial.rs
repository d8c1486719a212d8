// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Binomial coefficients needed by inclusion-exclusion.
//!
//! The digit-sum distribution only ever needs two shapes of binomial
//! coefficient:
//!
//! - C(n, 5) for varying n: the stars-and-bars count of 6-tuples of
//!   unbounded non-negative integers with a given sum, provided by
//!   [`choose_five`];
//! - the single row C(6, k) for k = 0..=6: the number of ways to pick a
//!   subset of the six digit positions, provided by [`CHOOSE_HALF_LENGTH`].
//!
//! Both are exact in i64 arithmetic throughout the argument range this
//! crate uses (see the compile-time guard in [`constants`]).
//!
//! [`constants`]: crate::digits::constants

use crate::digits::constants::HALF_LENGTH;

/// C(n, 5), with C(n, 5) = 0 whenever n < 5.
///
/// Computed as the falling factorial n(n-1)(n-2)(n-3)(n-4) divided by
/// 5! = 120. The division is exact: any product of five consecutive
/// integers is divisible by 120. The zero convention below 5 covers both
/// the ordinary empty cases (0 ≤ n < 5) and the negative arguments that
/// inclusion-exclusion produces once a shifted sum drops below zero. The
/// falling factorial fits i64 up to the largest argument the distribution
/// produces, [`MAX_CHOOSE_ARG`]; the guard in [`constants`] enforces that
/// bound at compile time.
///
/// [`MAX_CHOOSE_ARG`]: crate::digits::constants::MAX_CHOOSE_ARG
/// [`constants`]: crate::digits::constants
pub const fn choose_five(n: i64) -> i64 {
    if n < 5 {
        return 0;
    }
    n * (n - 1) * (n - 2) * (n - 3) * (n - 4) / 120
}

/// Build the row C(HALF_LENGTH, k) for k = 0..=HALF_LENGTH.
///
/// Uses the multiplicative Pascal recurrence C(n, k+1) = C(n, k)·(n-k)/(k+1);
/// each division is exact because the left side is an integer.
const fn choose_half_length_row() -> [i64; HALF_LENGTH + 1] {
    let mut coefficients = [0i64; HALF_LENGTH + 1];
    coefficients[0] = 1;

    let mut k = 0;
    while k < HALF_LENGTH {
        coefficients[k + 1] = coefficients[k] * (HALF_LENGTH - k) as i64 / (k + 1) as i64;
        k += 1;
    }

    coefficients
}

/// C(6, k) for k = 0..=6: how many k-subsets the six digit positions have.
///
/// `CHOOSE_HALF_LENGTH[k]` weights the inclusion-exclusion term in which k
/// digits are forced past the base. The row is {1, 6, 15, 20, 15, 6, 1},
/// folded at compile time rather than hardcoded.
pub const CHOOSE_HALF_LENGTH: [i64; HALF_LENGTH + 1] = choose_half_length_row();
