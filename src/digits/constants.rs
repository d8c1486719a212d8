// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the beautiful-number problem.
//!
//! A beautiful number has 13 digits in base 13: six on the left, one in the
//! middle, six on the right. Every quantity the computation touches derives
//! from the base and the half length, so those two are defined here and
//! everything else is computed from them.

/// The numeral base. Digits range over `0..BASE`.
pub const BASE: usize = 13;

/// Number of digits in each half of the numeral.
///
/// The middle digit belongs to neither half; it is unconstrained and only
/// contributes a multiplicative factor of [`BASE`] to the final count.
pub const HALF_LENGTH: usize = 6;

/// Total number of digits in the numeral (two halves plus the middle).
///
/// Equal to [`BASE`] for this problem. That is a coincidence of the
/// puzzle, not something any formula relies on.
pub const NUMERAL_LENGTH: usize = 2 * HALF_LENGTH + 1;

/// Largest achievable digit sum of one half: six digits of 12 each.
pub const MAX_HALF_SUM: usize = HALF_LENGTH * (BASE - 1);

/// Number of achievable half sums, 0 through [`MAX_HALF_SUM`] inclusive.
///
/// This is the size of the digit-sum distribution table.
pub const NSUMS: usize = MAX_HALF_SUM + 1;

/// Largest argument ever fed to the C(n, 5) counter: the unconstrained
/// stars-and-bars term at the top of the sum domain, MAX_HALF_SUM + 5.
pub const MAX_CHOOSE_ARG: usize = MAX_HALF_SUM + HALF_LENGTH - 1;

/// Compile-time guard for the falling factorial in `choose_five`.
///
/// The counter multiplies five consecutive integers before dividing by
/// 5! = 120, and 6000^5 < 2^63, so any argument below 6000 cannot wrap
/// an i64.
const _: () = assert!(
    MAX_CHOOSE_ARG < 6000,
    "choose_five falling factorial must fit in i64"
);
