// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The aggregation step: from the digit-sum distribution to the answer.
//!
//! A beautiful number is assembled from a left half, a middle digit, and a
//! right half, chosen independently, and the halves only interact through
//! their common digit sum. Grouping the numerals by that sum turns the
//! count into a single pass over the MEMO table.

use crate::digits::constants::BASE;
use crate::memo::distribution::WAYS_BY_SUM;

/// Count the beautiful numbers: 13-digit base-13 numerals (leading zeros
/// allowed) whose first six digits sum to the same value as their last six.
///
/// For each half sum S there are N(S) left halves, 13 middle digits, and
/// N(S) right halves, all independent, so the total is Σ 13·N(S)² over
/// S = 0..=72. The result sits comfortably inside i64: about 9.2·10^12,
/// out of 13^13 ≈ 3.0·10^14 candidate numerals.
///
/// # Example
///
/// ```
/// use beautiful_numbers::count_beautiful_numbers;
///
/// assert_eq!(count_beautiful_numbers(), 9_203_637_295_151);
/// ```
pub fn count_beautiful_numbers() -> i64 {
    let mut total = 0;

    for &ways in WAYS_BY_SUM.iter() {
        total += BASE as i64 * ways * ways;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::constants::NUMERAL_LENGTH;

    #[test]
    fn test_positive_and_within_numeral_space() {
        let total = count_beautiful_numbers();
        let all_numerals = (BASE as i64).pow(NUMERAL_LENGTH as u32);

        assert!(total > 0);
        assert!(total < all_numerals); // 302_875_106_592_253
    }

    #[test]
    fn test_divisible_by_base() {
        // Every addend carries the factor 13 from the free middle digit.
        assert_eq!(count_beautiful_numbers() % BASE as i64, 0);
    }

    #[test]
    fn test_matches_table_aggregation() {
        let squares: i64 = WAYS_BY_SUM.iter().map(|&ways| ways * ways).sum();
        assert_eq!(count_beautiful_numbers(), BASE as i64 * squares);
    }
}
