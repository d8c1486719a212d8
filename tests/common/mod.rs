// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! Reference implementations built from first principles, so the
//! integration checks never reuse the combinatorics under test. Everything
//! takes the base and length as parameters: the crate's fixed 13/6 problem
//! is one instantiation, and shrinking the parameters makes exhaustive
//! verification affordable.

#![allow(dead_code)] // not every test binary uses every helper

/// Digit-sum distribution of `length` digits in 0..base, by repeated
/// convolution with the uniform single-digit distribution.
pub fn convolved_distribution(base: usize, length: usize) -> Vec<i64> {
    let max_sum = length * (base - 1);
    let mut distribution = vec![0i64; max_sum + 1];
    distribution[0] = 1;

    for _ in 0..length {
        let mut next = vec![0i64; max_sum + 1];
        for (sum, &ways) in distribution.iter().enumerate() {
            if ways == 0 {
                continue;
            }
            for digit in 0..base {
                next[sum + digit] += ways;
            }
        }
        distribution = next;
    }

    distribution
}

/// Count the beautiful numbers of `2·half + 1` digits in base `base` by
/// enumerating every numeral.
pub fn exhaustive_beautiful_count(base: usize, half: usize) -> i64 {
    let length = 2 * half + 1;
    let mut digits = vec![0usize; length];
    let mut count = 0i64;

    'numerals: loop {
        let left: usize = digits[..half].iter().sum();
        let right: usize = digits[half + 1..].iter().sum();
        if left == right {
            count += 1;
        }

        // Advance the numeral like an odometer, least significant digit first.
        let mut position = length;
        while position > 0 {
            position -= 1;
            digits[position] += 1;
            if digits[position] < base {
                continue 'numerals;
            }
            digits[position] = 0;
        }

        return count;
    }
}

/// C(n, k) by the multiplicative Pascal recurrence; 0 for n < k, including
/// every negative n.
pub fn general_binomial(n: i64, k: usize) -> i64 {
    if n < k as i64 {
        return 0;
    }

    let mut result = 1i64;
    for i in 0..k as i64 {
        result = result * (n - i) / (i + 1);
    }
    result
}

/// N(S) for `length` digits in 0..base via inclusion-exclusion, evaluating
/// all `length + 1` terms with no early break. `length` must be at least 1.
pub fn inclusion_exclusion_ways(base: usize, length: usize, sum: usize) -> i64 {
    assert!(length > 0, "a distribution needs at least one digit");

    let stars_and_bars_degree = length - 1;
    let mut total = 0i64;
    let mut sign = 1i64;

    for k in 0..=length {
        let argument = sum as i64 - (base * k) as i64 + stars_and_bars_degree as i64;
        total += sign
            * general_binomial(length as i64, k)
            * general_binomial(argument, stars_and_bars_degree);
        sign = -sign;
    }

    total
}
