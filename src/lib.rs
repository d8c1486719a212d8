// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Closed-form count of "beautiful" 13-digit base-13 numbers.
//!
//! A beautiful number is a 13-digit numeral in base 13 (leading zeros
//! allowed) whose first six digits sum to the same value as its last six
//! digits. The middle (7th) digit is unconstrained. This crate computes the
//! count of all such numerals without enumerating the 13^13 candidates.
//!
//! # Architecture
//!
//! Everything in this crate is MEMO data: immutable tables folded at
//! compile time. There is no dynamic tier, because nothing in the problem
//! ever mutates.
//!
//! - [`digits`] holds the problem constants (base, half length, the derived
//!   sum domain) and the binomial coefficient helpers.
//! - [`memo`] holds the digit-sum distribution: for each achievable half
//!   sum S in 0..=72, the number N(S) of 6-digit base-13 sequences whose
//!   digits sum to exactly S. The table is folded at compile time.
//! - [`count`] combines the table into the final total.
//!
//! # Counting Argument
//!
//! A beautiful number with half sum S is assembled independently from a
//! left half (N(S) ways), a middle digit (13 ways), and a right half
//! (N(S) ways), so the answer is
//!
//! ```text
//! total = Σ_{S=0}^{72} 13 · N(S)²
//! ```
//!
//! N(S) itself comes from inclusion-exclusion over the per-digit upper
//! bound: stars-and-bars counts the 6-tuples of unbounded non-negative
//! integers summing to S as C(S+5, 5), and each subset of k digits forced
//! past 12 is accounted for by shifting those digits down by 13, giving
//!
//! ```text
//! N(S) = Σ_{k=0}^{6} (-1)^k · C(6,k) · C(S - 13k + 5, 5)
//! ```
//!
//! with the convention that C(n, 5) = 0 whenever n < 5. See
//! [`memo::distribution`] for the derivation in full.
//!
//! # References
//!
//! - Stars and bars, and counting with bounded parts: Feller, *An
//!   Introduction to Probability Theory and Its Applications*, Vol. 1,
//!   §II.5.

pub mod count;
pub mod digits;
pub mod memo;

// Re-export the headline operation and the distribution it is built from.
pub use count::count_beautiful_numbers;
pub use memo::distribution::{ways_for_sum, WAYS_BY_SUM};
