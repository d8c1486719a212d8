// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line wrapper that prints the beautiful-number count.
//!
//! The count is a closed-form constant; this binary exists so it can be
//! read without writing a program. Run with `RUST_LOG=debug` to see table
//! diagnostics on stderr.

use beautiful_numbers::count_beautiful_numbers;
use beautiful_numbers::digits::constants::{MAX_HALF_SUM, NSUMS};
use beautiful_numbers::WAYS_BY_SUM;
use clap::Parser;

/// Count the 13-digit base-13 numbers whose first six digits sum to the
/// same value as their last six.
#[derive(Parser, Debug)]
#[clap(version)]
struct Args {}

fn main() {
    env_logger::init();
    let _args = Args::parse();

    log::debug!(
        "digit-sum table: {} half sequences across {} sums, peak N({}) = {}",
        WAYS_BY_SUM.iter().sum::<i64>(),
        NSUMS,
        MAX_HALF_SUM / 2,
        WAYS_BY_SUM[MAX_HALF_SUM / 2],
    );

    println!("{}", count_beautiful_numbers());
}
