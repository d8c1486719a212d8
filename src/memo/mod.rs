// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! MEMO data (immutable, precomputed).
//!
//! The one MEMO structure this problem needs is the digit-sum distribution:
//! the table of N(S) values read by the aggregator. It is small enough to
//! fold at compile time, so unlike a heap-built lookup table there is no
//! initialization step at all.

pub mod distribution;

pub use distribution::{ways_for_sum, WAYS_BY_SUM};
