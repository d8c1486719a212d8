// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Base-13 digit arithmetic.
//!
//! This module contains the fixed vocabulary of the problem:
//! - constants: the base, the half length, and the derived sum domain
//! - binomial: the C(n, 5) counter and the C(6, k) row used by
//!   inclusion-exclusion

pub mod binomial;
pub mod constants;

// Re-export for convenience
pub use binomial::{choose_five, CHOOSE_HALF_LENGTH};
pub use constants::*;
