//! Valuation engine.
//!
//! Turns a projection into an intrinsic valuation in three pure steps:
//!
//! 1. **Terminal value**: Gordon growth on the final projected FCF,
//!    `tv = fcf_N * (1 + g) / (wacc - g)`
//! 2. **Discounting**: every explicit-period FCF at `(1 + wacc)^i`
//!    (1-based integer exponents), terminal value at the final exponent
//! 3. **Aggregation**: enterprise value as the sum of all discounted cash
//!    flows, divided by shares outstanding for per-share intrinsic value
//!
//! `wacc == g` and a zero share count are the only rejected inputs.
//! Economically implausible but numerically valid assumptions (for example
//! `wacc < g`, which makes the terminal value negative) propagate as plain
//! numbers; judging them is left to the reader of the report.

pub mod engine;
pub mod types;

pub use engine::ValuationEngine;
pub use types::ValuationResult;
