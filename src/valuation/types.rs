//! Valuation result types.

use serde::{Deserialize, Serialize};

/// Derived scalars of a completed valuation.
///
/// `discounted_fcfs` is index-aligned with the projection that produced it
/// (position i holds year i+1's discounted FCF).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Terminal value at the end of the explicit horizon, undiscounted
    pub terminal_value: f64,
    /// Terminal value discounted to present
    pub discounted_terminal: f64,
    /// Explicit-period FCFs discounted to present, chronological order
    pub discounted_fcfs: Vec<f64>,
    /// Sum of all discounted cash flows including the terminal value
    pub enterprise_value: f64,
    /// Enterprise value divided by shares outstanding
    pub intrinsic_value_per_share: f64,
}
