//! Projection engine.
//!
//! Projects revenue and free cash flow forward over the explicit horizon.
//! The recurrence is deliberately simple: revenue compounds at a single
//! growth rate, FCF is approximated as NOPAT (EBIT after tax, no capex or
//! working-capital adjustment).
//!
//! The base-year revenue is treated as a pre-growth base: year 1 of the
//! projection is already `revenue_year1 * (1 + growth)`, not the raw input.
//! That compounding-from-base semantics is part of the model's contract.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_HORIZON_YEARS;
use crate::inputs::Assumptions;

/// One projected year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    /// 1-based year index
    pub year: u32,
    /// Projected revenue
    pub revenue: f64,
    /// Projected free cash flow (NOPAT)
    pub fcf: f64,
}

/// Ordered per-year projections, chronological from year 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Per-year rows, index i holding year i+1
    pub years: Vec<YearProjection>,
}

impl ProjectionResult {
    /// Number of projected years.
    pub fn horizon(&self) -> usize {
        self.years.len()
    }

    /// Last projected year, if the horizon is non-empty.
    pub fn final_year(&self) -> Option<&YearProjection> {
        self.years.last()
    }
}

/// Pure projection engine over a fixed horizon.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionEngine {
    horizon_years: usize,
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectionEngine {
    /// Create an engine with the default five-year horizon.
    pub fn new() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }

    /// Create an engine with a custom horizon.
    ///
    /// A zero horizon produces an empty projection; the valuation engine
    /// rejects that downstream, so callers wanting a result pass >= 1.
    pub fn with_horizon(horizon_years: usize) -> Self {
        Self { horizon_years }
    }

    /// Project revenue and FCF over the horizon.
    ///
    /// Performs no validation: NaN or infinite inputs propagate
    /// arithmetically, exactly as the formulas dictate.
    pub fn project(&self, assumptions: &Assumptions) -> ProjectionResult {
        let mut years = Vec::with_capacity(self.horizon_years);
        let mut revenue = assumptions.revenue_year1;

        for year in 1..=self.horizon_years as u32 {
            revenue *= 1.0 + assumptions.revenue_growth;
            let ebit = revenue * assumptions.operating_margin;
            let fcf = ebit * (1.0 - assumptions.tax_rate);
            years.push(YearProjection { year, revenue, fcf });
        }

        ProjectionResult { years }
    }
}

// ============================================================================
// Tests
// ============================================================================
