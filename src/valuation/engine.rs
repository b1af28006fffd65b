//! Valuation computations.

use tracing::debug;

use crate::error::{Result, ValuationError};
use crate::inputs::Assumptions;
use crate::projection::ProjectionResult;
use crate::valuation::types::ValuationResult;

/// Pure valuation engine.
///
/// Stateless; every method is a function of its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuationEngine;

impl ValuationEngine {
    /// Create a valuation engine.
    pub fn new() -> Self {
        Self
    }

    /// Gordon growth terminal value of the final projected FCF.
    ///
    /// Fails with `DegenerateValuation` when `wacc == terminal_growth`,
    /// which would otherwise divide by zero. `wacc < terminal_growth` is
    /// permitted and yields a negative terminal value.
    pub fn terminal_value(&self, last_fcf: f64, wacc: f64, terminal_growth: f64) -> Result<f64> {
        if wacc == terminal_growth {
            return Err(ValuationError::DegenerateValuation {
                wacc,
                terminal_growth,
            });
        }
        Ok(last_fcf * (1.0 + terminal_growth) / (wacc - terminal_growth))
    }

    /// Discount explicit-period FCFs and the terminal value to present.
    ///
    /// Year i (1-based) is discounted at `(1 + wacc)^i`; the terminal value
    /// at the final year's exponent. Exponents are exact integer powers.
    pub fn discount(
        &self,
        fcfs: &[f64],
        terminal_value: f64,
        wacc: f64,
    ) -> (Vec<f64>, f64) {
        let discounted_fcfs: Vec<f64> = fcfs
            .iter()
            .enumerate()
            .map(|(i, fcf)| fcf / (1.0 + wacc).powi(i as i32 + 1))
            .collect();

        let discounted_terminal = terminal_value / (1.0 + wacc).powi(fcfs.len() as i32);

        (discounted_fcfs, discounted_terminal)
    }

    /// Full valuation of a projection: terminal value, discounting and
    /// aggregation into enterprise and per-share intrinsic value.
    ///
    /// Fails with `EmptyProjection` on a zero-year horizon,
    /// `DegenerateValuation` when `wacc == terminal_growth`, and
    /// `DivisionByZero` when shares outstanding is zero.
    pub fn value(
        &self,
        projection: &ProjectionResult,
        assumptions: &Assumptions,
    ) -> Result<ValuationResult> {
        let last_fcf = projection
            .final_year()
            .ok_or(ValuationError::EmptyProjection)?
            .fcf;

        if assumptions.shares_outstanding == 0.0 {
            return Err(ValuationError::DivisionByZero);
        }

        let terminal_value =
            self.terminal_value(last_fcf, assumptions.wacc, assumptions.terminal_growth)?;

        let fcfs: Vec<f64> = projection.years.iter().map(|y| y.fcf).collect();
        let (discounted_fcfs, discounted_terminal) =
            self.discount(&fcfs, terminal_value, assumptions.wacc);

        let enterprise_value = discounted_fcfs.iter().sum::<f64>() + discounted_terminal;
        let intrinsic_value_per_share = enterprise_value / assumptions.shares_outstanding;

        debug!(
            terminal_value,
            enterprise_value, intrinsic_value_per_share, "Valuation computed"
        );

        Ok(ValuationResult {
            terminal_value,
            discounted_terminal,
            discounted_fcfs,
            enterprise_value,
            intrinsic_value_per_share,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionEngine;

    fn base_assumptions() -> Assumptions {
        Assumptions {
            revenue_year1: 100.0,
            revenue_growth: 0.10,
            operating_margin: 0.20,
            tax_rate: 0.25,
            wacc: 0.10,
            terminal_growth: 0.03,
            shares_outstanding: 50.0,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = expected.abs().max(1.0) * 1e-6;
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_terminal_value_formula() {
        let engine = ValuationEngine::new();
        let tv = engine.terminal_value(24.15765, 0.10, 0.03).unwrap();
        assert_close(tv, 24.15765 * 1.03 / 0.07);
    }

    #[test]
    fn test_degenerate_valuation_never_returns_inf() {
        let engine = ValuationEngine::new();
        let err = engine.terminal_value(24.0, 0.05, 0.05).unwrap_err();
        assert!(matches!(
            err,
            ValuationError::DegenerateValuation {
                wacc,
                terminal_growth
            } if wacc == 0.05 && terminal_growth == 0.05
        ));
    }

    #[test]
    fn test_wacc_below_growth_is_permitted() {
        // Economically implausible, numerically valid: negative terminal value.
        let engine = ValuationEngine::new();
        let tv = engine.terminal_value(10.0, 0.02, 0.05).unwrap();
        assert!(tv < 0.0);
        assert!(tv.is_finite());
    }

    #[test]
    fn test_discount_monotonicity() {
        let engine = ValuationEngine::new();
        let fcfs = vec![20.0, 20.0, 20.0, 20.0, 20.0];
        let (discounted, _) = engine.discount(&fcfs, 0.0, 0.08);

        for (i, d) in discounted.iter().enumerate() {
            // Present value below future value, and the haircut deepens
            // with each additional year.
            assert!(*d < fcfs[i]);
            if i > 0 {
                assert!(*d < discounted[i - 1]);
            }
        }
    }

    #[test]
    fn test_discount_uses_exact_integer_powers() {
        let engine = ValuationEngine::new();
        let (discounted, discounted_terminal) = engine.discount(&[100.0, 100.0], 300.0, 0.10);

        assert_close(discounted[0], 100.0 / 1.1);
        assert_close(discounted[1], 100.0 / (1.1 * 1.1));
        assert_close(discounted_terminal, 300.0 / (1.1 * 1.1));
    }

    #[test]
    fn test_shares_zero_guard() {
        let mut assumptions = base_assumptions();
        assumptions.shares_outstanding = 0.0;

        let projection = ProjectionEngine::new().project(&assumptions);
        let err = ValuationEngine::new().value(&projection, &assumptions).unwrap_err();
        assert!(matches!(err, ValuationError::DivisionByZero));
    }

    #[test]
    fn test_empty_projection_rejected() {
        let assumptions = base_assumptions();
        let projection = ProjectionEngine::with_horizon(0).project(&assumptions);

        let err = ValuationEngine::new().value(&projection, &assumptions).unwrap_err();
        assert!(matches!(err, ValuationError::EmptyProjection));
    }

    #[test]
    fn test_reference_scenario() {
        let assumptions = base_assumptions();
        let projection = ProjectionEngine::new().project(&assumptions);
        let valuation = ValuationEngine::new().value(&projection, &assumptions).unwrap();

        // With wacc == growth every discounted FCF collapses to the same
        // present value: 16.5 / 1.1 = 15.
        assert_eq!(valuation.discounted_fcfs.len(), 5);
        for d in &valuation.discounted_fcfs {
            assert_close(*d, 15.0);
        }

        assert_close(valuation.terminal_value, 355.462564285715);
        assert_close(valuation.discounted_terminal, 220.714285714286);
        assert_close(valuation.enterprise_value, 295.714285714286);
        assert_close(valuation.intrinsic_value_per_share, 5.914285714286);
    }

    #[test]
    fn test_determinism() {
        let assumptions = base_assumptions();
        let projection = ProjectionEngine::new().project(&assumptions);
        let engine = ValuationEngine::new();

        let first = engine.value(&projection, &assumptions).unwrap();
        let second = engine.value(&projection, &assumptions).unwrap();
        assert_eq!(first, second);
    }
}
