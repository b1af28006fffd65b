//! Assumption types.
//!
//! [`AssumptionSheet`] is the raw label → cell-text mapping as read from the
//! input file; [`Assumptions`] is the fixed-schema record built from it once,
//! so every downstream stage has compile-time guarantees that all seven
//! required figures are present and numeric.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, ValuationError};

// ============================================================================
// Labels
// ============================================================================

/// Label of the base-year revenue row.
pub const LABEL_REVENUE_YEAR1: &str = "Revenue (Year 1)";
/// Label of the annual revenue growth rate row.
pub const LABEL_REVENUE_GROWTH: &str = "Revenue Growth Rate";
/// Label of the operating margin row.
pub const LABEL_OPERATING_MARGIN: &str = "Operating Margin";
/// Label of the tax rate row.
pub const LABEL_TAX_RATE: &str = "Tax Rate";
/// Label of the weighted-average cost of capital row.
pub const LABEL_WACC: &str = "WACC";
/// Label of the terminal growth rate row.
pub const LABEL_TERMINAL_GROWTH: &str = "Terminal Growth Rate";
/// Label of the shares outstanding row.
pub const LABEL_SHARES_OUTSTANDING: &str = "Shares Outstanding";

/// All labels a complete assumptions file must carry.
pub const REQUIRED_LABELS: &[&str] = &[
    LABEL_REVENUE_YEAR1,
    LABEL_REVENUE_GROWTH,
    LABEL_OPERATING_MARGIN,
    LABEL_TAX_RATE,
    LABEL_WACC,
    LABEL_TERMINAL_GROWTH,
    LABEL_SHARES_OUTSTANDING,
];

// ============================================================================
// Raw sheet
// ============================================================================

/// Raw contents of the assumptions file: label → cell text.
///
/// Extra rows are kept but never consumed; blank rows are dropped at load
/// time. Lookup is by exact label match, row order is irrelevant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssumptionSheet {
    values: HashMap<String, String>,
}

impl AssumptionSheet {
    /// Build a sheet from (label, value) rows. Later duplicates win,
    /// matching the source file being read top to bottom.
    pub fn from_rows<I, L, V>(rows: I) -> Self
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
        V: Into<String>,
    {
        let values = rows
            .into_iter()
            .map(|(label, value)| (label.into(), value.into()))
            .collect();
        Self { values }
    }

    /// Number of rows loaded.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sheet holds no rows at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw cell text for a label, if the row exists.
    pub fn raw(&self, label: &str) -> Option<&str> {
        self.values.get(label).map(String::as_str)
    }

    /// Numeric value for a required label.
    ///
    /// Fails with `MissingAssumption` if the row is absent and
    /// `NonNumericAssumption` if the cell does not parse as a float.
    pub fn numeric(&self, label: &str) -> Result<f64> {
        let raw = self
            .values
            .get(label)
            .ok_or_else(|| ValuationError::MissingAssumption(label.to_string()))?;

        raw.trim().parse::<f64>().map_err(|_| {
            ValuationError::NonNumericAssumption {
                label: label.to_string(),
                value: raw.clone(),
            }
        })
    }
}

// ============================================================================
// Fixed-schema record
// ============================================================================

/// The seven scalar assumptions driving the valuation.
///
/// Rates are fractions, not percentages (a 10% WACC is `0.10`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    /// Base-year revenue, treated as a pre-growth base (year 1 of the
    /// projection is this figure grown once)
    pub revenue_year1: f64,
    /// Annual revenue growth rate over the explicit horizon
    pub revenue_growth: f64,
    /// Operating margin (EBIT / revenue)
    pub operating_margin: f64,
    /// Effective tax rate applied to EBIT
    pub tax_rate: f64,
    /// Weighted-average cost of capital, the discount rate
    pub wacc: f64,
    /// Perpetual growth rate beyond the explicit horizon
    pub terminal_growth: f64,
    /// Share count the enterprise value is spread over
    pub shares_outstanding: f64,
}

impl Assumptions {
    /// Extract the fixed-schema record from a raw sheet.
    ///
    /// This is the single point where completeness is validated; the first
    /// missing or non-numeric required row fails the run.
    pub fn from_sheet(sheet: &AssumptionSheet) -> Result<Self> {
        Ok(Self {
            revenue_year1: sheet.numeric(LABEL_REVENUE_YEAR1)?,
            revenue_growth: sheet.numeric(LABEL_REVENUE_GROWTH)?,
            operating_margin: sheet.numeric(LABEL_OPERATING_MARGIN)?,
            tax_rate: sheet.numeric(LABEL_TAX_RATE)?,
            wacc: sheet.numeric(LABEL_WACC)?,
            terminal_growth: sheet.numeric(LABEL_TERMINAL_GROWTH)?,
            shares_outstanding: sheet.numeric(LABEL_SHARES_OUTSTANDING)?,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
