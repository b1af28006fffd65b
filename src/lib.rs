//! DCF Valuation Library
//!
//! Computes a discounted-cash-flow intrinsic valuation for a company from a
//! small spreadsheet of scalar assumptions. The pipeline is strictly linear
//! and every stage is a pure function of the previous stage's output:
//!
//! ```text
//! Input Loader ──► Projection Engine ──► Valuation Engine ──► Report
//!  (inputs.xlsx)    (revenue, FCF per     (terminal value,     (stdout)
//!                    year, horizon N)      discounting, EV,
//!                                          per-share value)
//! ```
//!
//! # Key Concepts
//!
//! ## Projection
//! Revenue compounds at a single growth rate from a pre-growth base; FCF is
//! approximated as NOPAT (EBIT after tax, no capex adjustment).
//!
//! ## Terminal Value
//! Gordon growth on the final projected FCF: `fcf_N * (1 + g) / (wacc - g)`.
//! Requires `wacc != g`; `wacc > g` for an economically meaningful result.
//!
//! ## Intrinsic Value
//! All cash flows (explicit years plus terminal value) discounted at
//! `(1 + wacc)^year`, summed into enterprise value, divided by shares
//! outstanding.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod inputs;
pub mod logging;
pub mod projection;
pub mod report;
pub mod valuation;

pub use config::{Config, OutputFormat};
pub use error::{Result, ValuationError};
pub use inputs::{load_sheet, AssumptionSheet, Assumptions};
pub use projection::{ProjectionEngine, ProjectionResult, YearProjection};
pub use report::ValuationReport;
pub use valuation::{ValuationEngine, ValuationResult};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run projection and valuation over a set of assumptions.
///
/// Convenience composition of the two pure engines; the horizon must be at
/// least 1 or the valuation fails with `EmptyProjection`.
pub fn value_company(
    assumptions: &Assumptions,
    horizon_years: usize,
) -> Result<(ProjectionResult, ValuationResult)> {
    let projection = ProjectionEngine::with_horizon(horizon_years).project(assumptions);
    let valuation = ValuationEngine::new().value(&projection, assumptions)?;
    Ok((projection, valuation))
}
