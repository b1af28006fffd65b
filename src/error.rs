//! Error types for the valuation pipeline.
//!
//! Every failure is unrecoverable at the point of detection: nothing in the
//! pipeline is transient, so there is no retry and no partial result. Errors
//! carry enough context to name the failing precondition to the user.

use thiserror::Error;

/// Result type alias using the valuation error type.
pub type Result<T> = std::result::Result<T, ValuationError>;

/// Unified error type for the valuation pipeline.
#[derive(Error, Debug)]
pub enum ValuationError {
    /// Input file cannot be opened or read
    #[error("Input unavailable: {0}")]
    InputUnavailable(String),

    /// Input file has an extension the loader does not understand
    #[error("Unsupported input format: .{0} (expected .xlsx, .xls or .csv)")]
    UnsupportedFormat(String),

    /// A required assumption label is absent from the loaded sheet
    #[error("Missing assumption: {0}")]
    MissingAssumption(String),

    /// An assumption cell exists but does not parse as a number
    #[error("Assumption '{label}' is not numeric: '{value}'")]
    NonNumericAssumption { label: String, value: String },

    /// WACC equals the terminal growth rate, so the Gordon growth
    /// denominator is zero
    #[error("Degenerate valuation: WACC ({wacc}) equals terminal growth rate ({terminal_growth})")]
    DegenerateValuation { wacc: f64, terminal_growth: f64 },

    /// Shares outstanding is zero
    #[error("Division by zero: shares outstanding is zero")]
    DivisionByZero,

    /// Valuation requested over an empty projection (zero-year horizon)
    #[error("Empty projection: at least one projected year is required")]
    EmptyProjection,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
