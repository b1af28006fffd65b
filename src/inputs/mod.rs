//! Assumption input layer.
//!
//! Reads a two-column (label, value) spreadsheet into a raw
//! [`AssumptionSheet`], then extracts the fixed-schema [`Assumptions`]
//! record the rest of the pipeline consumes. The split matters: the loader
//! only reads, and completeness is validated once, at typed extraction.

pub mod loader;
pub mod types;

pub use loader::load_sheet;
pub use types::{Assumptions, AssumptionSheet, REQUIRED_LABELS};
