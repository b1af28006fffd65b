//! Runtime configuration.
//!
//! The calculator takes no command-line flags; everything is driven by
//! defaults overridable through `DCF_*` environment variables.
//!
//! # Environment Variable Mapping
//!
//! - `DCF_INPUT_PATH` → input_path (default: `inputs.xlsx`)
//! - `DCF_HORIZON_YEARS` → horizon_years (default: 5, must be >= 1)
//! - `DCF_LOG_LEVEL` → log_level (default: `info`)
//! - `DCF_LOG_FORMAT` → log_format (`pretty` or `json`, default: `pretty`)
//! - `DCF_OUTPUT_FORMAT` → output_format (`text` or `json`, default: `text`)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::{Result, ValuationError};

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "inputs.xlsx";

/// Default explicit projection horizon in years.
pub const DEFAULT_HORIZON_YEARS: usize = 5;

/// How the final report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text report
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Runtime configuration for a single valuation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the assumptions file
    pub input_path: PathBuf,
    /// Explicit projection horizon in years (>= 1)
    pub horizon_years: usize,
    /// Base log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log output format ("pretty" or "json")
    pub log_format: String,
    /// Report output format
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            horizon_years: DEFAULT_HORIZON_YEARS,
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            output_format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from environment variables over defaults.
    ///
    /// Fails with `Config` if an override is present but invalid
    /// (non-numeric or zero horizon, unknown output format).
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = env::var("DCF_INPUT_PATH") {
            config.input_path = PathBuf::from(path);
        }

        if let Ok(raw) = env::var("DCF_HORIZON_YEARS") {
            let horizon: usize = raw.parse().map_err(|_| {
                ValuationError::Config(format!("DCF_HORIZON_YEARS is not a number: '{}'", raw))
            })?;
            if horizon == 0 {
                return Err(ValuationError::Config(
                    "DCF_HORIZON_YEARS must be at least 1".to_string(),
                ));
            }
            config.horizon_years = horizon;
        }

        if let Ok(level) = env::var("DCF_LOG_LEVEL") {
            config.log_level = level;
        }

        if let Ok(format) = env::var("DCF_LOG_FORMAT") {
            config.log_format = format;
        }

        if let Ok(raw) = env::var("DCF_OUTPUT_FORMAT") {
            config.output_format = match raw.to_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                other => {
                    return Err(ValuationError::Config(format!(
                        "DCF_OUTPUT_FORMAT must be 'text' or 'json', got '{}'",
                        other
                    )))
                }
            };
        }

        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================
