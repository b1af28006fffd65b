//! Valuation report generation.

use serde::{Deserialize, Serialize};

use crate::inputs::Assumptions;
use crate::projection::ProjectionResult;
use crate::valuation::ValuationResult;

/// One projected year as presented in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportYear {
    pub year: u32,
    pub revenue: f64,
    pub fcf: f64,
    pub discounted_fcf: f64,
}

/// Complete valuation report.
///
/// Carries the numeric sections for machine consumption plus the
/// pre-rendered text block printed to stdout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationReport {
    /// Report title
    pub title: String,
    /// Assumptions the valuation was run with
    pub assumptions: Assumptions,
    /// Per-year projection lines
    pub years: Vec<ReportYear>,
    /// Terminal value at the end of the horizon, undiscounted
    pub terminal_value: f64,
    /// Terminal value discounted to present
    pub discounted_terminal: f64,
    /// Enterprise value
    pub enterprise_value: f64,
    /// Intrinsic value per share
    pub intrinsic_value_per_share: f64,
    /// Text report (formatted)
    pub text_report: String,
}

impl ValuationReport {
    /// Generate a report from a completed valuation.
    pub fn generate(
        assumptions: &Assumptions,
        projection: &ProjectionResult,
        valuation: &ValuationResult,
    ) -> Self {
        let years: Vec<ReportYear> = projection
            .years
            .iter()
            .zip(&valuation.discounted_fcfs)
            .map(|(year, discounted_fcf)| ReportYear {
                year: year.year,
                revenue: year.revenue,
                fcf: year.fcf,
                discounted_fcf: *discounted_fcf,
            })
            .collect();

        let text_report = render_text(&years, valuation);

        Self {
            title: "Mini DCF Valuation".to_string(),
            assumptions: *assumptions,
            years,
            terminal_value: valuation.terminal_value,
            discounted_terminal: valuation.discounted_terminal,
            enterprise_value: valuation.enterprise_value,
            intrinsic_value_per_share: valuation.intrinsic_value_per_share,
            text_report,
        }
    }
}

fn render_text(years: &[ReportYear], valuation: &ValuationResult) -> String {
    let mut lines = Vec::with_capacity(years.len() + 6);

    lines.push("----- Mini DCF Valuation -----".to_string());
    for year in years {
        lines.push(format!(
            "Year {}: Revenue = {}, FCF = {}, Discounted FCF = {}",
            year.year,
            format_thousands(year.revenue),
            format_thousands(year.fcf),
            format_thousands(year.discounted_fcf),
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Terminal Value (undiscounted): {}",
        format_thousands(valuation.terminal_value)
    ));
    lines.push(format!(
        "Discounted Terminal Value: {}",
        format_thousands(valuation.discounted_terminal)
    ));
    lines.push(String::new());
    lines.push(format!(
        "Enterprise Value: {}",
        format_thousands(valuation.enterprise_value)
    ));
    lines.push(format!(
        "Intrinsic Value per Share: ${}",
        format_currency(valuation.intrinsic_value_per_share)
    ));

    lines.join("\n")
}

/// Format a value rounded to whole units with comma thousands separators.
fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded.is_sign_negative() && rounded != 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a value to two decimal places with comma thousands separators.
fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let grouped = group_thousands(whole);

    if value < 0.0 {
        format!("-{grouped}.{cents}")
    } else {
        format!("{grouped}.{cents}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
