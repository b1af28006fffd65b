//! DCF Valuation - Intrinsic value calculator.
//!
//! Reads seven financial assumptions from a two-column spreadsheet
//! (default `inputs.xlsx`), projects revenue and free cash flow over the
//! explicit horizon, and prints the discounted valuation to stdout.

use anyhow::Result;

use dcf_valuation::config::{Config, OutputFormat};
use dcf_valuation::inputs::{load_sheet, Assumptions};
use dcf_valuation::logging::init_logging;
use dcf_valuation::report::ValuationReport;
use dcf_valuation::value_company;

fn main() -> Result<()> {
    let config = Config::load()?;

    init_logging(&config.log_level, &config.log_format);

    tracing::info!(
        input = %config.input_path.display(),
        horizon_years = config.horizon_years,
        "DCF Valuation v{}",
        dcf_valuation::VERSION
    );

    let sheet = load_sheet(&config.input_path)?;
    let assumptions = Assumptions::from_sheet(&sheet)?;

    let (projection, valuation) = value_company(&assumptions, config.horizon_years)?;
    let report = ValuationReport::generate(&assumptions, &projection, &valuation);

    match config.output_format {
        OutputFormat::Text => println!("{}", report.text_report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
