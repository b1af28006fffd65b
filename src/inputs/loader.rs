//! Input file loader.
//!
//! Reads the two-column assumptions file into an [`AssumptionSheet`].
//! Excel workbooks (`.xlsx`/`.xls`) are the primary format; `.csv` is
//! accepted as well, dispatched by extension. The file has no header row:
//! column 0 is the label, column 1 the value.

use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use tracing::debug;

use crate::error::{Result, ValuationError};
use crate::inputs::types::AssumptionSheet;

/// Load the assumptions file at `path` into a raw sheet.
///
/// Fails with `InputUnavailable` if the file is missing or unreadable and
/// `UnsupportedFormat` for unknown extensions. Completeness of the loaded
/// rows is not checked here.
pub fn load_sheet(path: &Path) -> Result<AssumptionSheet> {
    if !path.exists() {
        return Err(ValuationError::InputUnavailable(
            path.display().to_string(),
        ));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let sheet = match ext.as_str() {
        "xlsx" | "xls" => load_excel(path)?,
        "csv" => load_csv(path)?,
        other => return Err(ValuationError::UnsupportedFormat(other.to_string())),
    };

    debug!(path = %path.display(), rows = sheet.len(), "Assumptions file loaded");
    Ok(sheet)
}

/// Read the first worksheet of an Excel workbook as (label, value) rows.
///
/// The reader backend is picked per extension, so legacy binary `.xls`
/// workbooks parse as well as `.xlsx`.
fn load_excel(path: &Path) -> Result<AssumptionSheet> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| ValuationError::InputUnavailable(format!("{}: {e}", path.display())))?;

    let sheet_names = workbook.sheet_names();
    let first_sheet = sheet_names
        .first()
        .cloned()
        .ok_or_else(|| {
            ValuationError::InputUnavailable(format!("{}: workbook has no sheets", path.display()))
        })?;

    let range = workbook
        .worksheet_range(&first_sheet)
        .map_err(|e| ValuationError::InputUnavailable(format!("{}: {e}", path.display())))?;

    let rows = range.rows().filter_map(|row| {
        let label = row.first().map(|cell| cell.to_string().trim().to_string())?;
        let value = row.get(1).map(|cell| cell.to_string().trim().to_string())?;
        if label.is_empty() && value.is_empty() {
            return None;
        }
        Some((label, value))
    });

    Ok(AssumptionSheet::from_rows(rows))
}

/// Read a headerless two-column CSV as (label, value) rows.
fn load_csv(path: &Path) -> Result<AssumptionSheet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| ValuationError::InputUnavailable(format!("{}: {e}", path.display())))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record
            .map_err(|e| ValuationError::InputUnavailable(format!("{}: {e}", path.display())))?;

        let label = record.get(0).unwrap_or("").to_string();
        let value = record.get(1).unwrap_or("").to_string();
        if label.is_empty() && value.is_empty() {
            continue;
        }
        rows.push((label, value));
    }

    Ok(AssumptionSheet::from_rows(rows))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::inputs::types::Assumptions;

    #[test]
    fn test_missing_file_is_input_unavailable() {
        let err = load_sheet(Path::new("no/such/inputs.xlsx")).unwrap_err();
        assert!(matches!(err, ValuationError::InputUnavailable(_)));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.toml");
        std::fs::write(&path, "WACC = 0.1").unwrap();

        let err = load_sheet(&path).unwrap_err();
        assert!(matches!(err, ValuationError::UnsupportedFormat(ref ext) if ext == "toml"));
    }

    #[test]
    fn test_xlsx_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.xlsx");

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let worksheet = workbook.add_worksheet();
        let rows: &[(&str, f64)] = &[
            ("Revenue (Year 1)", 100.0),
            ("Revenue Growth Rate", 0.10),
            ("Operating Margin", 0.20),
            ("Tax Rate", 0.25),
            ("WACC", 0.10),
            ("Terminal Growth Rate", 0.03),
            ("Shares Outstanding", 50.0),
            ("Analyst Note", 999.0),
        ];
        for (i, (label, value)) in rows.iter().enumerate() {
            worksheet.write_string(i as u32, 0, *label).unwrap();
            worksheet.write_number(i as u32, 1, *value).unwrap();
        }
        workbook.save(&path).unwrap();

        let sheet = load_sheet(&path).unwrap();
        let assumptions = Assumptions::from_sheet(&sheet).unwrap();

        assert_eq!(assumptions.revenue_year1, 100.0);
        assert_eq!(assumptions.revenue_growth, 0.10);
        assert_eq!(assumptions.terminal_growth, 0.03);
        assert_eq!(assumptions.shares_outstanding, 50.0);
        // Extra row survives as raw data without affecting extraction
        assert_eq!(sheet.raw("Analyst Note"), Some("999"));
    }

    #[test]
    fn test_xls_extension_reaches_the_workbook_reader() {
        // .xls dispatches into the workbook reader, not UnsupportedFormat;
        // a file that is not a real workbook fails as unreadable input.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.xls");
        std::fs::write(&path, "not a workbook").unwrap();

        let err = load_sheet(&path).unwrap_err();
        assert!(matches!(err, ValuationError::InputUnavailable(_)));
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Revenue (Year 1),100").unwrap();
        writeln!(file, "Revenue Growth Rate,0.10").unwrap();
        writeln!(file, "Operating Margin,0.20").unwrap();
        writeln!(file, "Tax Rate,0.25").unwrap();
        writeln!(file, "WACC,0.10").unwrap();
        writeln!(file, "Terminal Growth Rate,0.03").unwrap();
        writeln!(file, "Shares Outstanding,50").unwrap();
        writeln!(file, "Analyst Note,ignored extra row").unwrap();
        drop(file);

        let sheet = load_sheet(&path).unwrap();
        let assumptions = Assumptions::from_sheet(&sheet).unwrap();

        assert_eq!(assumptions.revenue_year1, 100.0);
        assert_eq!(assumptions.terminal_growth, 0.03);
    }

    #[test]
    fn test_csv_blank_rows_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.csv");
        std::fs::write(&path, "WACC,0.10\n,\nTax Rate,0.25\n").unwrap();

        let sheet = load_sheet(&path).unwrap();
        assert_eq!(sheet.len(), 2);
    }
}
