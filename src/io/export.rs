//! CSV export for scenario comparisons.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::cost::{ScenarioResult, ScenarioResults};

/// Column header for the comparison CSV.
const HEADER: &str = "scenario,daily_cost,monthly_cost,yearly_cost,daily_energy_kwh,\
                      system_cost,payback_years";

/// Exports a scenario comparison to a CSV file at the given path.
///
/// # Arguments
///
/// * `results` - Computed scenarios
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(results: &ScenarioResults, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(results, buf)
}

/// Writes a scenario comparison as CSV to any writer.
///
/// One row each for `grid`, `generator` and `solar`. The system cost and
/// payback columns are empty except on the solar row; an infinite payback is
/// written as `inf`.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(results: &ScenarioResults, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    wtr.write_record(row("grid", &results.grid, None))?;
    wtr.write_record(row("generator", &results.generator, None))?;
    let solar = &results.solar;
    wtr.write_record(row(
        "solar",
        &solar.operating,
        Some((solar.system_cost, solar.payback_years)),
    ))?;

    wtr.flush()?;
    Ok(())
}

fn row(name: &str, r: &ScenarioResult, capital: Option<(f64, f64)>) -> [String; 7] {
    let (system_cost, payback_years) = capital
        .map(|(cost, years)| (format!("{cost:.2}"), format!("{years:.2}")))
        .unwrap_or_default();
    [
        name.to_string(),
        format!("{:.2}", r.daily_cost),
        format!("{:.2}", r.monthly_cost),
        format!("{:.2}", r.yearly_cost),
        format!("{:.4}", r.daily_energy_kwh),
        system_cost,
        payback_years,
    ]
}
