//! CSV export of a dispatch plan.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::dispatch::DispatchSummary;

/// Column header for the plan CSV.
const HEADER: &str = "name,p_mw,marginal_cost_eur_per_mwh,cost_eur_per_hour";

/// Exports a dispatch plan to a CSV file at the given path.
///
/// Writes a header row followed by one row per plant in request order,
/// including idle plants. Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(summary: &DispatchSummary, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(summary, buf)
}

/// Writes a dispatch plan as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(summary: &DispatchSummary, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;
    for r in &summary.plants {
        wtr.write_record(&[
            r.name.clone(),
            format!("{:.1}", r.p),
            format!("{:.4}", r.marginal_cost),
            format!("{:.2}", r.cost_per_hour),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
