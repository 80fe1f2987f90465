//! CSV writing for the optimized table.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use tracing::info;

use crate::services::clock::format_clock_time;
use crate::types::{OptimizedRequest, RequestTable};

/// The three columns appended to the original request header.
const APPENDED_HEADERS: &[&str] = &[
    "optimized_time_from",
    "optimized_time_to",
    "optimization_details",
];

/// Render the output table: original columns unchanged plus the appended
/// optimization columns, one record per input row, times as "HH:MM".
pub fn render_optimized(table: &RequestTable, optimized: &[OptimizedRequest]) -> Result<String> {
    ensure!(
        table.rows.len() == optimized.len(),
        "optimized records ({}) do not cover the request rows ({})",
        optimized.len(),
        table.rows.len()
    );

    let mut writer = csv::Writer::from_writer(vec![]);

    let mut header = table.headers.clone();
    header.extend(APPENDED_HEADERS.iter().map(|h| h.to_string()));
    writer
        .write_record(&header)
        .context("failed to write output CSV header")?;

    for (row, opt) in table.rows.iter().zip(optimized) {
        let mut record = row.record.clone();
        record.push(format_clock_time(opt.optimized_time_from));
        record.push(format_clock_time(opt.optimized_time_to));
        record.push(opt.optimization_details.clone());
        writer
            .write_record(&record)
            .with_context(|| format!("failed to write output CSV row {}", row.row_number))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush output CSV: {e}"))?;
    String::from_utf8(bytes).context("output CSV is not valid UTF-8")
}

/// Render and write the optimized table to disk.
pub fn write_optimized(
    path: &Path,
    table: &RequestTable,
    optimized: &[OptimizedRequest],
) -> Result<()> {
    let content = render_optimized(table, optimized)?;
    std::fs::write(path, content)
        .with_context(|| format!("failed to write output CSV '{}'", path.display()))?;
    info!(
        "wrote {} optimized rows to '{}'",
        optimized.len(),
        path.display()
    );
    Ok(())
}

// ===========================================================================
// Tests
// ===========================================================================
