//! CSV loading for the request and corridor tables.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::types::{CorridorRecord, RequestRow, RequestTable};

// Accepted header spellings for the required request columns; matching is
// case-insensitive and the first spelling names the column in errors.
const STATION_HEADERS: &[&str] = &["BET STN", "STATION"];
const LINE_HEADERS: &[&str] = &["LINE"];
const TIME_FROM_HEADERS: &[&str] = &["D.FRM", "FROM"];
const TIME_TO_HEADERS: &[&str] = &["D.TO", "TO"];

/// Load the request table from disk, keeping every original column.
pub fn load_requests(path: &Path) -> Result<RequestTable> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read request CSV '{}'", path.display()))?;
    let table = parse_requests(&content)?;
    info!(
        "loaded {} request rows from '{}'",
        table.rows.len(),
        path.display()
    );
    Ok(table)
}

/// Parse request CSV content. The four required columns are located by
/// header; all other columns ride along untouched in `record`.
pub fn parse_requests(content: &str) -> Result<RequestTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .context("request CSV has no header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let station_idx = find_column(&headers, STATION_HEADERS)?;
    let line_idx = find_column(&headers, LINE_HEADERS)?;
    let time_from_idx = find_column(&headers, TIME_FROM_HEADERS)?;
    let time_to_idx = find_column(&headers, TIME_TO_HEADERS)?;

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("failed to read request CSV row {}", idx + 1))?;
        let cell = |column: usize| record.get(column).unwrap_or("").to_string();
        rows.push(RequestRow {
            row_number: idx + 1,
            station: cell(station_idx),
            line: cell(line_idx),
            time_from: cell(time_from_idx),
            time_to: cell(time_to_idx),
            record: record.iter().map(|c| c.to_string()).collect(),
        });
    }

    Ok(RequestTable { headers, rows })
}

/// Load the corridor table from disk; unknown columns are ignored.
pub fn load_corridor(path: &Path) -> Result<Vec<CorridorRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read corridor CSV '{}'", path.display()))?;
    let records = parse_corridor(&content)?;
    info!(
        "loaded {} corridor rows from '{}'",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parse corridor CSV content into typed records.
pub fn parse_corridor(content: &str) -> Result<Vec<CorridorRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize().enumerate() {
        let record: CorridorRecord =
            result.with_context(|| format!("failed to read corridor CSV row {}", idx + 1))?;
        records.push(record);
    }
    Ok(records)
}

fn find_column(headers: &[String], accepted: &[&str]) -> Result<usize> {
    headers
        .iter()
        .position(|header| {
            accepted
                .iter()
                .any(|name| header.trim().eq_ignore_ascii_case(name))
        })
        .ok_or_else(|| anyhow::anyhow!("request CSV is missing a '{}' column", accepted[0]))
}

// ===========================================================================
// Tests
// ===========================================================================
