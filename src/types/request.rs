//! Request table types

use chrono::NaiveTime;

/// The request table: original header plus one row per CSV record.
#[derive(Debug, Clone)]
pub struct RequestTable {
    pub headers: Vec<String>,
    pub rows: Vec<RequestRow>,
}

/// One request row.
///
/// `record` keeps every original cell so the export can emit the input
/// columns unchanged; the named fields are the extracted working copies.
#[derive(Debug, Clone)]
pub struct RequestRow {
    /// 1-based data row number (header excluded), used in error reporting.
    pub row_number: usize,
    /// Raw station text; normalized only when deriving the grouping key.
    pub station: String,
    pub line: String,
    /// Raw request-start time text.
    pub time_from: String,
    /// Raw request-end time text.
    pub time_to: String,
    /// The full original record, in input column order.
    pub record: Vec<String>,
}

/// The adjusted counterpart of one request; output index i always
/// corresponds to input row i.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizedRequest {
    pub optimized_time_from: NaiveTime,
    pub optimized_time_to: NaiveTime,
    /// Freeform rationale, one fragment per line.
    pub optimization_details: String,
}
