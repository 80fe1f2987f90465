//! Corridor window lookup.
//!
//! The corridor table is folded once per batch into an index keyed by
//! (station, line). Duplicate keys keep the first row seen. Groups with no
//! corridor row resolve to the fixed 00:00-04:00 fallback block instead of
//! failing.

use std::collections::HashMap;

use chrono::NaiveTime;
use thiserror::Error;

use crate::defaults::{default_corridor_end, default_corridor_start};
use crate::services::clock::{parse_clock_time, FormatError};
use crate::types::CorridorRecord;

/// A permitted time block for one (station, line).
///
/// Well-formed corridor data has start <= end; the window itself never
/// wraps midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorridorWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl CorridorWindow {
    /// The 00:00-04:00 block used when a group has no corridor row.
    pub fn fallback() -> Self {
        Self {
            start: default_corridor_start(),
            end: default_corridor_end(),
        }
    }
}

/// Grouping/lookup key: normalized station plus line identifier. Equality
/// is exact, no partial or fuzzy matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub station: String,
    pub line: String,
}

impl GroupKey {
    /// Key for a request row; the station is normalized here.
    pub fn new(station: &str, line: &str) -> Self {
        Self {
            station: normalize_station(station),
            line: line.to_string(),
        }
    }
}

/// Space-separated station tokens are joined with hyphens so request and
/// corridor rows agree on key format. Idempotent.
pub fn normalize_station(station: &str) -> String {
    station.replace(' ', "-")
}

/// The window resolved for one group, with the fallback determination made
/// once for the whole group.
#[derive(Debug, Clone)]
pub struct ResolvedWindow {
    pub key: GroupKey,
    pub window: CorridorWindow,
    pub used_fallback: bool,
}

/// A corridor cell that failed to parse, with its position in the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("corridor row {row_number}, column '{column}': {source}")]
pub struct CorridorParseError {
    /// 1-based data row number (header excluded).
    pub row_number: usize,
    pub column: &'static str,
    pub source: FormatError,
}

/// (station, line) -> corridor window, built once per batch.
#[derive(Debug, Default)]
pub struct CorridorIndex {
    windows: HashMap<GroupKey, CorridorWindow>,
}

impl CorridorIndex {
    /// Parse every corridor row and index it. The first row wins on
    /// duplicate keys; any malformed time cell aborts the build.
    pub fn build(records: &[CorridorRecord]) -> Result<Self, CorridorParseError> {
        let mut windows = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            let start = parse_leading_time(&record.from).map_err(|source| CorridorParseError {
                row_number: idx + 1,
                column: "From",
                source,
            })?;
            let end = parse_leading_time(&record.to).map_err(|source| CorridorParseError {
                row_number: idx + 1,
                column: "To",
                source,
            })?;

            // Corridor-side keys are matched as stored, not normalized.
            let key = GroupKey {
                station: record.station.clone(),
                line: record.line.clone(),
            };
            windows.entry(key).or_insert(CorridorWindow { start, end });
        }
        Ok(Self { windows })
    }

    /// Resolve the window for a group, falling back to 00:00-04:00 when the
    /// key has no corridor entry. Zero matches are not an error.
    pub fn resolve(&self, key: &GroupKey) -> ResolvedWindow {
        match self.windows.get(key) {
            Some(window) => ResolvedWindow {
                key: key.clone(),
                window: *window,
                used_fallback: false,
            },
            None => ResolvedWindow {
                key: key.clone(),
                window: CorridorWindow::fallback(),
                used_fallback: true,
            },
        }
    }
}

/// Only the leading token of a corridor time cell is the clock time.
fn parse_leading_time(text: &str) -> Result<NaiveTime, FormatError> {
    let token = text.trim().split(' ').next().unwrap_or("");
    parse_clock_time(token)
}

// ===========================================================================
// Tests
// ===========================================================================
