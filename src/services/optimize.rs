//! Batch orchestration: one optimized record per input row.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::services::adjust::adjust;
use crate::services::clock::{format_clock_time, parse_clock_time, FormatError};
use crate::services::corridor::{CorridorIndex, CorridorParseError, GroupKey, ResolvedWindow};
use crate::types::{CorridorRecord, OptimizedRequest, RequestTable};

/// A malformed field somewhere in the batch. The first one encountered
/// aborts the whole batch; there is no partially-adjusted output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    #[error("request row {row_number}: start time: {source}")]
    RequestStart {
        row_number: usize,
        source: FormatError,
    },
    #[error("request row {row_number}: end time: {source}")]
    RequestEnd {
        row_number: usize,
        source: FormatError,
    },
    #[error(transparent)]
    Corridor(#[from] CorridorParseError),
}

/// Adjust every request against its group's corridor window.
///
/// Pure with respect to its inputs: the corridor index is built once, each
/// distinct (station, line) group is resolved once and shared by all of its
/// requests, and rows are adjusted independently in input order, so output
/// index i always corresponds to input row i.
pub fn optimize(
    requests: &RequestTable,
    corridor: &[CorridorRecord],
) -> Result<Vec<OptimizedRequest>, OptimizeError> {
    let index = CorridorIndex::build(corridor)?;
    let mut groups: HashMap<GroupKey, ResolvedWindow> = HashMap::new();

    let mut optimized = Vec::with_capacity(requests.rows.len());
    for row in &requests.rows {
        let start =
            parse_clock_time(&row.time_from).map_err(|source| OptimizeError::RequestStart {
                row_number: row.row_number,
                source,
            })?;
        let end = parse_clock_time(&row.time_to).map_err(|source| OptimizeError::RequestEnd {
            row_number: row.row_number,
            source,
        })?;

        let key = GroupKey::new(&row.station, &row.line);
        let resolved = groups
            .entry(key)
            .or_insert_with_key(|key| resolve_group(&index, key));

        let adjustment = adjust(start, end, resolved);
        optimized.push(OptimizedRequest {
            optimized_time_from: adjustment.optimized_from,
            optimized_time_to: adjustment.optimized_to,
            optimization_details: adjustment.details,
        });
    }

    Ok(optimized)
}

fn resolve_group(index: &CorridorIndex, key: &GroupKey) -> ResolvedWindow {
    let resolved = index.resolve(key);
    if resolved.used_fallback {
        warn!(
            "no corridor block found for {} and {}, using default 00:00-04:00",
            key.station, key.line
        );
    } else {
        debug!(
            "corridor block for {} and {}: {}-{}",
            key.station,
            key.line,
            format_clock_time(resolved.window.start),
            format_clock_time(resolved.window.end)
        );
    }
    resolved
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::span_duration;
    use crate::types::RequestRow;
    use chrono::NaiveTime;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn corridor_record(station: &str, line: &str, from: &str, to: &str) -> CorridorRecord {
        CorridorRecord {
            station: station.to_string(),
            line: line.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    fn request_table(rows: &[(&str, &str, &str, &str)]) -> RequestTable {
        RequestTable {
            headers: ["BET STN", "LINE", "D.FRM", "D.TO"]
                .iter()
                .map(|h| h.to_string())
                .collect(),
            rows: rows
                .iter()
                .enumerate()
                .map(|(idx, &(station, line, from, to))| RequestRow {
                    row_number: idx + 1,
                    station: station.to_string(),
                    line: line.to_string(),
                    time_from: from.to_string(),
                    time_to: to.to_string(),
                    record: vec![
                        station.to_string(),
                        line.to_string(),
                        from.to_string(),
                        to.to_string(),
                    ],
                })
                .collect(),
        }
    }

    #[test]
    fn every_row_keeps_its_duration() {
        let requests = request_table(&[
            ("North-Yard", "UP", "01:15", "01:45"),
            ("North-Yard", "UP", "01:45", "02:30"),
            ("South-Yard", "DN", "23:30", "00:30"),
            ("Ghost-Halt", "L2", "02:00", "03:00"),
        ]);
        let corridor = vec![
            corridor_record("North-Yard", "UP", "01:00", "02:00"),
            corridor_record("South-Yard", "DN", "00:00", "00:15"),
        ];

        let optimized = optimize(&requests, &corridor).unwrap();

        assert_eq!(optimized.len(), requests.rows.len());
        for (row, opt) in requests.rows.iter().zip(&optimized) {
            let original = span_duration(
                parse_clock_time(&row.time_from).unwrap(),
                parse_clock_time(&row.time_to).unwrap(),
            );
            let adjusted = span_duration(opt.optimized_time_from, opt.optimized_time_to);
            assert_eq!(adjusted, original, "row {} changed duration", row.row_number);
        }
    }

    #[test]
    fn group_members_share_one_window() {
        let requests = request_table(&[
            ("North-Yard", "UP", "01:15", "01:45"),
            ("North-Yard", "UP", "01:45", "02:30"),
        ]);
        let corridor = vec![corridor_record("North-Yard", "UP", "01:00", "02:00")];

        let optimized = optimize(&requests, &corridor).unwrap();

        // First fits as-is; second overruns 02:00 and re-anchors to the
        // same window's start.
        assert_eq!(optimized[0].optimized_time_from, hm(1, 15));
        assert_eq!(optimized[0].optimized_time_to, hm(1, 45));
        assert_eq!(optimized[1].optimized_time_from, hm(1, 0));
        assert_eq!(optimized[1].optimized_time_to, hm(1, 45));
        assert!(optimized[1]
            .optimization_details
            .ends_with("Adjusted to corridor start."));
    }

    #[test]
    fn spaced_station_matches_hyphenated_corridor_row() {
        let requests = request_table(&[("North Yard", "UP", "01:15", "01:45")]);
        let corridor = vec![corridor_record("North-Yard", "UP", "01:00", "03:00")];

        let optimized = optimize(&requests, &corridor).unwrap();

        assert!(!optimized[0]
            .optimization_details
            .contains("No corridor block found"));
        assert_eq!(optimized[0].optimized_time_from, hm(1, 15));
    }

    #[test]
    fn unmatched_group_falls_back_to_default_window() {
        let requests = request_table(&[("North-Yard", "L2", "05:00", "06:30")]);

        let optimized = optimize(&requests, &[]).unwrap();

        // 1h30m fits the 00:00-04:00 fallback once re-anchored.
        assert_eq!(optimized[0].optimized_time_from, hm(0, 0));
        assert_eq!(optimized[0].optimized_time_to, hm(1, 30));
        assert!(optimized[0].optimization_details.contains(
            "No corridor block found for North-Yard and L2. Using default 00:00-04:00."
        ));
    }

    #[test]
    fn output_order_matches_input_order_across_groups() {
        let requests = request_table(&[
            ("North-Yard", "UP", "01:00", "01:10"),
            ("South-Yard", "DN", "05:00", "05:20"),
            ("North-Yard", "UP", "01:00", "01:30"),
            ("South-Yard", "DN", "05:00", "05:40"),
        ]);
        let corridor = vec![
            corridor_record("North-Yard", "UP", "01:00", "02:00"),
            corridor_record("South-Yard", "DN", "05:00", "06:00"),
        ];

        let optimized = optimize(&requests, &corridor).unwrap();

        // Durations identify the rows: 10, 20, 30, 40 minutes.
        let minutes: Vec<i64> = optimized
            .iter()
            .map(|o| span_duration(o.optimized_time_from, o.optimized_time_to).num_minutes())
            .collect();
        assert_eq!(minutes, vec![10, 20, 30, 40]);
    }

    #[test]
    fn malformed_request_time_aborts_the_batch() {
        let requests = request_table(&[
            ("North-Yard", "UP", "01:00", "01:30"),
            ("North-Yard", "UP", "25:99:00", "02:00"),
        ]);

        let err = optimize(&requests, &[]).unwrap_err();

        match &err {
            OptimizeError::RequestStart { row_number, .. } => assert_eq!(*row_number, 2),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("request row 2"));
        assert!(err.to_string().contains("25:99:00"));
    }

    #[test]
    fn malformed_corridor_time_aborts_the_batch() {
        let requests = request_table(&[("North-Yard", "UP", "01:00", "01:30")]);
        let corridor = vec![corridor_record("Elsewhere", "DN", "bad", "03:00")];

        let err = optimize(&requests, &corridor).unwrap_err();

        assert!(matches!(err, OptimizeError::Corridor(_)));
        assert!(err.to_string().contains("corridor row 1"));
    }
}
