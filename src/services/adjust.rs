//! Per-request fitting against a resolved corridor window.

use chrono::NaiveTime;

use crate::services::clock::{add_duration, format_clock_time, span_duration};
use crate::services::corridor::ResolvedWindow;

/// Outcome of fitting one request into its group's window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    pub optimized_from: NaiveTime,
    pub optimized_to: NaiveTime,
    pub details: String,
}

/// Fit a single request into `resolved`, preserving its duration exactly.
///
/// A request already starting inside the window keeps its own start; one
/// starting earlier is pulled forward to the window start. If the request
/// would overrun the window end at its natural position it is re-anchored
/// to the window start instead. The re-anchored end is not checked again: a
/// duration longer than the whole block keeps its full length and runs past
/// the window end.
pub fn adjust(
    request_start: NaiveTime,
    request_end: NaiveTime,
    resolved: &ResolvedWindow,
) -> Adjustment {
    let duration = span_duration(request_start, request_end);
    let window = resolved.window;

    let candidate_start = request_start.max(window.start);
    let candidate_end = add_duration(candidate_start, duration);

    let mut fragments = vec![describe_window(resolved)];
    let (optimized_from, optimized_to) = if candidate_end > window.end {
        fragments.push("Adjusted to corridor start.".to_string());
        (window.start, add_duration(window.start, duration))
    } else {
        fragments.push("Within corridor.".to_string());
        (candidate_start, candidate_end)
    };

    Adjustment {
        optimized_from,
        optimized_to,
        details: fragments.join("\n").trim_end().to_string(),
    }
}

/// The window-description fragment that leads every details string.
fn describe_window(resolved: &ResolvedWindow) -> String {
    if resolved.used_fallback {
        format!(
            "No corridor block found for {} and {}. Using default {}-{}.",
            resolved.key.station,
            resolved.key.line,
            format_clock_time(resolved.window.start),
            format_clock_time(resolved.window.end),
        )
    } else {
        format!(
            "Corridor block from {} to {}.",
            format_clock_time(resolved.window.start),
            format_clock_time(resolved.window.end),
        )
    }
}

// ===========================================================================
// Tests
// ===========================================================================
