//! Batch optimizer that fits possession requests into corridor blocks.
//!
//! Requests are grouped by (station, line); each group resolves a single
//! permitted corridor window (or the 00:00-04:00 fallback when none is
//! configured) and every request is adjusted to lie inside it while keeping
//! its duration, with a per-request rationale recorded alongside. The core
//! transformation in [`services::optimize`] is a pure function of the two
//! input tables; CSV loading and writing live at the edges.

pub mod cli;
pub mod config;
pub mod defaults;
pub mod services;
pub mod types;
