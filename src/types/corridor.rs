//! Corridor table types

use serde::Deserialize;

/// One row of the corridor table, as read from CSV.
///
/// `from`/`to` keep the raw cell text: the leading token is the clock time,
/// anything after a space is an annotation (e.g. "22:00 (PM block)").
#[derive(Debug, Clone, Deserialize)]
pub struct CorridorRecord {
    #[serde(
        rename = "Section/ station",
        alias = "Section/station",
        alias = "Station",
        alias = "STATION"
    )]
    pub station: String,
    #[serde(rename = "Line", alias = "LINE")]
    pub line: String,
    #[serde(rename = "From", alias = "FROM")]
    pub from: String,
    #[serde(rename = "To", alias = "TO")]
    pub to: String,
}
