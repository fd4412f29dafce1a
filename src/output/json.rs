//! JSON serialization for experiment reports.

use crate::result::ExperimentReport;

/// Serialize an ExperimentReport to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for ExperimentReport).
pub fn to_json(report: &ExperimentReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a slice of reports to a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for ExperimentReport).
pub fn to_json_pretty(reports: &[ExperimentReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}
