//! Display shaping for search results and status lines. Output mirrors the
//! service's result ordering; nothing is sorted or filtered here.

use crate::client::VectorDbError;
use crate::models::SearchHit;
use std::fmt::Write;

const DELIMITER: &str = "------------------------------------";

/// Status line shown after a successful ingest.
pub fn ingest_status(id: &str) -> String {
    format!("Vector added successfully! ID: {}", id)
}

/// One block per hit: text, distance to 4 decimal places, residual metadata
/// as indented JSON, then a delimiter line. Empty input renders as empty
/// output with no delimiters.
pub fn search_results(hits: &[SearchHit]) -> String {
    let mut out = String::new();
    for hit in hits {
        let metadata = serde_json::to_string_pretty(&hit.metadata)
            .unwrap_or_else(|_| "{}".to_string());
        let _ = writeln!(out, "Text: {}", hit.text);
        let _ = writeln!(out, "Distance: {:.4}", hit.distance);
        let _ = writeln!(out, "Metadata: {}", metadata);
        let _ = writeln!(out, "{}", DELIMITER);
    }
    out
}

/// Status line for a failed operation. Service-reported failures keep their
/// `detail` verbatim; everything local or transport-level is prefixed to
/// tell the two apart.
pub fn error_status(err: &VectorDbError) -> String {
    match err {
        VectorDbError::Service { detail } => format!("Error: {}", detail),
        VectorDbError::LengthMismatch { .. } => format!("Error: {}", err),
        // MissingId lands here too: a 2xx body without an id is a
        // malformed-response failure, same category as a decode error.
        _ => format!("Request failed: {}", err),
    }
}
