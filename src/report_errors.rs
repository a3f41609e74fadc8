//! # Report Error Types Module
//!
//! Whole-report failures surfaced to the caller. Per-line anomalies
//! (unresolvable products, malformed ingredients, invalid quantities) are
//! not errors: they are recovered locally with skip-and-continue and a
//! warning. Only a fault touching the whole data snapshot, or an invalid
//! build request, propagates here; a partial report would misrepresent
//! procurement needs, so there is no partial-success variant.

/// Failures that abort an entire report build.
#[derive(Debug, Clone)]
pub enum ReportError {
    /// The order/product snapshot could not be fetched or parsed
    Snapshot(String),
    /// The report request itself is invalid or assembly faulted
    Build(String),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Snapshot(msg) => write!(f, "Snapshot error: {msg}"),
            ReportError::Build(msg) => write!(f, "Build error: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<anyhow::Error> for ReportError {
    fn from(err: anyhow::Error) -> Self {
        ReportError::Snapshot(format!("{err:#}"))
    }
}
