//! Normalize module - report parsing and finding normalization pipeline.
//!
//! This module provides the core data transformation of the crate:
//! - **Traits**: [`ReportFormat`] for per-schema normalization rules
//! - **Formats**: DefectDojo and SonarQube implementations under [`formats`]
//! - **Errors**: [`NormalizeError`] for the single outright failure mode
//! - **Entry point**: [`normalize`], a pure function from raw upload text to
//!   a canonical [`Finding`](crate::model::Finding) sequence

pub mod formats;
pub mod traits;

// Re-export commonly used types
pub use formats::{DefectDojoFormat, SonarQubeFormat};
pub use traits::ReportFormat;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::model::{Finding, ReportSource};

/// Errors from report normalization.
///
/// Everything short of unparseable input degrades gracefully instead of
/// erroring: a missing findings array yields zero findings, unknown
/// severities map to the lowest bucket, absent text fields fall back.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// The uploaded file content is not parseable JSON.
    #[error("Uploaded report is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Normalizes raw uploaded report text into canonical findings.
///
/// This is a pure function: no shared state, no suspension points. The
/// caller owns everything around it - reading file bytes, stamping report
/// metadata, storing the result.
///
/// Source array order is preserved. An empty or absent findings array
/// yields an empty sequence, not an error.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidJson`] when `raw` is not parseable JSON.
/// This is the only way this function fails.
pub fn normalize(raw: &str, source: ReportSource) -> Result<Vec<Finding>, NormalizeError> {
    let root: Value = serde_json::from_str(raw)?;
    let format = format_for(source);
    let findings = format.normalize_document(&root);
    debug!(source = %format.source(), count = findings.len(), "Normalized report payload");
    Ok(findings)
}

/// Returns the format implementation for a report source.
fn format_for(source: ReportSource) -> &'static dyn ReportFormat {
    match source {
        ReportSource::DefectDojo => &DefectDojoFormat,
        ReportSource::SonarQube => &SonarQubeFormat,
    }
}
