//! Core trait for per-schema report normalization.
//!
//! Each supported scanner export format implements [`ReportFormat`] to
//! describe where its findings live in the document and how one raw array
//! element coerces into the canonical [`Finding`] shape.

use serde_json::Value;

use crate::model::{Finding, ReportSource};

// ============================================================================
// Report Format Trait
// ============================================================================

/// Abstraction over external scanner export schemas.
///
/// Each supported schema implements this trait to provide:
/// - The [`ReportSource`] tag it handles
/// - The root-level field holding the findings array
/// - Per-element coercion into a normalized [`Finding`]
///
/// Implementations never fail: absent, null, or wrongly-typed fields degrade
/// to documented fallbacks. The only outright failure in the pipeline is
/// unparseable JSON, which is handled before a format ever sees the
/// document.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; they are stateless and dispatched
/// as `&'static dyn ReportFormat`.
pub trait ReportFormat: Send + Sync {
    /// Returns the source tag this format handles.
    ///
    /// Used in metadata tagging and logging.
    fn source(&self) -> ReportSource;

    /// Name of the root-level document field holding the findings array.
    ///
    /// Examples: `"findings"` (DefectDojo), `"issues"` (SonarQube).
    fn findings_field(&self) -> &'static str;

    /// Coerces one raw array element into a normalized [`Finding`].
    ///
    /// Every source field is treated as optional: the element may be missing
    /// fields, carry nulls, or not even be a JSON object. The returned
    /// Finding always has a severity from the canonical set and a freshly
    /// generated id.
    fn normalize_entry(&self, entry: &Value) -> Finding;

    /// Walks a parsed document and normalizes every element of its findings
    /// array, preserving source order.
    ///
    /// A findings field that is absent, null, or not an array yields an
    /// empty sequence - the upload degrades to "zero findings" rather than
    /// failing.
    fn normalize_document(&self, root: &Value) -> Vec<Finding> {
        match root.get(self.findings_field()).and_then(Value::as_array) {
            Some(entries) => entries.iter().map(|entry| self.normalize_entry(entry)).collect(),
            None => Vec::new(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
