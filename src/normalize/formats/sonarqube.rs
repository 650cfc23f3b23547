//! SonarQube issue export format.
//!
//! Documents look like `{ "issues": [ { message, severity, description?,
//! status }, ... ] }`. SonarQube speaks its own severity vocabulary
//! (BLOCKER/CRITICAL/MAJOR/MINOR/INFO), remapped onto the canonical scale;
//! the description falls back to the message when absent or empty.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::model::{Finding, FindingStatus, ReportSource, Severity};
use crate::normalize::traits::ReportFormat;

/// Raw shape of one element of the `issues` array.
///
/// Every field is optional; the export is not trusted to carry any of them.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSonarQubeIssue {
    message: Option<String>,
    severity: Option<String>,
    description: Option<String>,
    status: Option<String>,
}

impl RawSonarQubeIssue {
    /// Decodes an array element, degrading to the all-`None` shape when the
    /// element is not an object (or carries wrongly-typed fields).
    fn decode(entry: &Value) -> Self {
        serde_json::from_value(entry.clone()).unwrap_or_else(|err| {
            warn!(error = %err, "Undecodable SonarQube issue entry, using fallbacks");
            Self::default()
        })
    }
}

/// [`ReportFormat`] implementation for SonarQube issue exports.
pub struct SonarQubeFormat;

impl ReportFormat for SonarQubeFormat {
    fn source(&self) -> ReportSource {
        ReportSource::SonarQube
    }

    fn findings_field(&self) -> &'static str {
        "issues"
    }

    fn normalize_entry(&self, entry: &Value) -> Finding {
        let raw = RawSonarQubeIssue::decode(entry);
        let title = raw.message.unwrap_or_default();
        // Description falls back to the message when absent or empty.
        let description = match raw.description {
            Some(description) if !description.is_empty() => description,
            _ => title.clone(),
        };
        Finding {
            id: Uuid::new_v4(),
            title,
            severity: Severity::from_sonarqube(raw.severity.as_deref()),
            description,
            // Absent status reads as SonarQube's default, OPEN.
            status: raw
                .status
                .as_deref()
                .map(FindingStatus::parse)
                .unwrap_or(FindingStatus::Open),
        }
    }
}
