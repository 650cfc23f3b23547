//! DefectDojo export format.
//!
//! Documents look like `{ "findings": [ { title, severity, description,
//! active }, ... ] }`. The severity vocabulary is already the canonical one,
//! so mapping is the case-folded identity with unknown values routed to the
//! lowest bucket; status derives from the boolean `active` flag.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::model::{Finding, FindingStatus, ReportSource, Severity};
use crate::normalize::traits::ReportFormat;

/// Raw shape of one element of the `findings` array.
///
/// Every field is optional; the export is not trusted to carry any of them.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDefectDojoFinding {
    title: Option<String>,
    severity: Option<String>,
    description: Option<String>,
    active: Option<bool>,
}

impl RawDefectDojoFinding {
    /// Decodes an array element, degrading to the all-`None` shape when the
    /// element is not an object (or carries wrongly-typed fields).
    fn decode(entry: &Value) -> Self {
        serde_json::from_value(entry.clone()).unwrap_or_else(|err| {
            warn!(error = %err, "Undecodable DefectDojo finding entry, using fallbacks");
            Self::default()
        })
    }
}

/// [`ReportFormat`] implementation for DefectDojo exports.
pub struct DefectDojoFormat;

impl ReportFormat for DefectDojoFormat {
    fn source(&self) -> ReportSource {
        ReportSource::DefectDojo
    }

    fn findings_field(&self) -> &'static str {
        "findings"
    }

    fn normalize_entry(&self, entry: &Value) -> Finding {
        let raw = RawDefectDojoFinding::decode(entry);
        Finding {
            id: Uuid::new_v4(),
            title: raw.title.unwrap_or_default(),
            severity: Severity::from_defectdojo(raw.severity.as_deref()),
            // Verbatim, empty string included; DefectDojo has no fallback rule.
            description: raw.description.unwrap_or_default(),
            status: FindingStatus::from_active(raw.active.unwrap_or(false)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use std::collections::HashSet;

    #[test]
    fn test_normalizes_in_source_order_with_distinct_ids() {
        let raw = r#"{
            "findings": [
                {"title": "SQLi", "severity": "Critical", "description": "d1", "active": true},
                {"title": "XSS", "severity": "High", "description": "d2", "active": true},
                {"title": "CSRF", "severity": "Medium", "description": "d3", "active": false}
            ]
        }"#;
        let findings = normalize(raw, ReportSource::DefectDojo).unwrap();
        assert_eq!(findings.len(), 3);

        let titles: Vec<&str> = findings.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, ["SQLi", "XSS", "CSRF"]);

        let ids: HashSet<Uuid> = findings.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_end_to_end_single_finding() {
        let raw =
            r#"{"findings": [{"title": "SQLi", "severity": "Critical", "description": "", "active": true}]}"#;
        let findings = normalize(raw, ReportSource::DefectDojo).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].title, "SQLi");
        assert_eq!(findings[0].severity, Severity::Critical);
        assert_eq!(findings[0].status, FindingStatus::Open);
        // Empty description is preserved, not defaulted.
        assert_eq!(findings[0].description, "");
    }

    #[test]
    fn test_severity_is_case_folded() {
        let entry: Value =
            serde_json::from_str(r#"{"title": "t", "severity": "CRITICAL", "active": true}"#)
                .unwrap();
        assert_eq!(DefectDojoFormat.normalize_entry(&entry).severity, Severity::Critical);
    }

    #[test]
    fn test_active_flag_drives_status() {
        let open: Value = serde_json::from_str(r#"{"active": true}"#).unwrap();
        let closed: Value = serde_json::from_str(r#"{"active": false}"#).unwrap();
        assert_eq!(DefectDojoFormat.normalize_entry(&open).status, FindingStatus::Open);
        assert_eq!(DefectDojoFormat.normalize_entry(&closed).status, FindingStatus::Closed);
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let entry: Value = serde_json::from_str("{}").unwrap();
        let finding = DefectDojoFormat.normalize_entry(&entry);
        assert_eq!(finding.title, "");
        assert_eq!(finding.severity, Severity::Low);
        assert_eq!(finding.description, "");
        // Absent `active` reads as inactive.
        assert_eq!(finding.status, FindingStatus::Closed);
    }

    #[test]
    fn test_non_object_entry_yields_fallback_finding() {
        let raw = r#"{"findings": ["just a string", 42]}"#;
        let findings = normalize(raw, ReportSource::DefectDojo).unwrap();
        assert_eq!(findings.len(), 2);
        for finding in &findings {
            assert_eq!(finding.title, "");
            assert_eq!(finding.severity, Severity::Low);
            assert_eq!(finding.status, FindingStatus::Closed);
        }
    }
}
