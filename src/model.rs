use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::normalize::{self, NormalizeError};

/// Canonical severity scale shared by every ingested report.
///
/// Variants are declared in ascending order so `Ord` matches priority
/// (`Critical > High > Medium > Low`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Maps a DefectDojo severity string onto the canonical scale.
    ///
    /// DefectDojo already speaks the canonical vocabulary, so this is the
    /// case-folded identity for the four known values. Anything else,
    /// including an absent field, lands on `Low`.
    pub fn from_defectdojo(raw: Option<&str>) -> Self {
        match raw.map(str::to_lowercase).as_deref() {
            Some("critical") => Severity::Critical,
            Some("high") => Severity::High,
            Some("medium") => Severity::Medium,
            _ => Severity::Low,
        }
    }

    /// Maps a SonarQube severity string onto the canonical scale.
    ///
    /// Case-insensitive. Unrecognized values (including `"info"`) and absent
    /// fields land on `Low`.
    pub fn from_sonarqube(raw: Option<&str>) -> Self {
        match raw.map(str::to_lowercase).as_deref() {
            Some("blocker") | Some("critical") => Severity::Critical,
            Some("major") => Severity::High,
            Some("minor") => Severity::Medium,
            _ => Severity::Low,
        }
    }

    /// Lowercase display string, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow status of a finding.
///
/// `open` and `closed` are the canonical states. Any other status a scanner
/// reports is carried lowercased in [`FindingStatus::Other`] instead of
/// escaping into internal logic as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FindingStatus {
    Open,
    Closed,
    Other(String),
}

impl FindingStatus {
    /// Parses a scanner-reported status, case-insensitively.
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        match lowered.as_str() {
            "open" => FindingStatus::Open,
            "closed" => FindingStatus::Closed,
            _ => FindingStatus::Other(lowered),
        }
    }

    /// Status derived from DefectDojo's boolean `active` flag.
    pub fn from_active(active: bool) -> Self {
        if active {
            FindingStatus::Open
        } else {
            FindingStatus::Closed
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FindingStatus::Open => "open",
            FindingStatus::Closed => "closed",
            FindingStatus::Other(status) => status,
        }
    }
}

impl From<String> for FindingStatus {
    fn from(raw: String) -> Self {
        FindingStatus::parse(&raw)
    }
}

impl From<FindingStatus> for String {
    fn from(status: FindingStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl std::fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which external scanner produced an uploaded report. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSource {
    DefectDojo,
    SonarQube,
}

impl ReportSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportSource::DefectDojo => "defectdojo",
            ReportSource::SonarQube => "sonarqube",
        }
    }
}

impl std::fmt::Display for ReportSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single normalized security issue extracted from an uploaded report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub id: Uuid, // generated at normalization time, never taken from the source
    pub title: String,
    pub severity: Severity,
    pub description: String,
    pub status: FindingStatus,
}

/// An uploaded report: file metadata plus its normalized findings.
///
/// Findings are fixed at creation and never edited afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub source: ReportSource,
    pub name: String, // original uploaded file name, opaque
    pub uploaded_at: DateTime<Utc>,
    pub findings: Vec<Finding>,
}

impl Report {
    /// Builds a report from raw uploaded file content.
    ///
    /// The normalizer runs first; if it fails no `Report` value exists, so a
    /// malformed upload can never leave a partial report behind.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::InvalidJson`] when `raw` is not parseable
    /// JSON.
    pub fn from_upload(
        name: &str,
        source: ReportSource,
        raw: &str,
    ) -> Result<Self, NormalizeError> {
        let findings = normalize::normalize(raw, source)?;
        Ok(Self {
            id: Uuid::new_v4(),
            source,
            name: name.to_owned(),
            uploaded_at: Utc::now(),
            findings,
        })
    }
}
