//! Manual review checklist: static seed tasks, completion filtering, and
//! dashboard metrics.

use serde::{Deserialize, Serialize};

use crate::model::Severity;

/// A manual review task, independent of uploaded reports.
///
/// `completed` and `notes` are the only mutable fields; everything else is
/// fixed at seed time. Items are never destroyed during a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Severity, // fixed
    pub completed: bool,
    pub notes: String,
}

impl ChecklistItem {
    fn seeded(id: &str, title: &str, description: &str, category: Severity) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            description: description.to_owned(),
            category,
            completed: false,
            notes: String::new(),
        }
    }
}

/// The fixed set of review tasks every session starts from.
pub fn seed_checklist() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::seeded(
            "1",
            "Authentication Implementation Review",
            "Verify secure password hashing, MFA implementation, and session management.",
            Severity::Critical,
        ),
        ChecklistItem::seeded(
            "2",
            "Data Encryption Standards",
            "Ensure all sensitive data is encrypted at rest and in transit using industry standards.",
            Severity::Critical,
        ),
        ChecklistItem::seeded(
            "3",
            "Access Control Audit",
            "Review role-based access control (RBAC) implementation and permissions.",
            Severity::High,
        ),
        ChecklistItem::seeded(
            "4",
            "Security Headers Configuration",
            "Verify implementation of security headers including CSP, HSTS, etc.",
            Severity::Medium,
        ),
        ChecklistItem::seeded(
            "5",
            "Dependency Vulnerability Scan",
            "Check for known vulnerabilities in project dependencies.",
            Severity::High,
        ),
    ]
}

/// Completion filter for checklist views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl ChecklistFilter {
    /// Whether an item passes this filter.
    pub fn matches(&self, item: &ChecklistItem) -> bool {
        match self {
            ChecklistFilter::All => true,
            ChecklistFilter::Completed => item.completed,
            ChecklistFilter::Pending => !item.completed,
        }
    }
}

/// Dashboard numbers computed over the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistMetrics {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Completed share as a rounded integer percentage; 0 for an empty list.
    pub completion_rate: u8,
    pub critical: usize,
    pub critical_completed: usize,
    pub critical_pending: usize,
}

/// Computes dashboard metrics over a checklist slice.
pub fn metrics(items: &[ChecklistItem]) -> ChecklistMetrics {
    let total = items.len();
    let completed = items.iter().filter(|item| item.completed).count();
    let critical = items
        .iter()
        .filter(|item| item.category == Severity::Critical)
        .count();
    let critical_completed = items
        .iter()
        .filter(|item| item.category == Severity::Critical && item.completed)
        .count();

    let completion_rate = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    };

    ChecklistMetrics {
        total,
        completed,
        pending: total - completed,
        completion_rate,
        critical,
        critical_completed,
        critical_pending: critical - critical_completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let items = seed_checklist();
        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|item| !item.completed && item.notes.is_empty()));

        let categories: Vec<Severity> = items.iter().map(|item| item.category).collect();
        assert_eq!(
            categories,
            [
                Severity::Critical,
                Severity::Critical,
                Severity::High,
                Severity::Medium,
                Severity::High
            ]
        );
    }

    #[test]
    fn test_filter_matches() {
        let mut items = seed_checklist();
        items[0].completed = true;

        assert!(items.iter().all(|item| ChecklistFilter::All.matches(item)));
        assert!(ChecklistFilter::Completed.matches(&items[0]));
        assert!(!ChecklistFilter::Completed.matches(&items[1]));
        assert!(ChecklistFilter::Pending.matches(&items[1]));
        assert!(!ChecklistFilter::Pending.matches(&items[0]));
    }

    #[test]
    fn test_metrics_over_seed() {
        let mut items = seed_checklist();
        items[0].completed = true; // critical
        items[2].completed = true; // high

        let m = metrics(&items);
        assert_eq!(m.total, 5);
        assert_eq!(m.completed, 2);
        assert_eq!(m.pending, 3);
        assert_eq!(m.completion_rate, 40);
        assert_eq!(m.critical, 2);
        assert_eq!(m.critical_completed, 1);
        assert_eq!(m.critical_pending, 1);
    }

    #[test]
    fn test_metrics_rate_rounds() {
        let mut items = seed_checklist();
        items[0].completed = true;

        // 1 of 5 -> 20; 2 of 3 -> 67 after rounding.
        assert_eq!(metrics(&items).completion_rate, 20);

        let mut three = seed_checklist();
        three.truncate(3);
        three[0].completed = true;
        three[1].completed = true;
        assert_eq!(metrics(&three).completion_rate, 67);
    }

    #[test]
    fn test_metrics_empty_list() {
        let m = metrics(&[]);
        assert_eq!(m.total, 0);
        assert_eq!(m.completion_rate, 0);
        assert_eq!(m.critical_pending, 0);
    }
}
