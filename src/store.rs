//! Single owner of application state.
//!
//! All mutation goes through the defined operations here; the rendering
//! layer only ever sees borrowed slices. Reports are append-only - once
//! stored they are never edited or deleted.

use tracing::{info, warn};

use crate::checklist::{self, ChecklistFilter, ChecklistItem, ChecklistMetrics};
use crate::model::Report;

/// Application state: the seeded checklist plus every successfully ingested
/// report, in upload order.
#[derive(Debug)]
pub struct ReviewStore {
    checklist: Vec<ChecklistItem>,
    reports: Vec<Report>,
}

impl ReviewStore {
    /// Creates a store seeded with the fixed review tasks and no reports.
    pub fn new() -> Self {
        Self {
            checklist: checklist::seed_checklist(),
            reports: Vec::new(),
        }
    }

    /// Read-only view of the checklist, in seed order.
    pub fn checklist(&self) -> &[ChecklistItem] {
        &self.checklist
    }

    /// Read-only view of ingested reports, in upload order.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Checklist items passing `filter`, preserving seed order.
    pub fn filtered(&self, filter: ChecklistFilter) -> Vec<&ChecklistItem> {
        self.checklist
            .iter()
            .filter(|item| filter.matches(item))
            .collect()
    }

    /// Dashboard metrics over the current checklist.
    pub fn metrics(&self) -> ChecklistMetrics {
        checklist::metrics(&self.checklist)
    }

    /// Appends a successfully ingested report. The only way a report enters
    /// the store.
    pub fn append_report(&mut self, report: Report) -> &Report {
        info!(
            report_id = %report.id,
            source = %report.source,
            findings = report.findings.len(),
            "Storing ingested report"
        );
        self.reports.push(report);
        self.reports.last().expect("report just appended")
    }

    /// Flips an item's completed flag. Returns `false` when `id` is unknown.
    pub fn toggle_completed(&mut self, id: &str) -> bool {
        match self.checklist.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                info!(item_id = %id, completed = item.completed, "Toggled checklist item");
                true
            }
            None => {
                warn!(item_id = %id, "Toggle requested for unknown checklist item");
                false
            }
        }
    }

    /// Replaces an item's notes. Returns `false` when `id` is unknown.
    pub fn set_notes(&mut self, id: &str, notes: impl Into<String>) -> bool {
        match self.checklist.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.notes = notes.into();
                true
            }
            None => {
                warn!(item_id = %id, "Notes update requested for unknown checklist item");
                false
            }
        }
    }
}

impl Default for ReviewStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReportSource;
    use crate::normalize::NormalizeError;

    #[test]
    fn test_new_store_is_seeded_and_empty_of_reports() {
        let store = ReviewStore::new();
        assert_eq!(store.checklist().len(), 5);
        assert!(store.reports().is_empty());
    }

    #[test]
    fn test_append_preserves_upload_order() {
        let mut store = ReviewStore::new();
        let first = Report::from_upload("a.json", ReportSource::DefectDojo, "{}").unwrap();
        let second = Report::from_upload("b.json", ReportSource::SonarQube, "{}").unwrap();
        store.append_report(first);
        store.append_report(second);

        let names: Vec<&str> = store.reports().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a.json", "b.json"]);
    }

    #[test]
    fn test_failed_upload_stores_nothing() {
        let store = ReviewStore::new();
        let result = Report::from_upload("bad.json", ReportSource::DefectDojo, "not json");
        assert!(matches!(result, Err(NormalizeError::InvalidJson(_))));
        // Nothing to append; existing state untouched.
        assert!(store.reports().is_empty());
        assert_eq!(store.checklist().len(), 5);
    }

    #[test]
    fn test_toggle_flips_only_the_addressed_item() {
        let mut store = ReviewStore::new();
        assert!(store.toggle_completed("3"));
        assert!(store.checklist()[2].completed);
        assert!(store.checklist().iter().filter(|item| item.completed).count() == 1);

        // Toggling again flips back.
        assert!(store.toggle_completed("3"));
        assert!(!store.checklist()[2].completed);
    }

    #[test]
    fn test_unknown_ids_mutate_nothing() {
        let mut store = ReviewStore::new();
        assert!(!store.toggle_completed("99"));
        assert!(!store.set_notes("99", "lost"));
        assert!(store.checklist().iter().all(|item| !item.completed && item.notes.is_empty()));
    }

    #[test]
    fn test_set_notes_replaces_text() {
        let mut store = ReviewStore::new();
        assert!(store.set_notes("1", "password hashing uses argon2id"));
        assert_eq!(store.checklist()[0].notes, "password hashing uses argon2id");

        assert!(store.set_notes("1", ""));
        assert_eq!(store.checklist()[0].notes, "");
    }

    #[test]
    fn test_filtered_views() {
        let mut store = ReviewStore::new();
        store.toggle_completed("1");

        assert_eq!(store.filtered(ChecklistFilter::All).len(), 5);
        assert_eq!(store.filtered(ChecklistFilter::Completed).len(), 1);
        assert_eq!(store.filtered(ChecklistFilter::Pending).len(), 4);
        assert_eq!(store.filtered(ChecklistFilter::Completed)[0].id, "1");
    }

    #[test]
    fn test_metrics_reflect_mutations() {
        let mut store = ReviewStore::new();
        store.toggle_completed("1");
        store.toggle_completed("2");

        let m = store.metrics();
        assert_eq!(m.completed, 2);
        assert_eq!(m.critical_completed, 2);
        assert_eq!(m.critical_pending, 0);
    }
}
