pub mod checklist;
pub mod export;
pub mod ingest;
pub mod model;
pub mod normalize;
pub mod store;

// Re-export common types for convenience
pub use checklist::{ChecklistFilter, ChecklistItem, ChecklistMetrics};
pub use ingest::{FileUpload, IngestError, ReportIngestor, UploadSource};
pub use model::{Finding, FindingStatus, Report, ReportSource, Severity};
pub use normalize::{normalize, NormalizeError};
pub use store::ReviewStore;
