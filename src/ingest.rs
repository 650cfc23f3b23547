use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::{info, instrument};

use crate::model::{Report, ReportSource};
use crate::normalize::NormalizeError;

/// Errors from the upload boundary.
///
/// A failed ingest produces no [`Report`]; previously stored reports and
/// checklist state are untouched. There is no retry logic - the user
/// re-submits a corrected file.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read upload: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error("Ingest executor unavailable: {0}")]
    Unavailable(String),
}

/// A user-supplied upload: a display name plus the bytes behind it.
///
/// Reading bytes is the only asynchronous step on the way into the
/// normalizer, so it sits behind this seam; the pipeline itself never does
/// I/O.
#[async_trait]
pub trait UploadSource: Send + Sync {
    /// Display name of the upload (typically the original file name).
    fn name(&self) -> &str;

    /// Reads the full upload content.
    async fn read(&self) -> std::io::Result<Vec<u8>>;
}

/// [`UploadSource`] over a local file path.
pub struct FileUpload {
    path: PathBuf,
    name: String,
}

impl FileUpload {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

#[async_trait]
impl UploadSource for FileUpload {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read(&self) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}

/// Upload executor: reads an upload, decodes it, and runs the normalizer.
///
/// Uploads are independent and the normalizer is pure, so the semaphore only
/// bounds how many file reads are in flight at once.
pub struct ReportIngestor {
    semaphore: Arc<Semaphore>,
}

impl ReportIngestor {
    pub fn new(concurrency_limit: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(concurrency_limit)),
        }
    }

    /// Turns one upload into a [`Report`].
    ///
    /// Bytes are decoded lossily as UTF-8: garbage input then fails JSON
    /// parsing naturally, keeping [`NormalizeError::InvalidJson`] the single
    /// normalization failure mode.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Io`] when the upload cannot be read and
    /// [`IngestError::Normalize`] when its content is not valid JSON.
    #[instrument(skip(self, upload), fields(name = %upload.name(), source = %source))]
    pub async fn ingest(
        &self,
        source: ReportSource,
        upload: &dyn UploadSource,
    ) -> Result<Report, IngestError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| IngestError::Unavailable(format!("Semaphore error: {}", e)))?;

        info!("Starting ingest for source: {}", source);

        let bytes = upload.read().await?;
        let text = String::from_utf8_lossy(&bytes);
        let report = Report::from_upload(upload.name(), source, &text)?;

        info!(
            findings = report.findings.len(),
            "Finished ingest for source: {}", source
        );
        Ok(report)
    }
}
