//! Plain-text checklist export.
//!
//! The only export surface of the system: each checklist item rendered as a
//! fixed text block (title, status label, category, notes-or-placeholder,
//! separator line).

use std::path::{Path, PathBuf};

use crate::checklist::ChecklistItem;

/// Default file name for a written export.
pub const EXPORT_FILE_NAME: &str = "security-checklist-report.txt";

const SEPARATOR: &str = "-------------------";

/// Renders the checklist as plain text, one block per item in order.
pub fn render_checklist(items: &[ChecklistItem]) -> String {
    items
        .iter()
        .map(|item| {
            let status = if item.completed { "Completed" } else { "Pending" };
            let notes = if item.notes.is_empty() {
                "No notes"
            } else {
                item.notes.as_str()
            };
            format!(
                "\n{}\nStatus: {}\nCategory: {}\nNotes: {}\n{}\n",
                item.title, status, item.category, notes, SEPARATOR
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the rendered checklist under `dir` as [`EXPORT_FILE_NAME`].
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns any I/O error from creating `dir` or writing the file.
pub async fn write_checklist(dir: &Path, items: &[ChecklistItem]) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(EXPORT_FILE_NAME);
    tokio::fs::write(&path, render_checklist(items)).await?;
    Ok(path)
}
