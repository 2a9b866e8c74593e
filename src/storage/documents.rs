use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::core::{
    config::DEFAULT_DOCUMENT_PREFIX,
    errors::{AppError, AppResult},
    types::SourceDocument,
};

pub async fn save_document(file_path: &Path, bytes: &[u8]) -> AppResult<()> {
    if file_path.as_os_str().is_empty() {
        return Err(AppError::InvalidInput("file path cannot be empty".to_string()));
    }
    tokio::fs::write(file_path, bytes)
        .await
        .map_err(|err| AppError::Io(format!("cannot write {}: {err}", file_path.display())))?;
    log::info!("saved {} byte(s) to {}", bytes.len(), file_path.display());
    Ok(())
}

/// `Research_Paper_<YYYY-MM-DD>.docx`
pub fn default_document_name(date: NaiveDate) -> String {
    format!("{DEFAULT_DOCUMENT_PREFIX}_{}.docx", date.format("%Y-%m-%d"))
}

pub fn default_document_name_today() -> String {
    default_document_name(Local::now().date_naive())
}

/// Converts `source` to `.docx` off the async runtime and writes it to `file_path`.
/// Returns the number of bytes written.
pub async fn export_document(file_path: &Path, source: SourceDocument) -> AppResult<usize> {
    let bytes = tokio::task::spawn_blocking(move || source.to_docx()).await??;
    save_document(file_path, &bytes).await?;
    Ok(bytes.len())
}
