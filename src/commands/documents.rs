use std::path::PathBuf;

use crate::{
    core::{
        errors::{AppError, AppResult},
        types::{EmbeddedImage, ReadImageResponse, SaveDocumentResponse, SourceDocument},
    },
    storage::{documents, images},
};

#[tauri::command]
pub async fn read_image(file_path: String) -> ReadImageResponse {
    let result = images::read_image(&PathBuf::from(&file_path)).await;
    if let Err(err) = &result {
        log::warn!("read_image failed for {file_path}: {err}");
    }
    ReadImageResponse::from_result(result)
}

#[tauri::command]
pub async fn save_document(file_path: String, buffer: Vec<u8>) -> SaveDocumentResponse {
    SaveDocumentResponse::from_result(documents::save_document(&PathBuf::from(file_path), &buffer).await)
}

#[tauri::command]
pub async fn generate_document(
    file_path: String,
    html: String,
    images: Option<Vec<EmbeddedImage>>,
) -> AppResult<SaveDocumentResponse> {
    if html.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "add some content before generating the document".to_string(),
        ));
    }
    let source = SourceDocument {
        html,
        images: images.unwrap_or_default(),
    };
    let result = documents::export_document(&PathBuf::from(&file_path), source)
        .await
        .map(|_| ());
    if let Err(err) = &result {
        log::error!("document generation failed for {file_path}: {err}");
    }
    Ok(SaveDocumentResponse::from_result(result))
}

#[tauri::command]
pub fn default_document_name() -> String {
    documents::default_document_name_today()
}
