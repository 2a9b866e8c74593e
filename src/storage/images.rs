use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};
use uuid::Uuid;

use crate::core::{
    errors::{AppError, AppResult},
    types::EmbeddedImage,
};

/// Loads an image file as the record the editor embeds.
pub async fn read_image(file_path: &Path) -> AppResult<EmbeddedImage> {
    let bytes = tokio::fs::read(file_path).await.map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => AppError::NotFound(format!("image {}", file_path.display())),
        _ => AppError::Io(format!("cannot read image {}: {err}", file_path.display())),
    })?;
    if bytes.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "image {} is empty",
            file_path.display()
        )));
    }

    Ok(EmbeddedImage {
        id: format!("img_{}", Uuid::new_v4().simple()),
        base64_data: STANDARD.encode(&bytes),
        source_path: file_path.to_string_lossy().to_string(),
    })
}

pub fn mime_type(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(format) => format.to_mime_type(),
        Err(_) => "image/png",
    }
}

/// `data:<mime>;base64,<payload>` for inserting the image into editor HTML.
pub fn data_uri(image: &EmbeddedImage) -> String {
    let mime = STANDARD
        .decode(&image.base64_data)
        .map(|bytes| mime_type(&bytes))
        .unwrap_or("image/png");
    format!("data:{mime};base64,{}", image.base64_data)
}
