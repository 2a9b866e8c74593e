use tauri::AppHandle;
use tauri_plugin_dialog::DialogExt;

use crate::storage::documents;

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

#[tauri::command]
pub async fn pick_image_file(app: AppHandle) -> Option<String> {
    app.dialog()
        .file()
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .blocking_pick_file()
        .map(|path| path.to_string())
}

#[tauri::command]
pub async fn pick_save_path(app: AppHandle, default_name: Option<String>) -> Option<String> {
    let name = default_name.unwrap_or_else(documents::default_document_name_today);
    app.dialog()
        .file()
        .set_file_name(name)
        .add_filter("Word Document", &["docx"])
        .blocking_save_file()
        .map(|path| path.to_string())
}
