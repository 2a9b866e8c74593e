#[cfg(feature = "desktop")]
pub mod commands;
pub mod core;
pub mod docx;
pub mod storage;

pub use docx::{build, generate_docx, pack};

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let log_level = crate::core::config::log_level_from_env();
    let log_builder = tauri_plugin_log::Builder::default()
        .level(log_level)
        .level_for("html5ever", log::LevelFilter::Warn)
        .level_for("selectors", log::LevelFilter::Warn);

    tauri::Builder::default()
        .plugin(log_builder.build())
        .plugin(tauri_plugin_dialog::init())
        .invoke_handler(tauri::generate_handler![
            commands::dialogs::pick_image_file,
            commands::dialogs::pick_save_path,
            commands::documents::read_image,
            commands::documents::save_document,
            commands::documents::generate_document,
            commands::documents::default_document_name,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
