use mingu_writer_lib::core::{
    config::{parse_log_level, IMAGE_HEIGHT_PX, IMAGE_WIDTH_PX, PAGE_MARGIN_TWIPS},
    errors::AppError,
    types::{EmbeddedImage, ReadImageResponse, SaveDocumentResponse, SourceDocument},
};

#[test]
fn embedded_image_uses_editor_field_names() {
    let image: EmbeddedImage = serde_json::from_value(serde_json::json!({
        "id": "img_1",
        "data": "AAAA",
        "path": "C:/pictures/chart.png"
    }))
    .expect("image record should deserialize");

    assert_eq!(image.base64_data, "AAAA");
    assert_eq!(image.source_path, "C:/pictures/chart.png");
    assert_eq!(
        serde_json::to_value(&image).expect("serialize"),
        serde_json::json!({"id": "img_1", "data": "AAAA", "path": "C:/pictures/chart.png"})
    );
}

#[test]
fn source_document_images_are_optional() {
    let source: SourceDocument =
        serde_json::from_value(serde_json::json!({"html": "<p>x</p>"})).expect("deserialize");
    assert_eq!(source.html, "<p>x</p>");
    assert!(source.images.is_empty());
}

#[test]
fn app_error_serializes_code_and_message() {
    let value = serde_json::to_value(AppError::ConversionFailed("zip fault".to_string()))
        .expect("serialize error");
    assert_eq!(value["code"], "CONVERSION_FAILED");
    assert_eq!(value["message"], "conversion failed: zip fault");
}

#[test]
fn app_error_codes_and_retry_policy() {
    let cases = [
        (AppError::InvalidInput("x".into()), "INVALID_INPUT", false),
        (AppError::NotFound("x".into()), "NOT_FOUND", false),
        (AppError::Io("x".into()), "IO_ERROR", true),
        (AppError::ConversionFailed("x".into()), "CONVERSION_FAILED", false),
        (AppError::Internal("x".into()), "INTERNAL_ERROR", false),
    ];
    for (err, code, retryable) in cases {
        assert_eq!(err.code(), code);
        assert_eq!(err.retryable(), retryable, "{code}");
    }
}

#[test]
fn io_not_found_maps_to_not_found() {
    let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert_eq!(err.code(), "NOT_FOUND");
    let err: AppError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no").into();
    assert_eq!(err.code(), "IO_ERROR");
}

#[test]
fn failure_signal_omits_absent_fields() {
    let saved = serde_json::to_value(SaveDocumentResponse::from_result(Ok(()))).expect("serialize");
    assert_eq!(saved, serde_json::json!({"success": true}));

    let failed = serde_json::to_value(ReadImageResponse::from_result(Err(AppError::NotFound(
        "image a.png".to_string(),
    ))))
    .expect("serialize");
    assert_eq!(
        failed,
        serde_json::json!({"success": false, "error": "not found: image a.png"})
    );
}

#[test]
fn log_level_parsing_defaults_to_info() {
    assert_eq!(parse_log_level("debug"), log::LevelFilter::Debug);
    assert_eq!(parse_log_level(" WARN "), log::LevelFilter::Warn);
    assert_eq!(parse_log_level("off"), log::LevelFilter::Off);
    assert_eq!(parse_log_level("verbose"), log::LevelFilter::Info);
}

#[test]
fn layout_constants_match_document_defaults() {
    assert_eq!(PAGE_MARGIN_TWIPS, 1440);
    assert_eq!((IMAGE_WIDTH_PX, IMAGE_HEIGHT_PX), (600, 400));
}
