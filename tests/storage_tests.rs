use std::io::{Cursor, Read, Write};

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::NaiveDate;
use image::{ImageBuffer, Rgb, RgbImage};
use mingu_writer_lib::{
    core::types::{EmbeddedImage, ReadImageResponse, SaveDocumentResponse, SourceDocument},
    storage::{documents, images},
};
use tempfile::NamedTempFile;

fn encoded(format: image::ImageFormat) -> Vec<u8> {
    let mut img: RgbImage = ImageBuffer::new(10, 10);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let val = ((x + y) * 10) as u8;
        *pixel = Rgb([val, 100, 200 - val]);
    }
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), format)
        .expect("encode image");
    buffer
}

#[tokio::test]
async fn read_image_returns_base64_payload_and_source_path() {
    let png = encoded(image::ImageFormat::Png);
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(&png).expect("write png");

    let image = images::read_image(file.path()).await.expect("image should load");

    assert!(image.id.starts_with("img_"));
    assert_eq!(STANDARD.decode(&image.base64_data).expect("valid base64"), png);
    assert_eq!(image.source_path, file.path().to_string_lossy());
    assert!(images::data_uri(&image).starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn read_image_ids_are_unique() {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(&encoded(image::ImageFormat::Png)).expect("write png");

    let first = images::read_image(file.path()).await.expect("first read");
    let second = images::read_image(file.path()).await.expect("second read");
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn read_image_missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = images::read_image(&dir.path().join("missing.png"))
        .await
        .expect_err("missing file should fail");
    assert_eq!(err.code(), "NOT_FOUND");

    let response = ReadImageResponse::from_result(Err(err));
    assert!(!response.success);
    assert!(response.data.is_none());
    assert!(response.error.is_some());
}

#[tokio::test]
async fn read_image_rejects_empty_file() {
    let file = NamedTempFile::new().expect("temp file");
    let err = images::read_image(file.path())
        .await
        .expect_err("empty file should fail");
    assert_eq!(err.code(), "INVALID_INPUT");
}

#[test]
fn data_uri_uses_sniffed_mime_type() {
    let jpeg = EmbeddedImage {
        id: "img_jpeg".to_string(),
        base64_data: STANDARD.encode(encoded(image::ImageFormat::Jpeg)),
        source_path: "photo.jpg".to_string(),
    };
    assert!(images::data_uri(&jpeg).starts_with("data:image/jpeg;base64,"));

    let unknown = EmbeddedImage {
        id: "img_unknown".to_string(),
        base64_data: "AAAA".to_string(),
        source_path: "blob".to_string(),
    };
    assert_eq!(images::data_uri(&unknown), "data:image/png;base64,AAAA");
}

#[tokio::test]
async fn save_document_writes_bytes() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.docx");

    documents::save_document(&path, b"payload").await.expect("save");

    assert_eq!(std::fs::read(&path).expect("read back"), b"payload");
}

#[tokio::test]
async fn save_document_reports_failures_as_unsuccessful() {
    let empty = documents::save_document(std::path::Path::new(""), b"x").await;
    let err = empty.expect_err("empty path should fail");
    assert_eq!(err.code(), "INVALID_INPUT");

    let dir = tempfile::tempdir().expect("temp dir");
    let nested = dir.path().join("no-such-dir").join("out.docx");
    let response = SaveDocumentResponse::from_result(documents::save_document(&nested, b"x").await);
    assert!(!response.success);
    assert!(response.error.is_some());

    let ok = SaveDocumentResponse::from_result(Ok(()));
    assert_eq!(
        ok,
        SaveDocumentResponse {
            success: true,
            error: None,
        }
    );
}

#[tokio::test]
async fn export_document_writes_a_docx_package() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("paper.docx");
    let source = SourceDocument {
        html: "<h1>Paper</h1><p>Body <em>text</em></p><ol><li>point</li></ol>".to_string(),
        images: Vec::new(),
    };

    let written = documents::export_document(&path, source)
        .await
        .expect("export should succeed");

    let bytes = std::fs::read(&path).expect("read exported file");
    assert_eq!(bytes.len(), written);

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("docx is a zip");
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .expect("document part")
        .read_to_string(&mut xml)
        .expect("read document part");
    assert!(xml.contains("Paper"));
    assert!(xml.contains("point"));
}

#[test]
fn default_document_name_uses_iso_date() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date");
    assert_eq!(
        documents::default_document_name(date),
        "Research_Paper_2024-03-09.docx"
    );

    let today = documents::default_document_name_today();
    assert!(today.starts_with("Research_Paper_"));
    assert!(today.ends_with(".docx"));
}
