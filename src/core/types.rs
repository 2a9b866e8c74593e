use serde::{Deserialize, Serialize};

use crate::core::errors::AppResult;

/// Image metadata the editor keeps alongside its HTML. The HTML itself carries
/// the image as a data URI, so conversion never needs this list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub id: String,
    #[serde(rename = "data")]
    pub base64_data: String,
    #[serde(rename = "path")]
    pub source_path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
    pub html: String,
    #[serde(default)]
    pub images: Vec<EmbeddedImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReadImageResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReadImageResponse {
    pub fn from_result(result: AppResult<EmbeddedImage>) -> Self {
        match result {
            Ok(image) => Self {
                success: true,
                id: Some(image.id),
                data: Some(image.base64_data),
                path: Some(image.source_path),
                error: None,
            },
            Err(err) => Self {
                success: false,
                id: None,
                data: None,
                path: None,
                error: Some(err.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SaveDocumentResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SaveDocumentResponse {
    pub fn from_result(result: AppResult<()>) -> Self {
        match result {
            Ok(()) => Self {
                success: true,
                error: None,
            },
            Err(err) => Self {
                success: false,
                error: Some(err.to_string()),
            },
        }
    }
}
