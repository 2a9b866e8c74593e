pub mod builder;
pub mod html;
pub mod model;
pub mod packer;

pub use builder::build;
pub use packer::pack;

use crate::core::errors::AppResult;
use crate::core::types::{EmbeddedImage, SourceDocument};
use model::OutputDocument;

/// Builds the document model from editor HTML and packs it into `.docx` bytes.
pub fn generate_docx(source_html: &str, images: &[EmbeddedImage]) -> AppResult<Vec<u8>> {
    pack(&build(source_html, images))
}

impl SourceDocument {
    pub fn build(&self) -> OutputDocument {
        build(&self.html, &self.images)
    }

    pub fn to_docx(&self) -> AppResult<Vec<u8>> {
        pack(&self.build())
    }
}
