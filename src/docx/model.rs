//! In-memory document model handed from the builder to the packer.

use crate::core::config::{
    EMPTY_DOCUMENT_TEXT, IMAGE_HEIGHT_PX, IMAGE_WIDTH_PX, ORDERED_NUMBERING_ID, PAGE_MARGIN_TWIPS,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl InlineRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockElement {
    /// `level` is always within `1..=4`.
    Heading { level: u8, text: String },
    Paragraph { runs: Vec<InlineRun> },
    ListItem { kind: ListKind, runs: Vec<InlineRun> },
    Image {
        data: Vec<u8>,
        width: u32,
        height: u32,
        alignment: Alignment,
    },
}

impl BlockElement {
    pub fn paragraph(runs: Vec<InlineRun>) -> Self {
        Self::Paragraph { runs }
    }

    pub fn image(data: Vec<u8>) -> Self {
        Self::Image {
            data,
            width: IMAGE_WIDTH_PX,
            height: IMAGE_HEIGHT_PX,
            alignment: Alignment::Center,
        }
    }

    pub fn placeholder() -> Self {
        Self::paragraph(vec![InlineRun::plain(EMPTY_DOCUMENT_TEXT)])
    }
}

/// Page margins in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMargins {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            top: PAGE_MARGIN_TWIPS,
            right: PAGE_MARGIN_TWIPS,
            bottom: PAGE_MARGIN_TWIPS,
            left: PAGE_MARGIN_TWIPS,
        }
    }
}

/// Single-level numbering used by ordered list items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingDefinition {
    pub id: usize,
    pub format: String,
    pub pattern: String,
    pub alignment: Alignment,
}

impl Default for NumberingDefinition {
    fn default() -> Self {
        Self {
            id: ORDERED_NUMBERING_ID,
            format: "decimal".to_string(),
            pattern: "%1.".to_string(),
            alignment: Alignment::Left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    pub blocks: Vec<BlockElement>,
    pub margins: PageMargins,
    pub numbering: NumberingDefinition,
}

impl OutputDocument {
    /// Wraps `blocks`, substituting the placeholder paragraph when there are none.
    pub fn new(mut blocks: Vec<BlockElement>) -> Self {
        if blocks.is_empty() {
            blocks.push(BlockElement::placeholder());
        }
        Self {
            blocks,
            margins: PageMargins::default(),
            numbering: NumberingDefinition::default(),
        }
    }
}
