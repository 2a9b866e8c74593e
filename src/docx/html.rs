//! HTML helpers for the document builder: tag classification, text
//! flattening and data-URI decoding.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use scraper::{ElementRef, Html};
use thiserror::Error;

use crate::docx::model::{InlineRun, ListKind};

/// Editors occasionally drop padding or wrap long payloads; accept both.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Block-level role of an element during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Heading(u8),
    Paragraph,
    List(ListKind),
    Image,
    /// Anything else: no block of its own, children are walked.
    Container,
}

impl TagKind {
    pub fn classify(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "p" => Self::Paragraph,
            "ul" => Self::List(ListKind::Unordered),
            "ol" => Self::List(ListKind::Ordered),
            "img" => Self::Image,
            _ => Self::Container,
        }
    }
}

/// Style carried by an inline element's own tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Plain,
}

impl InlineStyle {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "strong" | "b" => Self::Bold,
            "em" | "i" => Self::Italic,
            "u" => Self::Underline,
            "s" | "strike" => Self::Strikethrough,
            _ => Self::Plain,
        }
    }

    pub fn run(self, text: impl Into<String>) -> InlineRun {
        let mut run = InlineRun::plain(text);
        match self {
            Self::Bold => run.bold = true,
            Self::Italic => run.italic = true,
            Self::Underline => run.underline = true,
            Self::Strikethrough => run.strikethrough = true,
            Self::Plain => {}
        }
        run
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataUriError {
    #[error("source is not an image data URI")]
    NotDataUri,
    #[error("data URI has no payload")]
    MissingPayload,
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

pub fn parse_fragment(source_html: &str) -> Html {
    Html::parse_fragment(source_html)
}

pub fn tag_name<'a>(element: &ElementRef<'a>) -> &'a str {
    element.value().name()
}

/// Concatenated text of every descendant text node, untrimmed.
pub fn text_content(element: &ElementRef<'_>) -> String {
    element.text().collect()
}

/// Decodes the payload of a `data:image/...` URI.
pub fn decode_image_src(src: &str) -> Result<Vec<u8>, DataUriError> {
    let src = src.trim();
    if !src.starts_with("data:image") {
        return Err(DataUriError::NotDataUri);
    }
    let (_, payload) = src.split_once(',').ok_or(DataUriError::MissingPayload)?;
    let payload: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if payload.is_empty() {
        return Err(DataUriError::MissingPayload);
    }
    Ok(LENIENT_BASE64.decode(payload)?)
}
