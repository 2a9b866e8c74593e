//! Static layout constants and environment-driven settings.

use log::LevelFilter;

/// One inch, in twentieths of a point.
pub const PAGE_MARGIN_TWIPS: i32 = 1440;

pub const IMAGE_WIDTH_PX: u32 = 600;
pub const IMAGE_HEIGHT_PX: u32 = 400;

/// `docx-rs` always writes a default abstract numbering and instance with id 1.
pub const ORDERED_NUMBERING_ID: usize = 2;
pub const BULLET_NUMBERING_ID: usize = 3;

pub const EMPTY_DOCUMENT_TEXT: &str = "Empty document";
pub const DEFAULT_DOCUMENT_PREFIX: &str = "Research_Paper";

pub const LOG_ENV: &str = "MINGU_LOG";

/// Paragraph spacing in twips, `(before, after)`.
pub mod spacing {
    pub const HEADING_1: (u32, u32) = (400, 200);
    pub const HEADING_2: (u32, u32) = (300, 200);
    pub const HEADING_3: (u32, u32) = (300, 200);
    pub const HEADING_4: (u32, u32) = (200, 200);
    pub const PARAGRAPH: (u32, u32) = (0, 200);
    pub const LIST_ITEM: (u32, u32) = (0, 100);
    pub const IMAGE: (u32, u32) = (200, 200);
}

pub fn parse_log_level(raw: &str) -> LevelFilter {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

pub fn log_level_from_env() -> LevelFilter {
    parse_log_level(&std::env::var(LOG_ENV).unwrap_or_else(|_| "info".to_string()))
}
