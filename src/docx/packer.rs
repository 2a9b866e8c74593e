//! [`OutputDocument`] → `.docx` bytes via `docx-rs`.

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText, LineSpacing,
    NumberFormat, Numbering, NumberingId, PageMargin, Paragraph, Pic, Run, SpecialIndentType,
    Start, Style, StyleType,
};

use crate::core::config::{spacing, BULLET_NUMBERING_ID};
use crate::core::errors::{AppError, AppResult};
use crate::docx::model::{
    Alignment, BlockElement, InlineRun, ListKind, NumberingDefinition, OutputDocument, PageMargins,
};

const LIST_INDENT: i32 = 720;
const LIST_HANGING: i32 = 360;

/// Heading style ids with display name and size in half-points.
const HEADING_STYLES: [(&str, &str, usize); 4] = [
    ("Heading1", "Heading 1", 32),
    ("Heading2", "Heading 2", 28),
    ("Heading3", "Heading 3", 26),
    ("Heading4", "Heading 4", 24),
];

pub fn pack(document: &OutputDocument) -> AppResult<Vec<u8>> {
    let mut docx = Docx::new().page_margin(page_margin(&document.margins));
    docx = add_heading_styles(docx);
    docx = add_numbering(docx, &document.numbering);

    for block in &document.blocks {
        docx = docx.add_paragraph(block_paragraph(block, &document.numbering));
    }

    let mut buffer = Vec::new();
    docx.build()
        .pack(&mut Cursor::new(&mut buffer))
        .map_err(|err| AppError::ConversionFailed(format!("failed to pack DOCX: {err}")))?;

    log::debug!(
        "packed {} block(s) into {} byte(s)",
        document.blocks.len(),
        buffer.len()
    );
    Ok(buffer)
}

fn page_margin(margins: &PageMargins) -> PageMargin {
    PageMargin::new()
        .top(margins.top)
        .right(margins.right)
        .bottom(margins.bottom)
        .left(margins.left)
}

fn add_heading_styles(mut docx: Docx) -> Docx {
    for (id, name, size) in HEADING_STYLES {
        docx = docx.add_style(
            Style::new(id, StyleType::Paragraph)
                .name(name)
                .size(size)
                .bold(),
        );
    }
    docx
}

fn list_level(format: &str, text: &str, alignment: Alignment) -> Level {
    Level::new(
        0,
        Start::new(1),
        NumberFormat::new(format),
        LevelText::new(text),
        LevelJc::new(jc(alignment)),
    )
    .indent(
        Some(LIST_INDENT),
        Some(SpecialIndentType::Hanging(LIST_HANGING)),
        None,
        None,
    )
}

fn add_numbering(docx: Docx, numbering: &NumberingDefinition) -> Docx {
    let ordered = AbstractNumbering::new(numbering.id).add_level(list_level(
        &numbering.format,
        &numbering.pattern,
        numbering.alignment,
    ));
    let bullet = AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(list_level(
        "bullet",
        "\u{2022}",
        Alignment::Left,
    ));

    docx.add_abstract_numbering(ordered)
        .add_numbering(Numbering::new(numbering.id, numbering.id))
        .add_abstract_numbering(bullet)
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID))
}

fn block_paragraph(block: &BlockElement, numbering: &NumberingDefinition) -> Paragraph {
    match block {
        BlockElement::Heading { level, text } => {
            let (style, spacing) = heading_style(*level);
            Paragraph::new()
                .style(style)
                .line_spacing(line_spacing(spacing))
                .add_run(Run::new().add_text(text))
        }
        BlockElement::Paragraph { runs } => {
            add_runs(Paragraph::new(), runs).line_spacing(line_spacing(spacing::PARAGRAPH))
        }
        BlockElement::ListItem { kind, runs } => {
            let id = match kind {
                ListKind::Ordered => numbering.id,
                ListKind::Unordered => BULLET_NUMBERING_ID,
            };
            add_runs(Paragraph::new(), runs)
                .numbering(NumberingId::new(id), IndentLevel::new(0))
                .line_spacing(line_spacing(spacing::LIST_ITEM))
        }
        BlockElement::Image {
            data,
            width,
            height,
            alignment,
        } => {
            let pic = Pic::new_with_dimensions(normalize_image(data), *width, *height);
            Paragraph::new()
                .add_run(Run::new().add_image(pic))
                .align(alignment_type(*alignment))
                .line_spacing(line_spacing(spacing::IMAGE))
        }
    }
}

fn heading_style(level: u8) -> (&'static str, (u32, u32)) {
    match level {
        1 => (HEADING_STYLES[0].0, spacing::HEADING_1),
        2 => (HEADING_STYLES[1].0, spacing::HEADING_2),
        3 => (HEADING_STYLES[2].0, spacing::HEADING_3),
        _ => (HEADING_STYLES[3].0, spacing::HEADING_4),
    }
}

fn add_runs(mut paragraph: Paragraph, runs: &[InlineRun]) -> Paragraph {
    for run in runs {
        paragraph = paragraph.add_run(styled_run(run));
    }
    paragraph
}

fn styled_run(inline: &InlineRun) -> Run {
    let mut run = Run::new().add_text(&inline.text);
    if inline.bold {
        run = run.bold();
    }
    if inline.italic {
        run = run.italic();
    }
    if inline.underline {
        run = run.underline("single");
    }
    if inline.strikethrough {
        run = run.strike();
    }
    run
}

fn line_spacing((before, after): (u32, u32)) -> LineSpacing {
    let spacing = LineSpacing::new().after(after);
    if before > 0 {
        spacing.before(before)
    } else {
        spacing
    }
}

fn jc(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
    }
}

fn alignment_type(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
    }
}

/// Media parts are always written as PNG; re-encode anything else the
/// `image` crate can read. Undecodable bytes are embedded unchanged.
fn normalize_image(data: &[u8]) -> Vec<u8> {
    match image::guess_format(data) {
        Ok(image::ImageFormat::Png) => return data.to_vec(),
        Ok(_) => {}
        Err(err) => {
            log::warn!("embedding image of unknown format as-is: {err}");
            return data.to_vec();
        }
    }
    match image::load_from_memory(data) {
        Ok(img) => {
            let mut buffer = Vec::new();
            match img.write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png) {
                Ok(()) => buffer,
                Err(err) => {
                    log::warn!("PNG re-encoding failed, embedding original bytes: {err}");
                    data.to_vec()
                }
            }
        }
        Err(err) => {
            log::warn!("image decode failed, embedding original bytes: {err}");
            data.to_vec()
        }
    }
}
