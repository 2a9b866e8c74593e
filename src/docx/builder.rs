//! HTML fragment → [`OutputDocument`].
//!
//! Walks the fragment depth-first in document order. Headings, paragraphs,
//! lists and images map to blocks; any other element contributes nothing of
//! its own and is descended into. Nothing here fails: content that cannot be
//! mapped is logged and skipped.

use scraper::{ElementRef, Node};

use crate::core::types::EmbeddedImage;
use crate::docx::html::{self, InlineStyle, TagKind};
use crate::docx::model::{BlockElement, InlineRun, ListKind, OutputDocument};

pub fn build(source_html: &str, images: &[EmbeddedImage]) -> OutputDocument {
    let fragment = html::parse_fragment(source_html);
    let mut blocks: Vec<BlockElement> = Vec::new();
    walk_children(fragment.root_element(), &mut blocks);

    log::debug!(
        "built {} block(s) from {} byte(s) of html ({} embedded image record(s))",
        blocks.len(),
        source_html.len(),
        images.len()
    );

    OutputDocument::new(blocks)
}

fn walk_children(parent: ElementRef<'_>, blocks: &mut Vec<BlockElement>) {
    for child in parent.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    blocks.push(BlockElement::paragraph(vec![InlineRun::plain(trimmed)]));
                }
            }
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    walk_element(element, blocks);
                }
            }
            _ => {}
        }
    }
}

fn walk_element(element: ElementRef<'_>, blocks: &mut Vec<BlockElement>) {
    match TagKind::classify(html::tag_name(&element)) {
        TagKind::Heading(level) => blocks.push(BlockElement::Heading {
            level,
            text: html::text_content(&element),
        }),
        TagKind::Paragraph => {
            if let Some(runs) = paragraph_runs(element) {
                blocks.push(BlockElement::paragraph(runs));
            }
        }
        TagKind::List(kind) => push_list_items(element, kind, blocks),
        TagKind::Image => push_image(element, blocks),
        TagKind::Container => walk_children(element, blocks),
    }
}

/// Runs for a `<p>`, or `None` when it has neither runs nor visible text.
fn paragraph_runs(element: ElementRef<'_>) -> Option<Vec<InlineRun>> {
    let runs = inline_runs(element);
    if !runs.is_empty() {
        return Some(runs);
    }
    let text = html::text_content(&element);
    if text.trim().is_empty() {
        None
    } else {
        Some(vec![InlineRun::plain(text)])
    }
}

fn push_list_items(list: ElementRef<'_>, kind: ListKind, blocks: &mut Vec<BlockElement>) {
    for item in list
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| html::tag_name(child).eq_ignore_ascii_case("li"))
    {
        let mut runs = inline_runs(item);
        if runs.is_empty() {
            runs.push(InlineRun::plain(html::text_content(&item)));
        }
        blocks.push(BlockElement::ListItem { kind, runs });
    }
}

fn push_image(element: ElementRef<'_>, blocks: &mut Vec<BlockElement>) {
    let Some(src) = element.value().attr("src") else {
        log::debug!("skipping <img> without src");
        return;
    };
    match html::decode_image_src(src) {
        Ok(data) => blocks.push(BlockElement::image(data)),
        Err(html::DataUriError::NotDataUri) => {
            log::debug!("skipping <img> with non data URI source");
        }
        Err(err) => log::warn!("skipping <img>: {err}"),
    }
}

/// One run per direct child. Only the child's own tag decides its style;
/// formatting nested deeper is flattened into the text.
fn inline_runs(container: ElementRef<'_>) -> Vec<InlineRun> {
    let mut runs = Vec::new();
    for child in container.children() {
        match child.value() {
            Node::Text(text) => {
                if !text.is_empty() {
                    runs.push(InlineRun::plain(&**text));
                }
            }
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    let style = InlineStyle::from_tag(html::tag_name(&element));
                    runs.push(style.run(html::text_content(&element)));
                }
            }
            _ => {}
        }
    }
    runs
}
