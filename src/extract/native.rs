//! Native text extraction from positioned blocks.
//!
//! Reading order is recovered geometrically: blocks are sorted by top edge,
//! then left edge, which handles single-column layouts and keeps multi-column
//! pages readable without optical recognition. The column-split variant
//! partitions blocks at the page's horizontal midpoint and reads the left
//! half before the right half, for two-column layouts where the geometric
//! sort would interleave the columns line by line.

use crate::error::Result;
use crate::extract::Page;
use crate::source::{DocumentSource, TextBlock};
use crate::utils::safe_float_cmp;

/// Extract every page natively.
///
/// With `split_columns` set, each page is read as two half-width columns;
/// otherwise blocks are ordered top-to-bottom, left-to-right across the full
/// page width.
pub fn extract_native(source: &mut dyn DocumentSource, split_columns: bool) -> Result<Vec<Page>> {
    let mut pages = Vec::with_capacity(source.page_count());
    for index in 0..source.page_count() {
        let blocks = source.text_blocks(index)?;
        let text = if split_columns {
            let midpoint = source.page_width(index)? / 2.0;
            column_split_text(blocks, midpoint)
        } else {
            reading_order_text(blocks)
        };
        pages.push(Page::new(index + 1, text));
    }
    Ok(pages)
}

/// Order blocks top-to-bottom then left-to-right and join their text.
///
/// Block texts are trimmed and empty blocks dropped; the survivors are joined
/// with newlines as block boundaries.
fn reading_order_text(mut blocks: Vec<TextBlock>) -> String {
    blocks.sort_by(|a, b| {
        safe_float_cmp(a.bbox.top(), b.bbox.top())
            .then_with(|| safe_float_cmp(a.bbox.left(), b.bbox.left()))
    });
    blocks
        .iter()
        .map(|b| b.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read a page as two columns split at `midpoint`.
///
/// A block belongs to the left column when its center lies left of the
/// midpoint. Each column is ordered independently; the left column's text
/// comes first.
fn column_split_text(blocks: Vec<TextBlock>, midpoint: f32) -> String {
    let (left, right): (Vec<_>, Vec<_>) = blocks
        .into_iter()
        .partition(|b| b.bbox.center().x < midpoint);

    let halves = [reading_order_text(left), reading_order_text(right)];
    halves
        .iter()
        .map(|t| t.as_str())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
