//! Contracts for the extraction collaborators.
//!
//! The pipeline treats the document reader and the optical recognition
//! engine as black boxes behind two traits. A [`DocumentSource`] yields
//! positioned text blocks for the native path and rasterized pages for the
//! optical path; an [`OcrEngine`] turns a page raster into plain text.
//!
//! Implementations own the underlying handles and must release them on every
//! exit path (normally via `Drop`), so repeated analyses never leak file
//! handles even when extraction fails partway through a page.

use crate::error::Result;
use crate::geometry::Rect;
use image::DynamicImage;

#[cfg(feature = "pdfium")]
#[cfg_attr(docsrs, doc(cfg(feature = "pdfium")))]
pub mod pdfium;

/// A positioned run of text on a page.
///
/// Blocks are the unit of native extraction: the orchestrator orders them by
/// vertical then horizontal position to recover reading order, so the bounding
/// box must be in top-down page coordinates.
#[derive(Debug, Clone)]
pub struct TextBlock {
    /// The block's text content
    pub text: String,
    /// Bounding box in top-down page coordinates
    pub bbox: Rect,
}

impl TextBlock {
    /// Create a new text block.
    pub fn new(text: impl Into<String>, bbox: Rect) -> Self {
        Self {
            text: text.into(),
            bbox,
        }
    }
}

/// A readable page-structured document.
///
/// The pipeline requires only page iteration plus, per page, either
/// positioned text blocks (native extraction) or a raster image at a given
/// resolution (optical extraction). Page indices are 0-based here; the
/// extraction layer converts to the 1-based numbering reported to callers.
pub trait DocumentSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Width of a page in document units, used for the column-split midpoint.
    fn page_width(&self, index: usize) -> Result<f32>;

    /// Ordered text blocks of a page with their bounding boxes.
    ///
    /// Block order as returned is not significant; the extraction layer
    /// re-sorts into reading order.
    fn text_blocks(&mut self, index: usize) -> Result<Vec<TextBlock>>;

    /// Rasterize a page at the given resolution.
    fn render_page(&mut self, index: usize, dpi: u32) -> Result<DynamicImage>;
}

/// An optical character recognition engine.
pub trait OcrEngine {
    /// Recognize text in a page raster.
    ///
    /// `language` is a hint in the engine's own notation (e.g. `"spa"`).
    /// Returning an empty string for a blank or unreadable image is success,
    /// not an error.
    fn recognize(&self, image: &DynamicImage, language: &str) -> Result<String>;
}
