//! Optical extraction: rasterize pages and recognize them.

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::extract::Page;
use crate::source::{DocumentSource, OcrEngine};

/// Recognize every page of the document optically.
///
/// Each page is rasterized at `config.ocr_dpi` and passed to the engine with
/// the configured language hint. An engine returning an empty string for a
/// page is accepted as-is.
///
/// # Errors
///
/// Propagates rasterization and engine failures; no partial page list is
/// returned.
pub fn extract_optical(
    source: &mut dyn DocumentSource,
    ocr: &dyn OcrEngine,
    config: &AnalysisConfig,
) -> Result<Vec<Page>> {
    let mut pages = Vec::with_capacity(source.page_count());
    for index in 0..source.page_count() {
        let image = source.render_page(index, config.ocr_dpi)?;
        let text = ocr.recognize(&image, &config.ocr_language)?;
        if text.trim().is_empty() {
            log::debug!("page {} produced no recognized text", index + 1);
        }
        pages.push(Page::new(index + 1, text));
    }
    Ok(pages)
}
