//! Extraction orchestration.
//!
//! Two extraction strategies sit behind one decision gate. The native path
//! reads positioned text blocks and orders them into reading order (or splits
//! each page into two columns); the optical path rasterizes pages and hands
//! them to a recognition engine. The gate is all-or-nothing: native text is
//! extracted first and, if its cumulative trimmed character count falls below
//! the configured threshold, the whole document is re-extracted optically.
//! There is never a per-page mix.

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::source::{DocumentSource, OcrEngine};

pub mod native;
pub mod optical;

pub use native::extract_native;
pub use optical::extract_optical;

/// One extracted document page.
#[derive(Debug, Clone)]
pub struct Page {
    /// 1-based page number
    pub index: usize,
    /// Extracted page text
    pub text: String,
}

impl Page {
    /// Create a page from a 1-based index and its text.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// Extract all pages, choosing between native text and optical recognition.
///
/// Strategy:
/// 1. With `force_ocr` set, recognize every page optically and return.
/// 2. Otherwise extract natively (block-ordered, or column-split when
///    `split_columns` is set).
/// 3. If the native text is not [usable](native_text_usable), discard it and
///    re-run the optical path for the entire document.
///
/// # Errors
///
/// Propagates any extraction failure; no partial page list is returned.
pub fn extract_pages(
    source: &mut dyn DocumentSource,
    ocr: &dyn OcrEngine,
    config: &AnalysisConfig,
) -> Result<Vec<Page>> {
    if config.force_ocr {
        log::debug!("optical extraction forced by configuration");
        return extract_optical(source, ocr, config);
    }

    let native = extract_native(source, config.split_columns)?;
    if native_text_usable(&native, config.min_native_chars) {
        return Ok(native);
    }

    log::info!(
        "native text below {} usable characters, re-extracting optically",
        config.min_native_chars
    );
    extract_optical(source, ocr, config)
}

/// Whether natively extracted text is substantial enough to keep.
///
/// Counts the characters of the page texts concatenated and trimmed at both
/// ends, and compares against `min_chars`.
pub fn native_text_usable(pages: &[Page], min_chars: usize) -> bool {
    let joined: String = pages.iter().map(|p| p.text.as_str()).collect();
    joined.trim().chars().count() >= min_chars
}
