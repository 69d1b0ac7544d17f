//! # PDF Lexstat
//!
//! Vocabulary statistics for page-structured documents.
//!
//! The crate ingests a PDF through a [`source::DocumentSource`], extracts its
//! text natively (layout-aware block ordering, optional two-column split) and
//! falls back to optical recognition for the whole document when the native
//! text is too sparse to be usable. From the extracted pages it computes:
//!
//! - a rank-frequency (Zipf) series with a least-squares power-law slope
//!   estimated over a configurable low-rank window,
//! - a word-length distribution and its Shannon entropy in nats,
//! - a per-page token-count series,
//! - a bounded sample of consecutive word-adjacency edges.
//!
//! All series are reduced to a bounded point count before they are handed to
//! the caller, so the report is safe to serialize and render as-is.
//!
//! ## Quick start
//!
//! ```ignore
//! use pdf_lexstat::{analyze, AnalysisConfig};
//! use pdf_lexstat::source::pdfium::PdfiumSource;
//!
//! # fn main() -> pdf_lexstat::Result<()> {
//! let mut source = PdfiumSource::open("paper.pdf")?;
//! let report = analyze(&mut source, &my_ocr_engine, &AnalysisConfig::default())?;
//! println!("{}", serde_json::to_string_pretty(&report).unwrap());
//! # Ok(())
//! # }
//! ```
//!
//! The extraction collaborators are abstract: any type implementing
//! [`source::DocumentSource`] (page iteration, positioned text blocks, page
//! rasterization) and [`source::OcrEngine`] (image plus language hint to
//! plain text) plugs into the pipeline. A PDFium-backed source ships behind
//! the `pdfium` feature.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Pipeline configuration
pub mod config;

// Geometric primitives for block ordering
pub mod geometry;

// Document and OCR collaborator contracts
pub mod source;

// Extraction orchestration (native, column-split, optical fallback)
pub mod extract;

// Vocabulary statistics
pub mod analysis;

// Result bundle handed to callers
pub mod report;

// Re-exports
pub use analysis::analyze;
pub use config::AnalysisConfig;
pub use error::{Error, Result};
pub use extract::Page;
pub use report::AnalysisReport;
pub use source::{DocumentSource, OcrEngine, TextBlock};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all
    /// other values, so sorting never panics on a malformed bounding box.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                // Both are normal numbers, safe to unwrap
                a.partial_cmp(&b).unwrap()
            },
        }
    }

}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "pdf_lexstat");
    }
}
