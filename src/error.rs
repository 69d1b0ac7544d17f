//! Error types for the analysis pipeline.
//!
//! Extraction and recognition failures are terminal for the document being
//! analyzed: nothing is retried and no partial results are returned. The two
//! degenerate statistical outcomes (an undetermined power-law fit, an
//! undefined entropy) are *not* errors; they are sentinel variants on
//! [`crate::analysis::zipf::FitResult`] and
//! [`crate::analysis::lengths::Entropy`].

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting and analyzing a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No document was supplied at the boundary; no extraction is attempted.
    #[error("No document input provided")]
    MissingInput,

    /// The document could not be opened (corrupt or unsupported format).
    #[error("Failed to open document: {0}")]
    Open(String),

    /// A page could not be read or rasterized.
    #[error("Failed to render page {page}: {reason}")]
    PageRender {
        /// 1-based page number
        page: usize,
        /// Reason for the failure
        reason: String,
    },

    /// The optical recognition engine failed outright.
    ///
    /// An engine returning an empty string for a blank or unreadable page is
    /// success, not this error.
    #[error("Optical recognition failed: {0}")]
    Ocr(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_message() {
        let err = Error::Open("not a PDF".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Failed to open document"));
        assert!(msg.contains("not a PDF"));
    }

    #[test]
    fn test_page_render_error_message() {
        let err = Error::PageRender {
            page: 3,
            reason: "bitmap allocation failed".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("page 3"));
        assert!(msg.contains("bitmap allocation failed"));
    }

    #[test]
    fn test_missing_input_message() {
        let msg = format!("{}", Error::MissingInput);
        assert!(msg.contains("No document input"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
