//! Configuration for the analysis pipeline.
//!
//! Every threshold and cap the pipeline consumes lives here as a named field
//! rather than a hidden literal, so tests and hosts can vary them per
//! invocation without process-wide side effects.

/// Analysis pipeline configuration.
///
/// Defaults match the parameters the pipeline was tuned with: a 500-character
/// usability threshold for the native-text gate, a 4000-rank Zipf series with
/// the power-law fit restricted to ranks 1..=300, 23 length buckets, and
/// series caps sized for direct rendering.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Minimum total trimmed character count for native extraction to be
    /// considered usable. Below this, the whole document is re-extracted
    /// optically.
    pub min_native_chars: usize,

    /// Maximum rank kept in the rank-frequency series.
    pub max_rank: usize,

    /// Inclusive lower rank bound of the power-law fit range.
    pub fit_min_rank: usize,

    /// Inclusive upper rank bound of the power-law fit range.
    ///
    /// Restricting the fit to low ranks keeps the long frequency-1 tail from
    /// biasing the slope.
    pub fit_max_rank: usize,

    /// Longest word length bucketed by the length distribution. Longer words
    /// are excluded entirely, not clipped.
    pub max_word_len: usize,

    /// Maximum points in the returned rank-frequency series.
    pub max_zipf_points: usize,

    /// Maximum points in the returned length-distribution series.
    pub max_length_points: usize,

    /// Maximum points in the returned per-page token-count series.
    pub max_page_points: usize,

    /// Maximum number of sampled word-adjacency edges.
    pub max_adjacency_edges: usize,

    /// Skip native extraction and recognize every page optically.
    pub force_ocr: bool,

    /// Native two-column mode: each page is split at its horizontal midpoint
    /// and read left half first, then right half.
    pub split_columns: bool,

    /// Rasterization resolution for the optical path, in dots per inch.
    pub ocr_dpi: u32,

    /// Language hint passed to the optical recognition engine.
    pub ocr_language: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            min_native_chars: 500,
            max_rank: 4000,
            fit_min_rank: 1,
            fit_max_rank: 300,
            max_word_len: 23,
            max_zipf_points: 2500,
            max_length_points: 60,
            max_page_points: 300,
            max_adjacency_edges: 500,
            force_ocr: false,
            split_columns: false,
            ocr_dpi: 200,
            ocr_language: "spa".to_string(),
        }
    }

    /// Set the native-text usability threshold.
    pub fn with_min_native_chars(mut self, chars: usize) -> Self {
        self.min_native_chars = chars;
        self
    }

    /// Set the maximum rank of the Zipf series.
    pub fn with_max_rank(mut self, max_rank: usize) -> Self {
        self.max_rank = max_rank;
        self
    }

    /// Set the inclusive rank range used for the power-law fit.
    pub fn with_fit_range(mut self, min_rank: usize, max_rank: usize) -> Self {
        self.fit_min_rank = min_rank;
        self.fit_max_rank = max_rank;
        self
    }

    /// Set the longest bucketed word length.
    pub fn with_max_word_len(mut self, max_len: usize) -> Self {
        self.max_word_len = max_len;
        self
    }

    /// Set the point cap for the returned rank-frequency series.
    pub fn with_max_zipf_points(mut self, points: usize) -> Self {
        self.max_zipf_points = points;
        self
    }

    /// Set the point cap for the returned length-distribution series.
    pub fn with_max_length_points(mut self, points: usize) -> Self {
        self.max_length_points = points;
        self
    }

    /// Set the point cap for the returned per-page token-count series.
    pub fn with_max_page_points(mut self, points: usize) -> Self {
        self.max_page_points = points;
        self
    }

    /// Set the cap on sampled adjacency edges.
    pub fn with_max_adjacency_edges(mut self, edges: usize) -> Self {
        self.max_adjacency_edges = edges;
        self
    }

    /// Force optical recognition for every page.
    pub fn with_force_ocr(mut self, enable: bool) -> Self {
        self.force_ocr = enable;
        self
    }

    /// Enable the two-column native extraction mode.
    pub fn with_split_columns(mut self, enable: bool) -> Self {
        self.split_columns = enable;
        self
    }

    /// Set the rasterization resolution for the optical path.
    pub fn with_ocr_dpi(mut self, dpi: u32) -> Self {
        self.ocr_dpi = dpi;
        self
    }

    /// Set the language hint passed to the recognition engine.
    pub fn with_ocr_language(mut self, language: impl Into<String>) -> Self {
        self.ocr_language = language.into();
        self
    }
}
