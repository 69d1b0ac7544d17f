//! The result bundle handed to callers.
//!
//! Everything here is plain serializable data: counts, bounded series, and
//! the two sentinel-bearing statistics. Numeric fields serialize losslessly;
//! the series are already downsampled to their configured caps, and the two
//! sentinels ([`FitResult::Undetermined`], [`Entropy::Undefined`]) serialize
//! as JSON `null`.

use serde::Serialize;

use crate::analysis::lengths::Entropy;
use crate::analysis::zipf::FitResult;

/// Document-level counts and the fit window used.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    /// Number of extracted pages
    pub pages: usize,
    /// Total token count across all pages
    pub tokens: usize,
    /// Number of distinct words
    pub vocab: usize,
    /// Inclusive lower rank bound of the power-law fit
    pub fit_min_rank: usize,
    /// Inclusive upper rank bound of the power-law fit
    pub fit_max_rank: usize,
}

/// The (possibly downsampled) rank-frequency series and its fitted slope.
#[derive(Debug, Clone, Serialize)]
pub struct ZipfSection {
    /// Ranks, ascending
    pub ranks: Vec<usize>,
    /// Frequency at each rank
    pub freqs: Vec<u64>,
    /// Power-law slope, or `null` when undetermined
    pub slope: FitResult,
}

/// The (possibly downsampled) word-length distribution and its entropy.
#[derive(Debug, Clone, Serialize)]
pub struct LengthSection {
    /// Word lengths, ascending from 1
    pub x: Vec<usize>,
    /// Aggregate frequency at each length
    pub freqs: Vec<u64>,
    /// Shannon entropy in nats, or `null` when the distribution is empty
    pub shannon_entropy_nats: Entropy,
}

/// The (possibly downsampled) per-page token-count series.
#[derive(Debug, Clone, Serialize)]
pub struct PageTokenSection {
    /// 1-based page numbers
    pub pages: Vec<usize>,
    /// Token count per page
    pub tokens: Vec<usize>,
}

/// Complete analysis result for one document.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Document-level counts and fit bounds
    pub meta: ReportMeta,
    /// Rank-frequency series and slope
    pub zipf: ZipfSection,
    /// Length distribution and entropy
    pub lengths: LengthSection,
    /// Per-page token counts
    pub page_tokens: PageTokenSection,
    /// Sampled consecutive-word edges, capped and in document order
    pub adjacency: Vec<(String, String)>,
}
