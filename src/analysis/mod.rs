//! Vocabulary statistics over extracted pages.
//!
//! The pipeline runs each stage to completion before the next: extraction,
//! tokenization, frequency aggregation, then the derived series (ranked
//! Zipf curve with its power-law fit, length distribution with entropy,
//! per-page token counts, adjacency sample) and finally downsampling for the
//! report. Every invocation works on its own state; nothing is shared across
//! analyses.

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::extract::{self, Page};
use crate::report::{AnalysisReport, LengthSection, PageTokenSection, ReportMeta, ZipfSection};
use crate::source::{DocumentSource, OcrEngine};

pub mod adjacency;
pub mod lengths;
pub mod series;
pub mod tokenize;
pub mod zipf;

pub use adjacency::adjacency_edges;
pub use lengths::{length_distribution, shannon_entropy, Entropy};
pub use series::downsample;
pub use tokenize::{frequency_table, tokenize};
pub use zipf::{fit_power_law, rank_frequency, FitResult, RankedWord};

/// Analyze a document end to end.
///
/// Extracts all pages (native with optical fallback, per `config`), then
/// computes the full set of vocabulary statistics and assembles the bounded,
/// serializable [`AnalysisReport`].
///
/// # Errors
///
/// Fails as a unit on any extraction error; no partial report is returned.
pub fn analyze(
    source: &mut dyn DocumentSource,
    ocr: &dyn OcrEngine,
    config: &AnalysisConfig,
) -> Result<AnalysisReport> {
    let pages = extract::extract_pages(source, ocr, config)?;
    Ok(analyze_pages(&pages, config))
}

/// Compute the statistics bundle for already-extracted pages.
///
/// Split out from [`analyze`] so the statistics layer can be exercised
/// without a document source.
pub fn analyze_pages(pages: &[Page], config: &AnalysisConfig) -> AnalysisReport {
    // Tokenize per page first: the page series needs per-page counts before
    // the token stream is flattened for the document-wide statistics.
    let page_token_lists: Vec<Vec<String>> = pages.iter().map(|p| tokenize(&p.text)).collect();
    let page_counts: Vec<(usize, usize)> = pages
        .iter()
        .zip(&page_token_lists)
        .map(|(page, tokens)| (page.index, tokens.len()))
        .collect();
    let tokens: Vec<String> = page_token_lists.into_iter().flatten().collect();

    let table = frequency_table(&tokens);
    let ranked = rank_frequency(&table, config.max_rank);
    let slope = fit_power_law(&ranked, config.fit_min_rank, config.fit_max_rank);

    let length_counts = length_distribution(&table, config.max_word_len);
    let entropy = shannon_entropy(&length_counts);

    let edges = adjacency_edges(&tokens, config.max_adjacency_edges);

    let meta = ReportMeta {
        pages: pages.len(),
        tokens: tokens.len(),
        vocab: table.len(),
        fit_min_rank: config.fit_min_rank,
        fit_max_rank: config.fit_max_rank,
    };

    let zipf_points: Vec<(usize, u64)> = ranked.iter().map(|e| (e.rank, e.count)).collect();
    let zipf_points = downsample(&zipf_points, config.max_zipf_points);

    let length_points: Vec<(usize, u64)> = length_counts
        .iter()
        .enumerate()
        .map(|(i, &count)| (i + 1, count))
        .collect();
    let length_points = downsample(&length_points, config.max_length_points);

    let page_points = downsample(&page_counts, config.max_page_points);

    if slope.is_undetermined() {
        log::debug!("power-law fit undetermined for {}-word vocabulary", meta.vocab);
    }

    AnalysisReport {
        meta,
        zipf: ZipfSection {
            ranks: zipf_points.iter().map(|&(r, _)| r).collect(),
            freqs: zipf_points.iter().map(|&(_, f)| f).collect(),
            slope,
        },
        lengths: LengthSection {
            x: length_points.iter().map(|&(l, _)| l).collect(),
            freqs: length_points.iter().map(|&(_, f)| f).collect(),
            shannon_entropy_nats: entropy,
        },
        page_tokens: PageTokenSection {
            pages: page_points.iter().map(|&(p, _)| p).collect(),
            tokens: page_points.iter().map(|&(_, c)| c).collect(),
        },
        adjacency: edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(index: usize, text: &str) -> Page {
        Page::new(index, text)
    }

    #[test]
    fn test_analyze_pages_reference_document() {
        let config = AnalysisConfig::new();
        let report = analyze_pages(&[page(1, "the cat sat on the mat the cat ran")], &config);

        assert_eq!(report.meta.pages, 1);
        assert_eq!(report.meta.tokens, 9);
        assert_eq!(report.meta.vocab, 6);
        assert_eq!(report.zipf.ranks, [1, 2, 3, 4, 5, 6]);
        assert_eq!(report.zipf.freqs, [3, 2, 1, 1, 1, 1]);
        assert!(report.zipf.slope.slope().is_some());
        assert_eq!(report.page_tokens.pages, [1]);
        assert_eq!(report.page_tokens.tokens, [9]);
    }

    #[test]
    fn test_analyze_pages_empty_document_uses_sentinels() {
        let config = AnalysisConfig::new();
        let report = analyze_pages(&[page(1, "1234 ...")], &config);

        assert_eq!(report.meta.tokens, 0);
        assert_eq!(report.meta.vocab, 0);
        assert!(report.zipf.ranks.is_empty());
        assert!(report.zipf.slope.is_undetermined());
        assert_eq!(report.lengths.shannon_entropy_nats, Entropy::Undefined);
        assert!(report.adjacency.is_empty());
    }

    #[test]
    fn test_analyze_pages_length_series_is_zero_filled() {
        let config = AnalysisConfig::new().with_max_word_len(5);
        let report = analyze_pages(&[page(1, "ab ab abcd")], &config);

        assert_eq!(report.lengths.x, [1, 2, 3, 4, 5]);
        assert_eq!(report.lengths.freqs, [0, 2, 0, 1, 0]);
    }

    #[test]
    fn test_analyze_pages_adjacency_spans_page_boundary() {
        let config = AnalysisConfig::new();
        let report = analyze_pages(&[page(1, "alpha beta"), page(2, "gamma")], &config);

        assert_eq!(report.adjacency.len(), 2);
        assert_eq!(
            report.adjacency[1],
            ("beta".to_string(), "gamma".to_string())
        );
    }

    #[test]
    fn test_analyze_pages_respects_series_caps() {
        let config = AnalysisConfig::new()
            .with_max_rank(100)
            .with_max_zipf_points(10)
            .with_max_adjacency_edges(3);
        let mut text = String::new();
        for a in 'a'..='z' {
            for b in 'a'..='z' {
                text.push(a);
                text.push(b);
                text.push(' ');
            }
        }
        let report = analyze_pages(&[page(1, &text)], &config);

        assert_eq!(report.meta.vocab, 676);
        assert_eq!(report.zipf.ranks.len(), 10); // 100 ranks, stride 10
        assert_eq!(report.adjacency.len(), 3);
    }
}
