//! Rank-frequency series and power-law slope estimation.

use std::collections::HashMap;

use serde::Serialize;

/// One entry of the rank-frequency series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    /// 1-based rank by descending frequency
    pub rank: usize,
    /// The word holding this rank
    pub word: String,
    /// Occurrence count of the word
    pub count: u64,
}

/// Outcome of the power-law fit.
///
/// A slope of zero and an undetermined fit are different results; conflating
/// them in a single float would make a flat distribution indistinguishable
/// from a degenerate fit range. Serializes as a number or JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FitResult {
    /// Least-squares slope of ln(frequency) against ln(rank)
    Slope(f64),
    /// Fewer than two eligible points, or zero variance in ln(rank)
    Undetermined,
}

impl FitResult {
    /// The fitted slope, if one was determined.
    pub fn slope(&self) -> Option<f64> {
        match self {
            FitResult::Slope(s) => Some(*s),
            FitResult::Undetermined => None,
        }
    }

    /// Whether the fit was degenerate.
    pub fn is_undetermined(&self) -> bool {
        matches!(self, FitResult::Undetermined)
    }
}

/// Build the rank-frequency series from a frequency table.
///
/// Entries are sorted by descending count with an ascending lexical tie-break
/// on the word, so equal-frequency words always rank in the same order no
/// matter how the table iterates. Ranks run 1..=k with
/// k = min(`max_rank`, vocabulary size).
pub fn rank_frequency(table: &HashMap<String, u64>, max_rank: usize) -> Vec<RankedWord> {
    let mut entries: Vec<(&str, u64)> = table.iter().map(|(w, &c)| (w.as_str(), c)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(max_rank);
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (word, count))| RankedWord {
            rank: i + 1,
            word: word.to_string(),
            count,
        })
        .collect()
}

/// Estimate the power-law slope over a sub-range of the series.
///
/// Ordinary least squares on (ln rank, ln frequency) over entries whose rank
/// lies in `[fit_min_rank, fit_max_rank]` and whose frequency is strictly
/// positive. The low-rank window keeps the long frequency-1 tail out of the
/// fit.
///
/// Returns [`FitResult::Undetermined`] when fewer than two eligible points
/// exist or all eligible ranks are equal.
pub fn fit_power_law(
    series: &[RankedWord],
    fit_min_rank: usize,
    fit_max_rank: usize,
) -> FitResult {
    let points: Vec<(f64, f64)> = series
        .iter()
        .filter(|e| e.rank >= fit_min_rank && e.rank <= fit_max_rank && e.count > 0)
        .map(|e| ((e.rank as f64).ln(), (e.count as f64).ln()))
        .collect();

    if points.len() < 2 {
        return FitResult::Undetermined;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let numerator: f64 = points
        .iter()
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let denominator: f64 = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();

    if denominator == 0.0 {
        return FitResult::Undetermined;
    }
    FitResult::Slope(numerator / denominator)
}
