//! Word-length distribution and Shannon entropy.

use std::collections::HashMap;

use serde::Serialize;

/// Shannon entropy of the length distribution, in nats.
///
/// An empty distribution has no entropy rather than zero entropy; the two
/// must stay distinguishable. Serializes as a number or JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entropy {
    /// −Σ p·ln(p) over the non-zero buckets
    Nats(f64),
    /// The distribution's total count is zero
    Undefined,
}

impl Entropy {
    /// The entropy value, if defined.
    pub fn nats(&self) -> Option<f64> {
        match self {
            Entropy::Nats(h) => Some(*h),
            Entropy::Undefined => None,
        }
    }
}

/// Aggregate word frequencies into buckets by word length.
///
/// Returns `max_len` buckets where bucket `i` holds the total frequency of
/// words of length `i + 1`. Lengths with no words stay zero; words longer
/// than `max_len` are excluded entirely, not clipped into the last bucket.
pub fn length_distribution(table: &HashMap<String, u64>, max_len: usize) -> Vec<u64> {
    let mut buckets = vec![0u64; max_len];
    for (word, &count) in table {
        let len = word.chars().count();
        if (1..=max_len).contains(&len) {
            buckets[len - 1] += count;
        }
    }
    buckets
}

/// Shannon entropy of a bucket distribution, in nats.
///
/// H = −Σ p_i·ln(p_i) over buckets with non-zero count, with
/// p_i = count_i / total. Returns [`Entropy::Undefined`] when the total is
/// zero.
pub fn shannon_entropy(counts: &[u64]) -> Entropy {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return Entropy::Undefined;
    }

    let total = total as f64;
    let mut h = 0.0;
    for &count in counts {
        if count > 0 {
            let p = count as f64 / total;
            h -= p * p.ln();
        }
    }
    Entropy::Nats(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, u64)]) -> HashMap<String, u64> {
        entries.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn test_buckets_are_zero_filled() {
        let dist = length_distribution(&table(&[("a", 2), ("abc", 1)]), 5);
        assert_eq!(dist, [2, 0, 1, 0, 0]);
    }

    #[test]
    fn test_overlong_words_are_excluded_not_clipped() {
        let dist = length_distribution(&table(&[("abcdef", 10), ("ab", 1)]), 3);
        assert_eq!(dist, [0, 1, 0]);
    }

    #[test]
    fn test_accented_word_length_counts_characters() {
        // "ñandú" is 5 characters even though it is more than 5 bytes
        let dist = length_distribution(&table(&[("ñandú", 1)]), 10);
        assert_eq!(dist[4], 1);
    }

    #[test]
    fn test_entropy_undefined_for_empty_distribution() {
        assert_eq!(shannon_entropy(&[]), Entropy::Undefined);
        assert_eq!(shannon_entropy(&[0, 0, 0]), Entropy::Undefined);
    }

    #[test]
    fn test_entropy_zero_for_single_bucket() {
        let h = shannon_entropy(&[0, 7, 0]).nats().unwrap();
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_entropy_uniform_distribution_is_ln_k() {
        let h = shannon_entropy(&[5, 5, 5, 5]).nats().unwrap();
        assert!((h - 4.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_bounds() {
        // 0 <= H <= ln(k) for k non-zero buckets
        let counts = [1, 2, 3, 0, 10];
        let h = shannon_entropy(&counts).nats().unwrap();
        let k = counts.iter().filter(|&&c| c > 0).count() as f64;
        assert!(h >= 0.0);
        assert!(h <= k.ln() + 1e-12);
    }

    #[test]
    fn test_entropy_serializes_as_number_or_null() {
        let defined = serde_json::to_value(Entropy::Nats(1.5)).unwrap();
        assert_eq!(defined, serde_json::json!(1.5));
        let undefined = serde_json::to_value(Entropy::Undefined).unwrap();
        assert!(undefined.is_null());
    }
}
