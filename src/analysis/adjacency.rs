//! Word-adjacency edge sampling.

/// Sample consecutive-word edges from a token sequence.
///
/// Produces `(token[i], token[i+1])` pairs in document order, truncated to
/// the first `max_edges`. Repeated pairs are kept: the sample is a
/// lightweight co-occurrence stream, not a deduplicated graph. Operates on
/// the tokenizer's normalized words.
pub fn adjacency_edges(tokens: &[String], max_edges: usize) -> Vec<(String, String)> {
    tokens
        .windows(2)
        .take(max_edges)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect()
}
