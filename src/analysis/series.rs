//! Fixed-stride series downsampling.

/// Reduce a series to at most `max_points` points.
///
/// Series at or below the cap are returned unchanged. Larger series keep
/// every `stride`-th point starting from the first, where
/// `stride = max(1, n / max_points)`. Order is preserved, so an ascending
/// x-coordinate stays ascending.
///
/// This is a shape-preserving approximation for rendering, not a
/// statistically unbiased sample; downstream numeric analysis should use the
/// full series.
pub fn downsample<T: Clone>(points: &[T], max_points: usize) -> Vec<T> {
    if points.len() <= max_points {
        return points.to_vec();
    }
    if max_points == 0 {
        return Vec::new();
    }
    let stride = (points.len() / max_points).max(1);
    points.iter().step_by(stride).cloned().collect()
}
