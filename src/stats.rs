//! Latency statistics for the baseline harness.
//!
//! Percentiles use the nearest-rank method over a sorted sample set: no
//! interpolation, so every reported percentile is an actual measured value.
//! Statistics are deterministic for a given input sequence, which the golden
//! tests rely on.

use serde::Serialize;

/// Derived per-case latency and memory metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub p50_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub mean_ms: f64,
    pub throughput_per_s: f64,
    pub sample_count: usize,
    /// Peak resident set size in kilobytes. `None` when sampling failed or
    /// the accounting utility was unavailable.
    pub max_rss_kb: Option<u64>,
}

impl Metrics {
    /// Compute metrics from raw samples (milliseconds, invocation order).
    ///
    /// The input is sorted internally. An empty sample set yields all-zero
    /// statistics rather than an error.
    pub fn from_samples(samples: &[f64]) -> Self {
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let mean_ms = mean(&sorted);
        let throughput_per_s = if mean_ms > 0.0 { 1000.0 / mean_ms } else { 0.0 };

        Self {
            p50_ms: median(&sorted),
            p95_ms: percentile(&sorted, 95.0),
            p99_ms: percentile(&sorted, 99.0),
            mean_ms,
            throughput_per_s,
            sample_count: sorted.len(),
            max_rss_kb: None,
        }
    }
}

/// Nearest-rank percentile over an already-sorted slice.
///
/// Rank index is `round((p/100) * (n-1))` clamped into `[0, n-1]`. Empty
/// input returns `0.0`.
pub fn percentile(sorted: &[f64], pct: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let max_idx = sorted.len() - 1;
    let idx = ((pct / 100.0) * max_idx as f64).round() as usize;
    sorted[idx.min(max_idx)]
}

/// Conventional median of an already-sorted slice.
///
/// Even-length input averages the two middle elements. Empty input returns
/// `0.0`.
pub fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Arithmetic mean. Empty input returns `0.0`.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_of_empty_is_zero() {
        assert_eq!(percentile(&[], 0.0), 0.0);
        assert_eq!(percentile(&[], 50.0), 0.0);
        assert_eq!(percentile(&[], 100.0), 0.0);
    }

    #[test]
    fn percentile_endpoints_hit_first_and_last() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile(&sorted, 0.0), 1.0);
        assert_eq!(percentile(&sorted, 100.0), 5.0);
    }

    #[test]
    fn percentile_returns_an_element_of_the_input() {
        let sorted = [0.5, 1.5, 2.5, 9.0, 11.0, 40.0, 41.5];
        for pct in [0.0, 7.0, 25.0, 50.0, 66.0, 95.0, 99.0, 100.0] {
            let value = percentile(&sorted, pct);
            assert!(sorted.contains(&value), "p{pct} = {value} not in input");
        }
    }

    #[test]
    fn percentile_uses_nearest_rank_rounding() {
        let sorted = [10.0, 20.0, 30.0, 40.0];
        // (95/100) * 3 = 2.85 -> rounds to index 3.
        assert_eq!(percentile(&sorted, 95.0), 40.0);
        // (50/100) * 3 = 1.5 -> rounds to index 2 (round half away from zero).
        assert_eq!(percentile(&sorted, 50.0), 30.0);
    }

    #[test]
    fn median_of_odd_length_is_middle_element() {
        assert_eq!(median(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(median(&[7.0]), 7.0);
    }

    #[test]
    fn median_of_even_length_averages_middles() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median(&[2.0, 4.0]), 3.0);
    }

    #[test]
    fn p50_matches_median_for_odd_lengths() {
        // Nearest-rank p50 and the conventional median agree whenever the
        // sequence has a single middle element.
        let sorted = [0.25, 1.0, 2.0, 8.0, 64.0];
        assert_eq!(percentile(&sorted, 50.0), median(&sorted));
    }

    #[test]
    fn metrics_from_empty_samples_are_all_zero() {
        let metrics = Metrics::from_samples(&[]);
        assert_eq!(metrics.p50_ms, 0.0);
        assert_eq!(metrics.p95_ms, 0.0);
        assert_eq!(metrics.p99_ms, 0.0);
        assert_eq!(metrics.mean_ms, 0.0);
        assert_eq!(metrics.throughput_per_s, 0.0);
        assert_eq!(metrics.sample_count, 0);
        assert_eq!(metrics.max_rss_kb, None);
    }

    #[test]
    fn metrics_golden_values() {
        // Unsorted on purpose: from_samples must sort internally.
        let samples = [4.0, 1.0, 2.0, 3.0];
        let metrics = Metrics::from_samples(&samples);
        assert_eq!(metrics.p50_ms, 2.5);
        assert_eq!(metrics.p95_ms, 4.0);
        assert_eq!(metrics.p99_ms, 4.0);
        assert_eq!(metrics.mean_ms, 2.5);
        assert_eq!(metrics.throughput_per_s, 1000.0 / 2.5);
        assert_eq!(metrics.sample_count, 4);
    }

    #[test]
    fn throughput_is_exact_inverse_of_mean() {
        let metrics = Metrics::from_samples(&[2.0, 2.0, 2.0]);
        assert_eq!(metrics.throughput_per_s, 500.0);
    }

    #[test]
    fn metrics_are_deterministic() {
        let samples = [3.25, 0.125, 17.5, 4.0, 4.0, 1.0];
        assert_eq!(Metrics::from_samples(&samples), Metrics::from_samples(&samples));
    }
}
