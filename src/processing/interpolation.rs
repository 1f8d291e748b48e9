//! Lookups into an ascending time axis.
//!
//! Both searches use `partition_point`, so the probe never leaves
//! `[0, len - 1]` even when the query lands on or past the last sample.

/// Value at time `t`, linearly interpolated between the bracketing samples.
///
/// Exact hits return the stored value. Queries before the first or after the
/// last sample return the boundary value. `None` only for empty input.
pub fn value_at(x: &[f64], y: &[f64], t: f64) -> Option<f64> {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len().min(y.len());
    if n == 0 {
        return None;
    }
    if t.is_nan() || t <= x[0] {
        return Some(y[0]);
    }
    if t >= x[n - 1] {
        return Some(y[n - 1]);
    }

    // First index strictly after t; x[0] < t < x[n - 1] keeps it in 1..n.
    let hi = x[..n].partition_point(|&v| v <= t);
    let lo = hi - 1;
    if x[lo] == t {
        return Some(y[lo]);
    }

    let fraction = (t - x[lo]) / (x[hi] - x[lo]);
    Some(y[lo] + fraction * (y[hi] - y[lo]))
}

/// Index of the last sample at or before `t`, or 0 when `t` precedes the
/// series (or the series is empty).
pub fn index_at(x: &[f64], t: f64) -> usize {
    if t.is_nan() {
        return 0;
    }
    x.partition_point(|&v| v <= t).saturating_sub(1)
}
