/// One pass of a [1, 2, 1] / 4 low-pass filter over the interior values.
///
/// New values are computed from the unfiltered input before any are written
/// back. The first and last values never change.
pub fn low_pass(values: &mut [f64], scratch: &mut Vec<f64>) {
    let n = values.len();
    if n < 3 {
        return;
    }
    scratch.clear();
    scratch.extend(
        values
            .windows(3)
            .map(|w| (w[0] + w[1] * 2.0 + w[2]) / 4.0),
    );
    values[1..n - 1].copy_from_slice(scratch);
}

/// Apply `passes` low-pass passes in sequence.
pub fn smooth(values: &mut [f64], passes: usize) {
    let mut scratch = Vec::with_capacity(values.len().saturating_sub(2));
    for _ in 0..passes {
        low_pass(values, &mut scratch);
    }
}
