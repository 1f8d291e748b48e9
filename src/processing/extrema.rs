/// Smallest and largest finite value of a slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min: f64,
    pub max: f64,
}

impl Extrema {
    /// Compute extrema, skipping NaN and infinities. `None` when nothing
    /// finite remains.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values.iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_finite() && max.is_finite() {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Both bounds multiplied by `factor`.
    ///
    /// The scaling is signed: a negative minimum moves further down while a
    /// positive minimum moves up towards zero.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            min: self.min * factor,
            max: self.max * factor,
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
