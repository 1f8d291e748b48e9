use std::ops::Range;

use serde::Serialize;

use crate::data::datetime::seconds_between;
use crate::data::sample::RawSample;
use crate::data::units::{DisplayMode, UnitSystem};
use crate::error::{GraphError, Result};
use crate::processing::extrema::Extrema;
use crate::processing::{interpolation, smoothing};

/// Parallel time/value arrays for one plotted metric.
///
/// `x` holds seconds since the first sample and never decreases. The arrays
/// always have equal length; an empty series is valid and inert.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
    mode: DisplayMode,
    units: UnitSystem,
}

impl Series {
    /// Derive one value per sample for `mode` in `units`, then smooth the
    /// values with `smoothing_passes` low-pass passes.
    ///
    /// Samples must be in time order; a sample stamped before its
    /// predecessor is rejected.
    pub fn build(
        samples: &[RawSample],
        mode: DisplayMode,
        units: UnitSystem,
        smoothing_passes: usize,
    ) -> Result<Self> {
        let Some(first) = samples.first() else {
            return Ok(Self {
                mode,
                units,
                ..Default::default()
            });
        };

        if let Some(index) = samples.windows(2).position(|w| w[1].time < w[0].time) {
            tracing::warn!("Rejecting record set: sample {} goes back in time", index + 1);
            return Err(GraphError::UnsortedTimestamps { index: index + 1 });
        }

        let start = first.time;
        let x: Vec<f64> = samples
            .iter()
            .map(|s| seconds_between(start, s.time))
            .collect();
        let mut y: Vec<f64> = samples.iter().map(|s| mode.value_of(s, units)).collect();
        smoothing::smooth(&mut y, smoothing_passes);

        tracing::debug!(
            "Built {} series ({}) from {} samples",
            mode.label(),
            units.label(),
            samples.len()
        );

        Ok(Self { x, y, mode, units })
    }

    /// Wrap precomputed arrays. `x` must be ascending.
    pub fn from_points(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(GraphError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        // `!(a <= b)` also rejects NaN times.
        if let Some(index) = x.windows(2).position(|w| !(w[0] <= w[1])) {
            return Err(GraphError::UnsortedSeries { index: index + 1 });
        }
        Ok(Self {
            x,
            y,
            ..Default::default()
        })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Time of the last sample, 0 for an empty series.
    pub fn duration(&self) -> f64 {
        self.x.last().copied().unwrap_or(0.0)
    }

    /// Interpolated value at time `t`, clamped to the boundary values.
    pub fn value_at(&self, t: f64) -> Option<f64> {
        interpolation::value_at(&self.x, &self.y, t)
    }

    /// Index of the last sample at or before `t`.
    pub fn index_at(&self, t: f64) -> usize {
        interpolation::index_at(&self.x, t)
    }

    pub fn extrema(&self) -> Option<Extrema> {
        Extrema::compute(&self.y)
    }

    /// Extrema of the values in an index range, clipped to the series.
    pub fn extrema_in(&self, range: Range<usize>) -> Option<Extrema> {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        Extrema::compute(&self.y[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::Velocity;
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2011, 7, 2, 14, 0, 0).unwrap()
    }

    fn descent(velocity_down: f64) -> Vec<RawSample> {
        (0..5)
            .map(|i| {
                RawSample::new(t0() + TimeDelta::seconds(i), 0.0, 0.0, 100.0 - 10.0 * i as f64)
                    .with_velocity(Velocity::new(0.0, 0.0, velocity_down))
            })
            .collect()
    }

    #[test]
    fn x_counts_seconds_from_first_sample() {
        let mut samples = descent(10.0);
        samples[2].time = t0() + TimeDelta::milliseconds(2_500);
        let series = Series::build(&samples, DisplayMode::Altitude, UnitSystem::Metric, 3).unwrap();
        assert_eq!(series.x(), &[0.0, 1.0, 2.5, 3.0, 4.0]);
        assert_eq!(series.duration(), 4.0);
    }

    #[test]
    fn uniform_descent_survives_smoothing() {
        let series =
            Series::build(&descent(10.0), DisplayMode::VerticalSpeed, UnitSystem::Metric, 3)
                .unwrap();
        for v in series.y() {
            assert!((v - 36.0).abs() < 1e-9, "got {v}");
        }
    }

    #[test]
    fn altitude_in_kilometers_and_kilofeet() {
        let samples = descent(0.0);
        let metric = Series::build(&samples, DisplayMode::Altitude, UnitSystem::Metric, 0).unwrap();
        assert!((metric.y()[0] - 0.1).abs() < 1e-12);

        let imperial =
            Series::build(&samples, DisplayMode::Altitude, UnitSystem::Imperial, 0).unwrap();
        assert!((imperial.y()[0] - 0.32808399).abs() < 1e-9);
    }

    #[test]
    fn glide_ratio_without_descent_is_zero() {
        let samples: Vec<RawSample> = (0..4)
            .map(|i| {
                RawSample::new(t0() + TimeDelta::seconds(i), 0.0, 0.0, 500.0)
                    .with_velocity(Velocity::new(15.0, 5.0, 0.0))
            })
            .collect();
        let series = Series::build(&samples, DisplayMode::GlideRatio, UnitSystem::Metric, 3).unwrap();
        assert!(series.y().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn records_mode_and_units() {
        let series =
            Series::build(&descent(1.0), DisplayMode::HorizontalSpeed, UnitSystem::Imperial, 3)
                .unwrap();
        assert_eq!(series.mode(), DisplayMode::HorizontalSpeed);
        assert_eq!(series.units(), UnitSystem::Imperial);
    }

    #[test]
    fn empty_input_builds_empty_series() {
        let series = Series::build(&[], DisplayMode::Altitude, UnitSystem::Metric, 3).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.value_at(1.0), None);
        assert_eq!(series.duration(), 0.0);
    }

    #[test]
    fn time_going_backwards_is_rejected() {
        let mut samples = descent(10.0);
        samples[3].time = t0();
        let err = Series::build(&samples, DisplayMode::Altitude, UnitSystem::Metric, 3).unwrap_err();
        assert!(matches!(err, GraphError::UnsortedTimestamps { index: 3 }));
    }

    #[test]
    fn from_points_checks_shape_and_order() {
        assert!(matches!(
            Series::from_points(vec![0.0, 1.0], vec![1.0]),
            Err(GraphError::LengthMismatch { x: 2, y: 1 })
        ));
        assert!(matches!(
            Series::from_points(vec![0.0, 2.0, 1.0], vec![0.0; 3]),
            Err(GraphError::UnsortedSeries { index: 2 })
        ));
        assert!(Series::from_points(vec![0.0, 1.0, 1.0], vec![0.0; 3]).is_ok());
    }

    #[test]
    fn extrema_in_clips_range() {
        let series = Series::from_points(vec![0.0, 1.0, 2.0], vec![4.0, -2.0, 9.0]).unwrap();
        let e = series.extrema_in(1..10).unwrap();
        assert_eq!((e.min, e.max), (-2.0, 9.0));
        assert_eq!(series.extrema_in(5..9), None);
        assert_eq!(series.extrema_in(2..1), None);
    }
}
