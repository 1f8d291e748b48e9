use serde::{Deserialize, Serialize};

use crate::state::series::Series;

/// Half-open row range `[min, max)` into a record set, or no selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    Invalid,
    Rows { min: usize, max: usize },
}

impl TimeRange {
    pub fn new(a: usize, b: usize) -> Self {
        TimeRange::Rows {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Range for a row selection in a table of `row_count` rows. Selections
    /// no wider than `min_width` rows count as no selection.
    pub fn from_rows(a: usize, b: usize, row_count: usize, min_width: usize) -> Self {
        match TimeRange::new(a, b) {
            TimeRange::Rows { min, max } if max - min > min_width => TimeRange::Rows {
                min: min.min(row_count),
                max: max.min(row_count),
            },
            _ => TimeRange::Invalid,
        }
    }

    /// Rows covering a time window: from the sample at or before `t0` up to
    /// the sample at or before `t1`.
    pub fn from_time_window(series: &Series, t0: f64, t1: f64) -> Self {
        if series.is_empty() {
            return TimeRange::Invalid;
        }
        TimeRange::new(series.index_at(t0), series.index_at(t1))
    }

    /// Time span from the first selected row to the last one.
    pub fn time_window(&self, series: &Series) -> Option<(f64, f64)> {
        match *self {
            TimeRange::Rows { min, max } if min < max && max <= series.len() => {
                Some((series.x()[min], series.x()[max - 1]))
            }
            _ => None,
        }
    }

    pub fn width(&self) -> usize {
        match *self {
            TimeRange::Invalid => 0,
            TimeRange::Rows { min, max } => max - min,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, TimeRange::Rows { .. })
    }

    pub fn contains(&self, row: usize) -> bool {
        match *self {
            TimeRange::Invalid => false,
            TimeRange::Rows { min, max } => (min..max).contains(&row),
        }
    }
}
