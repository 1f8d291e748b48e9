use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::state::series::Series;

/// Axis-aligned data-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounds covering a whole series: time from 0 to the last sample, values
    /// from the extrema scaled by `margin`.
    pub fn global(series: &Series, margin: f64) -> Option<Self> {
        let extrema = series.extrema()?.scaled(margin);
        Some(Self {
            min_x: 0.0,
            max_x: series.duration(),
            min_y: extrema.min,
            max_y: extrema.max,
        })
    }

    /// Bounds for a time window, with Y fitted to the samples in
    /// `[index_at(t_min), index_at(t_max))`.
    ///
    /// A window narrower than one sample interval fits Y to the sample at
    /// `index_at(t_min)` alone.
    pub fn for_window(series: &Series, t_min: f64, t_max: f64, margin: f64) -> Option<Self> {
        let (t_min, t_max) = (t_min.min(t_max), t_min.max(t_max));
        let start = series.index_at(t_min);
        let end = series.index_at(t_max).max(start + 1);
        let extrema = series.extrema_in(start..end)?.scaled(margin);
        Some(Self {
            min_x: t_min,
            max_x: t_max,
            min_y: extrema.min,
            max_y: extrema.max,
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn clamp_x(&self, x: f64) -> f64 {
        x.max(self.min_x).min(self.max_x)
    }

    pub fn clamp_y(&self, y: f64) -> f64 {
        y.max(self.min_y).min(self.max_y)
    }

    pub fn contains(&self, other: &Bounds) -> bool {
        self.min_x <= other.min_x
            && other.max_x <= self.max_x
            && self.min_y <= other.min_y
            && other.max_y <= self.max_y
    }
}

/// Seconds between vertical grid lines: `spacing_px` pixels worth of time,
/// rounded down to the hundredth of a second (never below one hundredth).
/// Returns 0 when the window or surface has no extent.
pub fn grid_step_x(span: f64, pixel_width: f64, spacing_px: f64) -> f64 {
    if !(span > 0.0 && pixel_width > 0.0) || !span.is_finite() {
        return 0.0;
    }
    let seconds_per_pixel = span / pixel_width;
    let step = (seconds_per_pixel * spacing_px * 100.0).floor() / 100.0;
    step.max(0.01)
}

/// Power of ten closest below half the visible value range. Returns 0 for an
/// empty range.
pub fn grid_step_y(span: f64) -> f64 {
    if !(span > 0.0) || !span.is_finite() {
        return 0.0;
    }
    10f64.powi((span * 0.5).log10().floor() as i32)
}

/// The visible zoom window plus its grid spacing.
///
/// Mapping to and from pixels passes a coordinate through unchanged on any
/// axis where either the window or the pixel rect has zero extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub step_x: f64,
    pub step_y: f64,
}

impl Viewport {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            min_x: bounds.min_x,
            max_x: bounds.max_x,
            min_y: bounds.min_y,
            max_y: bounds.max_y,
            step_x: 0.0,
            step_y: 0.0,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_x: self.min_x,
            max_x: self.max_x,
            min_y: self.min_y,
            max_y: self.max_y,
        }
    }

    /// Clamp each requested bound into `global`, order each axis, and
    /// refresh the grid steps. Swapped or out-of-range input is corrected,
    /// never rejected.
    pub fn set_zoom(
        &mut self,
        global: &Bounds,
        requested: Bounds,
        pixel_width: f64,
        grid_spacing_px: f64,
    ) {
        let x0 = global.clamp_x(requested.min_x);
        let x1 = global.clamp_x(requested.max_x);
        let y0 = global.clamp_y(requested.min_y);
        let y1 = global.clamp_y(requested.max_y);

        self.min_x = x0.min(x1);
        self.max_x = x0.max(x1);
        self.min_y = y0.min(y1);
        self.max_y = y0.max(y1);
        self.update_steps(pixel_width, grid_spacing_px);

        tracing::trace!(
            "Zoom set to x [{:.3}, {:.3}] y [{:.3}, {:.3}]",
            self.min_x,
            self.max_x,
            self.min_y,
            self.max_y
        );
    }

    pub fn update_steps(&mut self, pixel_width: f64, grid_spacing_px: f64) {
        self.step_x = grid_step_x(self.max_x - self.min_x, pixel_width, grid_spacing_px);
        self.step_y = grid_step_y(self.max_y - self.min_y);
    }

    /// Shift the window by a pointer drag of `delta` pixels so the content
    /// follows the pointer. The shift is clamped per axis so the window stays
    /// inside `global`. Returns whether anything moved.
    pub fn pan_by_pixels(&mut self, global: &Bounds, delta: Vec2, rect: Rect) -> bool {
        let mut changed = false;

        if let Some(scale) = axis_scale(self.max_x - self.min_x, rect.width()) {
            let shift = (-(delta.x as f64) / scale)
                .max(global.min_x - self.min_x)
                .min(global.max_x - self.max_x);
            if shift != 0.0 {
                self.min_x += shift;
                self.max_x += shift;
                changed = true;
            }
        }

        if let Some(scale) = axis_scale(self.max_y - self.min_y, rect.height()) {
            let shift = (delta.y as f64 / scale)
                .max(global.min_y - self.min_y)
                .min(global.max_y - self.max_y);
            if shift != 0.0 {
                self.min_y += shift;
                self.max_y += shift;
                changed = true;
            }
        }

        changed
    }

    /// Time under pixel column `px`.
    pub fn data_x(&self, px: f64, rect: Rect) -> f64 {
        match axis_scale(self.max_x - self.min_x, rect.width()) {
            Some(scale) => (px - rect.left() as f64) / scale + self.min_x,
            None => px,
        }
    }

    /// Value under pixel row `py`; the bottom of `rect` is `min_y`.
    pub fn data_y(&self, py: f64, rect: Rect) -> f64 {
        match axis_scale(self.max_y - self.min_y, rect.height()) {
            Some(scale) => (rect.bottom() as f64 - py) / scale + self.min_y,
            None => py,
        }
    }

    pub fn pixel_x(&self, x: f64, rect: Rect) -> f64 {
        match axis_scale(self.max_x - self.min_x, rect.width()) {
            Some(scale) => rect.left() as f64 + (x - self.min_x) * scale,
            None => x,
        }
    }

    pub fn pixel_y(&self, y: f64, rect: Rect) -> f64 {
        match axis_scale(self.max_y - self.min_y, rect.height()) {
            Some(scale) => rect.bottom() as f64 - (y - self.min_y) * scale,
            None => y,
        }
    }

    /// Convert a screen position to data coordinates.
    pub fn data_from_pixel(&self, pos: Pos2, rect: Rect) -> (f64, f64) {
        (
            self.data_x(pos.x as f64, rect),
            self.data_y(pos.y as f64, rect),
        )
    }

    /// Convert data coordinates to a screen position.
    pub fn pixel_from_data(&self, x: f64, y: f64, rect: Rect) -> Pos2 {
        Pos2::new(self.pixel_x(x, rect) as f32, self.pixel_y(y, rect) as f32)
    }
}

/// Pixels per data unit, or `None` when either extent is zero.
fn axis_scale(span: f64, pixels: f32) -> Option<f64> {
    let scale = pixels as f64 / span;
    if span != 0.0 && pixels != 0.0 && scale.is_finite() {
        Some(scale)
    } else {
        None
    }
}
