use egui::Rect;

use crate::data::datetime::format_elapsed;
use crate::state::viewport::Viewport;

/// Upper bound on lines per axis; a step this fine for the window means the
/// step is stale.
const MAX_GRID_LINES: i64 = 10_000;

/// Minor lines drawn between two major lines.
const MINOR_DIVISIONS: i64 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    /// Position in data units along the axis.
    pub value: f64,
    /// Screen coordinate along the axis (x for time lines, y for value lines).
    pub pixel: f32,
    pub major: bool,
    /// Label for major lines.
    pub label: Option<String>,
}

/// Vertical lines at multiples of `viewport.step_x`, labelled `m:ss.cc`.
///
/// One step beyond each edge is included, so callers should clip to `rect`.
pub fn grid_lines_x(viewport: &Viewport, rect: Rect, minor_min_px: f64) -> Vec<GridLine> {
    axis_lines(
        viewport.min_x,
        viewport.max_x,
        viewport.step_x,
        rect.width() as f64,
        minor_min_px,
        |v| viewport.pixel_x(v, rect),
        format_elapsed,
    )
}

/// Horizontal lines at multiples of `viewport.step_y`, with numeric labels.
pub fn grid_lines_y(viewport: &Viewport, rect: Rect, minor_min_px: f64) -> Vec<GridLine> {
    axis_lines(
        viewport.min_y,
        viewport.max_y,
        viewport.step_y,
        rect.height() as f64,
        minor_min_px,
        |v| viewport.pixel_y(v, rect),
        format_tick_value,
    )
}

fn axis_lines(
    min: f64,
    max: f64,
    step: f64,
    extent_px: f64,
    minor_min_px: f64,
    to_pixel: impl Fn(f64) -> f64,
    label: impl Fn(f64) -> String,
) -> Vec<GridLine> {
    let span = max - min;
    if !(step > 0.0 && span > 0.0 && extent_px > 0.0) || !step.is_finite() || !span.is_finite() {
        return Vec::new();
    }

    let first = (min / step).trunc() as i64 - 1;
    let last = (max / step).trunc() as i64 + 1;
    if last - first > MAX_GRID_LINES {
        tracing::trace!("Skipping grid: step {step} too fine for [{min}, {max}]");
        return Vec::new();
    }

    let with_minor = extent_px / span * step > minor_min_px;
    let mut lines = Vec::new();
    for i in first..last {
        let value = i as f64 * step;
        lines.push(GridLine {
            value,
            pixel: to_pixel(value) as f32,
            major: true,
            label: Some(label(value)),
        });
        if with_minor {
            for j in 1..MINOR_DIVISIONS {
                let minor = value + j as f64 * step / MINOR_DIVISIONS as f64;
                lines.push(GridLine {
                    value: minor,
                    pixel: to_pixel(minor) as f32,
                    major: false,
                    label: None,
                });
            }
        }
    }
    lines
}

/// Format a numeric value for axis tick labels.
pub fn format_tick_value(val: f64) -> String {
    if val.abs() >= 1e6 || (val != 0.0 && val.abs() < 1e-3) {
        format!("{val:.2e}")
    } else if val == 0.0 {
        "0".to_string()
    } else {
        let s = format!("{val:.6}");
        let s = s.trim_end_matches('0');
        let s = s.trim_end_matches('.');
        s.to_string()
    }
}
