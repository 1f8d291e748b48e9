use egui::{Pos2, Rect, Vec2};

use crate::config::GraphConfig;
use crate::data::sample::RawSample;
use crate::data::units::{DisplayMode, UnitSystem};
use crate::error::Result;
use crate::processing::velocity;
use crate::render::grid::{self, GridLine};
use crate::render::trace;
use crate::state::series::Series;
use crate::state::viewport::{Bounds, Viewport};

/// Value under the pointer, for the hover readout.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverReadout {
    pub time: f64,
    pub value: f64,
    /// Screen position of the marker on the trace.
    pub marker: Pos2,
    pub label: String,
}

/// State behind one graph control: the record set, what is plotted from it,
/// and the zoom window onto the plot.
///
/// The series is always rebuilt whole. Nothing here keeps indices into a
/// previous series across a rebuild.
#[derive(Debug, Clone)]
pub struct GraphState {
    pub config: GraphConfig,
    samples: Vec<RawSample>,
    mode: DisplayMode,
    units: UnitSystem,
    series: Series,
    global: Option<Bounds>,
    viewport: Viewport,
    rect: Rect,
}

impl GraphState {
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            samples: Vec::new(),
            mode: DisplayMode::default(),
            units: UnitSystem::default(),
            series: Series::default(),
            global: None,
            viewport: Viewport::default(),
            rect: Rect::NOTHING,
        }
    }

    pub fn samples(&self) -> &[RawSample] {
        &self.samples
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn global_bounds(&self) -> Option<Bounds> {
        self.global
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn pixel_rect(&self) -> Rect {
        self.rect
    }

    /// Install a new record set. Missing velocities are derived, the series
    /// is rebuilt and the zoom resets to the whole track.
    ///
    /// On error the previous state is kept.
    pub fn set_source(&mut self, mut samples: Vec<RawSample>) -> Result<()> {
        velocity::fill_missing(&mut samples);
        let series = Series::build(&samples, self.mode, self.units, self.config.smoothing_passes)?;
        self.samples = samples;
        self.install(series, true);
        Ok(())
    }

    /// Drop the record set, leaving an inert empty graph.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.install(Series::default(), true);
    }

    /// Switch the plotted quantity, keeping the zoomed time window.
    pub fn set_mode(&mut self, mode: DisplayMode) -> Result<()> {
        if mode == self.mode {
            return Ok(());
        }
        self.mode = mode;
        self.rebuild(false)
    }

    /// Switch units, keeping the zoomed time window.
    pub fn set_units(&mut self, units: UnitSystem) -> Result<()> {
        if units == self.units {
            return Ok(());
        }
        self.units = units;
        self.rebuild(false)
    }

    /// Recompute the series from the current record set. With `reset_zoom`
    /// the window covers the whole track; otherwise the previous time window
    /// is clamped into the new track. Y is fitted to the window either way.
    pub fn rebuild(&mut self, reset_zoom: bool) -> Result<()> {
        let series = Series::build(
            &self.samples,
            self.mode,
            self.units,
            self.config.smoothing_passes,
        )?;
        self.install(series, reset_zoom);
        Ok(())
    }

    fn install(&mut self, series: Series, reset_zoom: bool) {
        self.series = series;
        self.global = Bounds::global(&self.series, self.config.extrema_margin);

        let Some(global) = self.global else {
            self.viewport = Viewport::default();
            return;
        };

        let (t_min, t_max) = if reset_zoom {
            (global.min_x, global.max_x)
        } else {
            let a = global.clamp_x(self.viewport.min_x);
            let b = global.clamp_x(self.viewport.max_x);
            (a.min(b), a.max(b))
        };

        let window = Bounds::for_window(&self.series, t_min, t_max, self.config.extrema_margin)
            .unwrap_or(global);
        self.viewport = Viewport::new(window);
        self.viewport
            .update_steps(self.rect.width() as f64, self.config.grid_spacing_px);
    }

    /// Resize the drawing surface; only the grid steps depend on it.
    pub fn set_pixel_rect(&mut self, rect: Rect) {
        self.rect = rect;
        self.viewport
            .update_steps(rect.width() as f64, self.config.grid_spacing_px);
    }

    /// Zoom to the requested data-space window, clamped into the track.
    pub fn set_zoom(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) {
        let Some(global) = self.global else {
            return;
        };
        let requested = Bounds {
            min_x,
            max_x,
            min_y,
            max_y,
        };
        self.viewport.set_zoom(
            &global,
            requested,
            self.rect.width() as f64,
            self.config.grid_spacing_px,
        );
    }

    /// Back to the whole track with Y fitted to it.
    pub fn reset_zoom(&mut self) {
        let series = std::mem::take(&mut self.series);
        self.install(series, true);
    }

    /// Pan by a pointer drag of `delta` pixels.
    pub fn pan_by_pixels(&mut self, delta: Vec2) -> bool {
        match self.global {
            Some(global) => self.viewport.pan_by_pixels(&global, delta, self.rect),
            None => false,
        }
    }

    /// Wheel zoom centred on `pointer`. Each bound's distance from the
    /// pointer is scaled by `delta / notch` (positive delta) or
    /// `notch / -delta` (negative delta), so a single 120-unit notch zooms in
    /// one way and out the other.
    pub fn zoom_wheel(&mut self, pointer: Pos2, delta: f64) {
        if delta == 0.0 || !delta.is_finite() || self.global.is_none() {
            return;
        }
        let notch = self.config.wheel_notch;
        let factor = if delta > 0.0 { delta / notch } else { notch / -delta };

        let (cx, cy) = self.viewport.data_from_pixel(pointer, self.rect);
        let v = self.viewport;
        self.set_zoom(
            (v.min_x - cx) * factor + cx,
            (v.min_y - cy) * factor + cy,
            (v.max_x - cx) * factor + cx,
            (v.max_y - cy) * factor + cy,
        );
    }

    /// Zoom to a rubber-band rectangle dragged from `a` to `b`. Rectangles
    /// too small to be deliberate are ignored. Returns whether the zoom
    /// changed.
    pub fn zoom_to_selection(&mut self, a: Pos2, b: Pos2) -> bool {
        if self.global.is_none() {
            return false;
        }
        let selection = Rect::from_two_pos(a, b);
        if (selection.area() as f64) <= self.config.min_select_area_px {
            return false;
        }

        let (min_x, max_y) = self.viewport.data_from_pixel(selection.left_top(), self.rect);
        let (max_x, min_y) = self
            .viewport
            .data_from_pixel(selection.right_bottom(), self.rect);
        self.set_zoom(min_x, min_y, max_x, max_y);
        true
    }

    /// Polyline of the current trace in screen space.
    pub fn trace(&self) -> Vec<Pos2> {
        trace::trace_polyline(&self.series, &self.viewport, self.rect)
    }

    /// Time grid (vertical lines) for the current window.
    pub fn grid_lines_x(&self) -> Vec<GridLine> {
        grid::grid_lines_x(&self.viewport, self.rect, self.config.minor_grid_min_px)
    }

    /// Value grid (horizontal lines) for the current window.
    pub fn grid_lines_y(&self) -> Vec<GridLine> {
        grid::grid_lines_y(&self.viewport, self.rect, self.config.minor_grid_min_px)
    }

    /// Readout for the pointer position, if it is over a non-empty plot.
    pub fn hover(&self, pointer: Pos2) -> Option<HoverReadout> {
        if !self.rect.contains(pointer) {
            return None;
        }
        let time = self.viewport.data_x(pointer.x as f64, self.rect);
        let value = self.series.value_at(time)?;
        Some(HoverReadout {
            time,
            value,
            marker: self.viewport.pixel_from_data(time, value, self.rect),
            label: self.mode.format_value(value, self.units),
        })
    }
}

impl Default for GraphState {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}
