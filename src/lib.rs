//! Numeric core of a flight-log graph: derived metrics from logged fixes,
//! smoothing, interpolated lookups, and the zoom window with its mapping to
//! screen pixels.
//!
//! Drawing, windowing and input handling live in the host UI. This crate
//! computes what they show: the trace polyline, grid lines, hover readout and
//! the result of a pan or zoom.

pub mod config;
pub mod data;
pub mod error;
pub mod processing;
pub mod render;
pub mod state;

pub use config::GraphConfig;
pub use data::sample::{RawSample, Velocity};
pub use data::units::{DisplayMode, UnitSystem};
pub use error::{GraphError, Result};
pub use state::graph_state::{GraphState, HoverReadout};
pub use state::selection::TimeRange;
pub use state::series::Series;
pub use state::viewport::{Bounds, Viewport};
