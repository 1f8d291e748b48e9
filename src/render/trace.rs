use egui::{Pos2, Rect};

use crate::state::series::Series;
use crate::state::viewport::Viewport;

/// Screen polyline for a series: one vertex per pixel column of `rect`, the
/// value sampled at that column's time.
///
/// Empty when there is nothing to draw or the window has no width or height.
pub fn trace_polyline(series: &Series, viewport: &Viewport, rect: Rect) -> Vec<Pos2> {
    let columns = rect.width().floor();
    if series.is_empty()
        || !(columns >= 1.0)
        || !(viewport.max_x > viewport.min_x)
        || !(viewport.max_y > viewport.min_y)
    {
        return Vec::new();
    }

    (0..columns as usize)
        .filter_map(|i| {
            let px = rect.left() as f64 + i as f64;
            let time = viewport.data_x(px, rect);
            let value = series.value_at(time)?;
            Some(Pos2::new(px as f32, viewport.pixel_y(value, rect) as f32))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::viewport::Bounds;

    fn rect() -> Rect {
        Rect::from_min_size(egui::pos2(10.0, 0.0), egui::vec2(100.0, 50.0))
    }

    fn viewport() -> Viewport {
        Viewport::new(Bounds {
            min_x: 0.0,
            max_x: 10.0,
            min_y: 0.0,
            max_y: 10.0,
        })
    }

    #[test]
    fn one_vertex_per_column() {
        let series = Series::from_points(vec![0.0, 10.0], vec![0.0, 10.0]).unwrap();
        let points = trace_polyline(&series, &viewport(), rect());
        assert_eq!(points.len(), 100);
        assert_eq!(points[0], egui::pos2(10.0, 50.0));
        // Column 50 is t = 5 on a diagonal, halfway up.
        assert!((points[50].y - 25.0).abs() < 1e-4);
    }

    #[test]
    fn columns_past_the_data_hold_the_last_value() {
        let series = Series::from_points(vec![0.0, 2.0], vec![4.0, 6.0]).unwrap();
        let points = trace_polyline(&series, &viewport(), rect());
        let last = points.last().unwrap();
        assert!((last.y - 20.0).abs() < 1e-4);
    }

    #[test]
    fn nothing_to_trace() {
        assert!(trace_polyline(&Series::default(), &viewport(), rect()).is_empty());

        let series = Series::from_points(vec![0.0], vec![1.0]).unwrap();
        let flat = Viewport::new(Bounds {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 1.0,
            max_y: 1.0,
        });
        assert!(trace_polyline(&series, &flat, rect()).is_empty());
        assert!(trace_polyline(&series, &viewport(), Rect::NOTHING).is_empty());
    }
}
