//! Grid snapping.

use kurbo::Point;

/// Default grid size, matching the visual grid.
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Round a value to the nearest multiple of `grid`.
///
/// A grid of 0 disables snapping and returns the value unchanged.
pub fn round_to_grid(value: f64, grid: f64) -> f64 {
    if grid == 0.0 {
        value
    } else {
        (value / grid).round() * grid
    }
}

/// Snap both coordinates of a point to the grid.
pub fn snap_point(point: Point, grid: f64) -> Point {
    Point::new(round_to_grid(point.x, grid), round_to_grid(point.y, grid))
}
