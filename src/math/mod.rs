pub mod intersect_2d;
pub mod polygon_2d;

use geo::Coord;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Converts a `geo` coordinate into a math point.
#[must_use]
pub fn to_point(c: Coord<f64>) -> Point2 {
    Point2::new(c.x, c.y)
}

/// Converts a math point back into a `geo` coordinate.
#[must_use]
pub fn to_coord(p: &Point2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}
