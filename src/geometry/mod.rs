mod band;
mod cut_result;
mod direction;

pub use band::Band;
pub use cut_result::CutResult;
pub use direction::Direction;

pub use geo::{Coord, LineString, MultiPolygon, Polygon};

use crate::error::{GeometryError, Result};

/// Checks that a polygon's exterior ring is closed-ring shaped and finite.
///
/// # Errors
///
/// Returns `GeometryError::TooFewCoordinates` for rings with fewer than 4
/// coordinates, or `GeometryError::NonFinite` for NaN/infinite coordinates.
pub fn validate_polygon(polygon: &Polygon<f64>) -> Result<()> {
    let count = polygon.exterior().0.len();
    if count < 4 {
        return Err(GeometryError::TooFewCoordinates {
            kind: "polygon exterior",
            count,
            min: 4,
        }
        .into());
    }
    let rings = std::iter::once(polygon.exterior()).chain(polygon.interiors());
    if rings.flat_map(|r| r.coords()).any(|c| !is_finite(c)) {
        return Err(GeometryError::NonFinite { kind: "polygon" }.into());
    }
    Ok(())
}

/// Checks that a line has at least two finite coordinates.
///
/// # Errors
///
/// Returns `GeometryError::TooFewCoordinates` or `GeometryError::NonFinite`.
pub fn validate_line(line: &LineString<f64>) -> Result<()> {
    let count = line.0.len();
    if count < 2 {
        return Err(GeometryError::TooFewCoordinates {
            kind: "line",
            count,
            min: 2,
        }
        .into());
    }
    if line.coords().any(|c| !is_finite(c)) {
        return Err(GeometryError::NonFinite { kind: "line" }.into());
    }
    Ok(())
}

/// Rebuilds a polygon from its exterior ring only.
#[must_use]
pub fn exterior_only(polygon: &Polygon<f64>) -> Polygon<f64> {
    Polygon::new(polygon.exterior().clone(), Vec::new())
}

fn is_finite(c: &Coord<f64>) -> bool {
    c.x.is_finite() && c.y.is_finite()
}
