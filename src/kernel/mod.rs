//! Geometry capabilities the slicing pipeline consumes.
//!
//! The pipeline only talks to [`GeometryKernel`]; [`GeoKernel`] is the
//! default floating-point implementation built on the `geo` crate plus the
//! polyline routines in this module.

mod crossings;
mod geo_kernel;
mod offset;
mod overlap;
mod self_intersect;

pub use geo_kernel::GeoKernel;

use geo::{Coord, LineString, MultiPolygon, Polygon};

use crate::error::Result;

/// Geometric primitives required by polygon slicing.
///
/// Implementations must be deterministic: identical inputs yield identical
/// outputs.
pub trait GeometryKernel {
    /// Returns whether `point` lies inside `polygon` or on its boundary.
    fn contains(&self, polygon: &Polygon<f64>, point: Coord<f64>) -> bool;

    /// Offsets an open line by a signed distance (positive = left of travel).
    ///
    /// # Errors
    ///
    /// Returns an error if the offset cannot be formed, e.g. for zero-length
    /// segments.
    fn offset(&self, line: &LineString<f64>, distance: f64) -> Result<LineString<f64>>;

    /// Computes `a - b`.
    ///
    /// # Errors
    ///
    /// Returns an error on degenerate topology the kernel cannot resolve.
    fn difference(&self, a: &Polygon<f64>, b: &Polygon<f64>) -> Result<MultiPolygon<f64>>;

    /// Decomposes a possibly self-intersecting polygon into simple parts.
    fn resolve_self_intersections(&self, polygon: &Polygon<f64>) -> Vec<Polygon<f64>>;

    /// Returns whether the polygon boundary shares a segment with `line`
    /// within `tolerance`.
    fn boundary_overlaps(&self, polygon: &Polygon<f64>, line: &LineString<f64>, tolerance: f64)
        -> bool;

    /// Returns the points where `line` meets the polygon boundary.
    fn line_intersections(&self, polygon: &Polygon<f64>, line: &LineString<f64>) -> Vec<Coord<f64>>;
}

/// Iterates the exterior ring followed by the interior rings of a polygon.
fn rings(polygon: &Polygon<f64>) -> impl Iterator<Item = &LineString<f64>> {
    std::iter::once(polygon.exterior()).chain(polygon.interiors())
}
