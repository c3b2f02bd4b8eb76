use geo::{BooleanOps, Coord, Intersects, LineString, MultiPolygon, Point, Polygon};

use super::{crossings, offset, overlap, rings, self_intersect, GeometryKernel};
use crate::error::{KernelError, Result};
use crate::math::polygon_2d::open_ring;
use crate::math::{to_coord, to_point, Point2};

/// Default floating-point kernel.
///
/// Containment, boolean difference and segment intersection come from the
/// `geo` crate; line offsetting, ring decomposition and boundary overlap are
/// polyline routines operating on `nalgebra` points.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeoKernel;

impl GeometryKernel for GeoKernel {
    fn contains(&self, polygon: &Polygon<f64>, point: Coord<f64>) -> bool {
        polygon.intersects(&Point::from(point))
    }

    fn offset(&self, line: &LineString<f64>, distance: f64) -> Result<LineString<f64>> {
        let points = points_of(line);
        let shifted = offset::build(&points, distance)?;
        Ok(shifted.iter().map(to_coord).collect())
    }

    fn difference(&self, a: &Polygon<f64>, b: &Polygon<f64>) -> Result<MultiPolygon<f64>> {
        if !all_finite(a) || !all_finite(b) {
            return Err(
                KernelError::DifferenceFailed("operand has non-finite coordinates".to_owned())
                    .into(),
            );
        }
        let result = a.difference(b);
        if result.0.iter().any(|p| !all_finite(p)) {
            return Err(
                KernelError::DifferenceFailed("result has non-finite coordinates".to_owned())
                    .into(),
            );
        }
        Ok(result)
    }

    fn resolve_self_intersections(&self, polygon: &Polygon<f64>) -> Vec<Polygon<f64>> {
        let points = points_of(polygon.exterior());
        self_intersect::split_loops(open_ring(&points))
            .into_iter()
            .map(|ring| {
                let exterior: LineString<f64> = ring.iter().map(to_coord).collect();
                Polygon::new(exterior, Vec::new())
            })
            .collect()
    }

    fn boundary_overlaps(
        &self,
        polygon: &Polygon<f64>,
        line: &LineString<f64>,
        tolerance: f64,
    ) -> bool {
        let line_points = points_of(line);
        rings(polygon).any(|ring| overlap::segments_overlap(&points_of(ring), &line_points, tolerance))
    }

    fn line_intersections(&self, polygon: &Polygon<f64>, line: &LineString<f64>) -> Vec<Coord<f64>> {
        crossings::collect(rings(polygon), line)
    }
}

fn points_of(line: &LineString<f64>) -> Vec<Point2> {
    line.coords().copied().map(to_point).collect()
}

fn all_finite(polygon: &Polygon<f64>) -> bool {
    rings(polygon)
        .flat_map(LineString::coords)
        .all(|c| c.x.is_finite() && c.y.is_finite())
}
