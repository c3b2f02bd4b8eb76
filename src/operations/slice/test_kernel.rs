use geo::{Coord, LineString, MultiPolygon, Polygon};

use crate::error::{KernelError, Result};
use crate::geometry::Direction;
use crate::kernel::{GeoKernel, GeometryKernel};

/// Delegates to [`GeoKernel`] except for the scripted failures.
#[derive(Debug, Default)]
pub struct Scripted {
    pub fail_difference: bool,
    pub never_overlap: bool,
    /// Offsets towards this side fail.
    pub fail_offset: Option<Direction>,
    /// Flips the side every offset is built on.
    pub mirror_offset: bool,
}

impl GeometryKernel for Scripted {
    fn contains(&self, polygon: &Polygon<f64>, point: Coord<f64>) -> bool {
        GeoKernel.contains(polygon, point)
    }

    fn offset(&self, line: &LineString<f64>, distance: f64) -> Result<LineString<f64>> {
        let side = if distance > 0.0 {
            Direction::Upper
        } else {
            Direction::Lower
        };
        if self.fail_offset == Some(side) {
            return Err(KernelError::OffsetFailed(format!("{side} offset disabled")).into());
        }
        let distance = if self.mirror_offset { -distance } else { distance };
        GeoKernel.offset(line, distance)
    }

    fn difference(&self, a: &Polygon<f64>, b: &Polygon<f64>) -> Result<MultiPolygon<f64>> {
        if self.fail_difference {
            return Err(KernelError::DifferenceFailed("degenerate".to_owned()).into());
        }
        GeoKernel.difference(a, b)
    }

    fn resolve_self_intersections(&self, polygon: &Polygon<f64>) -> Vec<Polygon<f64>> {
        GeoKernel.resolve_self_intersections(polygon)
    }

    fn boundary_overlaps(
        &self,
        polygon: &Polygon<f64>,
        line: &LineString<f64>,
        tolerance: f64,
    ) -> bool {
        !self.never_overlap && GeoKernel.boundary_overlaps(polygon, line, tolerance)
    }

    fn line_intersections(&self, polygon: &Polygon<f64>, line: &LineString<f64>) -> Vec<Coord<f64>> {
        GeoKernel.line_intersections(polygon, line)
    }
}
