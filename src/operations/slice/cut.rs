use geo::{LineString, Polygon};
use tracing::debug;

use super::band;
use super::options::SliceOptions;
use crate::error::{OperationError, Result};
use crate::geometry::{validate_line, validate_polygon, CutResult, Direction};
use crate::kernel::GeometryKernel;

/// Cuts `polygon` with the band built on one side of `line`.
///
/// Keeps only the difference parts whose boundary overlaps the splitter.
///
/// # Errors
///
/// Fails on malformed input, an odd or zero boundary crossing count, a
/// band the kernel cannot build, a kernel difference failure, or when no
/// part borders the splitter.
pub fn execute<K: GeometryKernel>(
    kernel: &K,
    polygon: &Polygon<f64>,
    line: &LineString<f64>,
    direction: Direction,
    options: &SliceOptions,
) -> Result<CutResult> {
    validate_polygon(polygon)?;
    validate_line(line)?;

    let count = kernel.line_intersections(polygon, line).len();
    if count == 0 || count % 2 == 1 {
        return Err(OperationError::CrossingParity { count }.into());
    }

    let band = band::build(kernel, line, direction, options.band_widths())?;
    let difference = kernel.difference(polygon, &band.to_polygon())?;

    let total = difference.0.len();
    let kept: Vec<Polygon<f64>> = difference
        .into_iter()
        .filter(|part| kernel.boundary_overlaps(part, line, options.overlap_tolerance()))
        .collect();
    debug!(%direction, total, kept = kept.len(), "directional cut");

    CutResult::from_parts(kept, direction, band.width())
        .ok_or_else(|| OperationError::NoFragments { direction }.into())
}
