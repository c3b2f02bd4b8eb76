use geo::{Coord, LineString, Polygon};
use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::{Band, Direction};
use crate::kernel::GeometryKernel;

/// Builds the band for one side of the splitter.
///
/// Widths are tried largest first; the first ring that resolves into
/// exactly one simple part is accepted. When none does, the ring of the
/// last width is returned anyway and flagged as not simple.
///
/// # Errors
///
/// Returns an error if `widths` is empty or the kernel cannot offset the
/// line.
pub fn build<K: GeometryKernel>(
    kernel: &K,
    line: &LineString<f64>,
    direction: Direction,
    widths: &[f64],
) -> Result<Band> {
    let mut fallback = None;

    for &width in widths {
        let offset = kernel.offset(line, width * direction.sign())?;
        let ring = ring_from(line, &offset);
        let parts = kernel
            .resolve_self_intersections(&Polygon::new(ring.clone(), Vec::new()))
            .len();
        trace!(%direction, width, parts, "band trial");

        if parts == 1 {
            debug!(%direction, width, "band accepted");
            return Ok(Band::new(ring, width, direction, true));
        }
        fallback = Some(Band::new(ring, width, direction, false));
    }

    let band = fallback.ok_or_else(|| {
        OperationError::InvalidInput("at least one band width required".to_owned())
    })?;
    debug!(%direction, width = band.width(), "no simple band, using the narrowest");
    Ok(band)
}

/// Line forward, offset line backward, closed at the line's first point.
fn ring_from(line: &LineString<f64>, offset: &LineString<f64>) -> LineString<f64> {
    let coords: Vec<Coord<f64>> = line
        .0
        .iter()
        .chain(offset.0.iter().rev())
        .chain(line.0.first())
        .copied()
        .collect();
    LineString::new(coords)
}
