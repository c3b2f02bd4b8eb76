use geo::{LineString, Polygon};

use crate::kernel::GeometryKernel;

/// Strips the splitter's leading and trailing points that lie inside the
/// polygon (boundary included).
///
/// Returns `None` when fewer than 2 points remain; the caller must then
/// leave the polygon unsliced.
#[must_use]
pub fn apply<K: GeometryKernel>(
    kernel: &K,
    polygon: &Polygon<f64>,
    line: &LineString<f64>,
) -> Option<LineString<f64>> {
    let coords = &line.0;
    let inside = |i: usize| kernel.contains(polygon, coords[i]);

    let start = (0..coords.len()).find(|&i| !inside(i))?;
    let end = (start..coords.len()).rev().find(|&i| !inside(i))?;

    let trimmed = &coords[start..=end];
    (trimmed.len() >= 2).then(|| LineString::new(trimmed.to_vec()))
}
