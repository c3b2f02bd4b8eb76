use geo::line_intersection::{line_intersection, LineIntersection};
use geo::{Coord, LineString};

use crate::math::TOLERANCE;

/// Collects the single-point intersections between `ring` and `line`.
///
/// Points are reported in ring traversal order. A point hit by several
/// segment pairs (e.g. at a ring vertex) is reported once. Collinear
/// overlaps contribute no points.
#[must_use]
pub fn collect<'a>(
    rings: impl IntoIterator<Item = &'a LineString<f64>>,
    line: &LineString<f64>,
) -> Vec<Coord<f64>> {
    let hits = rings.into_iter().flat_map(|ring| {
        ring.lines().flat_map(|edge| {
            line.lines()
                .filter_map(move |seg| match line_intersection(edge, seg)? {
                    LineIntersection::SinglePoint { intersection, .. } => Some(intersection),
                    LineIntersection::Collinear { .. } => None,
                })
        })
    });

    hits.fold(Vec::new(), |mut acc, c| {
        if !acc.iter().any(|seen| same_point(*seen, c)) {
            acc.push(c);
        }
        acc
    })
}

fn same_point(a: Coord<f64>, b: Coord<f64>) -> bool {
    (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE
}
