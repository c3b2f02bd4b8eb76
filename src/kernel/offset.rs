use crate::error::{KernelError, Result};
use crate::math::intersect_2d::{line_line_intersect_2d, point_at};
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::{Point2, Vector2};

/// Maximum miter distance as a multiple of `|distance|`.
const MITER_LIMIT: f64 = 4.0;

/// Threshold for flat cap: `cos(angle) < this` → near-180° reversal.
const FLAT_CAP_COS: f64 = -0.98;

/// A line segment shifted along its left normal.
struct OffsetSeg {
    start: Point2,
    end: Point2,
    dir: Vector2,
}

/// Builds the parallel offset of an open polyline made of straight segments.
///
/// Each segment is shifted by `distance` along its left normal; consecutive
/// shifted segments are joined at their miter point, bevelled when the
/// miter is too long, and flat capped on near reversals.
///
/// # Errors
///
/// Returns `KernelError::OffsetFailed` for fewer than 2 points or a
/// zero-length segment.
pub fn build(points: &[Point2], distance: f64) -> Result<Vec<Point2>> {
    if points.len() < 2 {
        return Err(KernelError::OffsetFailed("at least 2 points required".to_owned()).into());
    }

    // Phase A: offset every segment.
    let segs = points
        .windows(2)
        .map(|w| -> Result<OffsetSeg> {
            let dir = segment_direction(&w[0], &w[1])
                .map_err(|e| KernelError::OffsetFailed(e.to_string()))?;
            let shift = left_normal(dir) * distance;
            Ok(OffsetSeg {
                start: w[0] + shift,
                end: w[1] + shift,
                dir,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // Phase B: connect consecutive offset segments at corners.
    let corners = segs
        .windows(2)
        .zip(&points[1..])
        .flat_map(|(pair, orig)| corner(&pair[0], &pair[1], orig, distance));

    let first = segs.first().map(|s| s.start);
    let last = segs.last().map(|s| s.end);
    Ok(first.into_iter().chain(corners).chain(last).collect())
}

/// Returns the vertex/vertices joining two consecutive offset segments.
///
/// Handles three cases:
/// 1. Near-antiparallel (>~169°): flat cap (two vertices)
/// 2. Miter too long: bevel (two vertices)
/// 3. Normal corner: single miter intersection point
fn corner(prev: &OffsetSeg, next: &OffsetSeg, orig: &Point2, distance: f64) -> Vec<Point2> {
    if prev.dir.dot(&next.dir) < FLAT_CAP_COS {
        return vec![prev.end, next.start];
    }

    match line_line_intersect_2d(&prev.end, &prev.dir, &next.start, &next.dir) {
        Some((t, _)) => {
            let miter = point_at(&prev.end, &prev.dir, t);
            let limit = MITER_LIMIT * distance.abs();
            if (miter - orig).norm_squared() > limit * limit {
                vec![prev.end, next.start]
            } else {
                vec![miter]
            }
        }
        // Collinear continuation: both offsets meet at the shifted corner.
        None => vec![prev.end],
    }
}
