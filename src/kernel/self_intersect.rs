use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Point2, TOLERANCE};

/// A crossing between two non-adjacent segments of a ring.
#[derive(Debug, Clone, Copy)]
struct Crossing {
    /// Index of the first segment.
    seg_i: usize,
    /// Index of the second segment (always > `seg_i`).
    seg_j: usize,
    point: Point2,
}

/// Splits an open ring (no repeated closing point) into simple loops.
///
/// The ring is cut at its first crossing into two loops sharing the
/// crossing point; both loops are processed again until none crosses
/// itself. Loops with no area are dropped. A ring without crossings comes
/// back unchanged as the only loop.
#[must_use]
pub fn split_loops(ring: &[Point2]) -> Vec<Vec<Point2>> {
    let mut pending = vec![ring.to_vec()];
    let mut loops = Vec::new();

    // Each split removes at least one crossing, so this bound is never hit
    // for well-formed input.
    let mut budget = ring.len() * ring.len() + 1;

    while let Some(current) = pending.pop() {
        if budget == 0 {
            loops.push(current);
            continue;
        }
        budget -= 1;

        match first_crossing(&current) {
            Some(c) => {
                let (a, b) = split_at(&current, c);
                // Keep traversal order stable: first loop is processed first.
                pending.push(b);
                pending.push(a);
            }
            None => {
                if signed_area_2d(&current).abs() > TOLERANCE {
                    loops.push(current);
                }
            }
        }
    }

    loops
}

/// Finds the first crossing between non-adjacent segments.
///
/// Endpoint touches (either parameter at a segment end) and collinear
/// overlaps are not crossings.
fn first_crossing(ring: &[Point2]) -> Option<Crossing> {
    let n = ring.len();
    if n < 4 {
        return None;
    }

    let eps = TOLERANCE * 100.0;

    for i in 0..n {
        for j in (i + 2)..n {
            // Skip the wrap-around neighbour.
            if i == 0 && j == n - 1 {
                continue;
            }
            let hit = segment_segment_intersect_2d(
                &ring[i],
                &ring[(i + 1) % n],
                &ring[j],
                &ring[(j + 1) % n],
            );
            if let Some((point, t, u)) = hit {
                let t_at_end = t < eps || t > 1.0 - eps;
                let u_at_end = u < eps || u > 1.0 - eps;
                if !t_at_end && !u_at_end {
                    return Some(Crossing {
                        seg_i: i,
                        seg_j: j,
                        point,
                    });
                }
            }
        }
    }

    None
}

/// Cuts a ring into the loop between the two crossing segments and the
/// loop around the rest of the ring.
fn split_at(ring: &[Point2], c: Crossing) -> (Vec<Point2>, Vec<Point2>) {
    let inner = std::iter::once(c.point)
        .chain(ring[c.seg_i + 1..=c.seg_j].iter().copied())
        .collect();
    let outer = std::iter::once(c.point)
        .chain(ring[c.seg_j + 1..].iter().copied())
        .chain(ring[..=c.seg_i].iter().copied())
        .collect();
    (inner, outer)
}
