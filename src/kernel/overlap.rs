use crate::math::Point2;

/// Returns whether any segment of `ring` overlaps any segment of `line`.
///
/// Two segments overlap when they share a collinear stretch longer than
/// `tolerance`: both endpoints of the shorter one lie within `tolerance` of
/// the longer one's supporting line, and their projections onto it share
/// more than `tolerance` of length. Zero-length segments never overlap
/// anything.
#[must_use]
pub fn segments_overlap(ring: &[Point2], line: &[Point2], tolerance: f64) -> bool {
    ring.windows(2)
        .filter(|s| !is_degenerate(s))
        .any(|r| {
            line.windows(2)
                .filter(|s| !is_degenerate(s))
                .any(|l| shares_stretch(r, l, tolerance))
        })
}

fn shares_stretch(a: &[Point2], b: &[Point2], tolerance: f64) -> bool {
    let (reference, other) = if length(a) >= length(b) { (a, b) } else { (b, a) };
    let origin = reference[0];
    let span = reference[1] - origin;
    let len = span.norm();
    let dir = span / len;

    let v0 = other[0] - origin;
    let v1 = other[1] - origin;
    if dir.perp(&v0).abs() > tolerance || dir.perp(&v1).abs() > tolerance {
        return false;
    }

    let (t0, t1) = (dir.dot(&v0), dir.dot(&v1));
    let shared = t0.max(t1).min(len) - t0.min(t1).max(0.0);
    shared > tolerance
}

fn length(seg: &[Point2]) -> f64 {
    (seg[1] - seg[0]).norm()
}

fn is_degenerate(seg: &[Point2]) -> bool {
    (seg[1] - seg[0]).norm_squared() < 1e-20
}
