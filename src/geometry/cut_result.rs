use geo::{MultiPolygon, Polygon};

use super::Direction;

/// Shape of a successful directional cut.
#[derive(Debug, Clone, PartialEq)]
enum CutShape {
    Single(Polygon<f64>),
    Multi(MultiPolygon<f64>),
}

/// Fragments kept by one directional cut, tagged with its direction.
///
/// Every part borders the splitter; an empty cut is reported as an error
/// instead of an empty `CutResult`.
#[derive(Debug, Clone, PartialEq)]
pub struct CutResult {
    direction: Direction,
    shape: CutShape,
    band_width: f64,
}

impl CutResult {
    /// Builds a result from the kept parts, or `None` if there are none.
    #[must_use]
    pub fn from_parts(
        mut parts: Vec<Polygon<f64>>,
        direction: Direction,
        band_width: f64,
    ) -> Option<Self> {
        let shape = match parts.len() {
            0 => return None,
            1 => CutShape::Single(parts.remove(0)),
            _ => CutShape::Multi(MultiPolygon::new(parts)),
        };
        Some(Self {
            direction,
            shape,
            band_width,
        })
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Width of the band the cut was made with.
    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.band_width
    }

    /// Returns whether the cut produced more than one part.
    #[must_use]
    pub fn is_multi(&self) -> bool {
        matches!(self.shape, CutShape::Multi(_))
    }

    /// Returns the parts in order.
    #[must_use]
    pub fn parts(&self) -> &[Polygon<f64>] {
        match &self.shape {
            CutShape::Single(p) => std::slice::from_ref(p),
            CutShape::Multi(mp) => &mp.0,
        }
    }
}
