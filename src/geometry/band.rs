use geo::{LineString, Polygon};

use super::Direction;

/// A thin closed ring approximating the splitter as an area.
///
/// The ring runs along the splitter, back along its offset copy and closes
/// at the splitter's first point. It is always a single ring, but may
/// self-intersect when no trial width produced a simple one.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    ring: LineString<f64>,
    width: f64,
    direction: Direction,
    simple: bool,
}

impl Band {
    /// Creates a band from an already closed ring.
    #[must_use]
    pub fn new(ring: LineString<f64>, width: f64, direction: Direction, simple: bool) -> Self {
        Self {
            ring,
            width,
            direction,
            simple,
        }
    }

    /// Returns the closed ring.
    #[must_use]
    pub fn ring(&self) -> &LineString<f64> {
        &self.ring
    }

    /// Returns the unsigned trial width the band was built with.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the side of the splitter the band lies on.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns whether the ring resolved into exactly one simple part.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.simple
    }

    /// Returns the band as a hole-free polygon, the subtrahend of a cut.
    #[must_use]
    pub fn to_polygon(&self) -> Polygon<f64> {
        Polygon::new(self.ring.clone(), Vec::new())
    }
}
