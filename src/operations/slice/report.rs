use geo::Polygon;

use crate::error::SliceError;
use crate::geometry::Direction;

/// An output polygon and the directional cut it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    polygon: Polygon<f64>,
    direction: Option<Direction>,
}

impl Fragment {
    /// Creates a fragment; `direction` is `None` for the passthrough polygon.
    #[must_use]
    pub fn new(polygon: Polygon<f64>, direction: Option<Direction>) -> Self {
        Self { polygon, direction }
    }

    #[must_use]
    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    #[must_use]
    pub fn into_polygon(self) -> Polygon<f64> {
        self.polygon
    }
}

/// How a slice ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SliceOutcome {
    /// Both directional cuts succeeded.
    Sliced { upper_width: f64, lower_width: f64 },
    /// The input polygon was returned unchanged.
    ///
    /// `failed` names the directional cut that failed, or is `None` when
    /// slicing was abandoned before any cut.
    Passthrough {
        failed: Option<Direction>,
        error: SliceError,
    },
}

/// Output of a slice together with how it was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceReport {
    fragments: Vec<Fragment>,
    outcome: SliceOutcome,
}

impl SliceReport {
    #[must_use]
    pub fn new(fragments: Vec<Fragment>, outcome: SliceOutcome) -> Self {
        Self { fragments, outcome }
    }

    /// Returns the output fragments in order (upper cut first).
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    #[must_use]
    pub fn outcome(&self) -> &SliceOutcome {
        &self.outcome
    }

    /// Returns whether the polygon was actually cut.
    #[must_use]
    pub fn is_sliced(&self) -> bool {
        matches!(self.outcome, SliceOutcome::Sliced { .. })
    }

    /// Returns the error behind a passthrough, if any.
    #[must_use]
    pub fn error(&self) -> Option<&SliceError> {
        match &self.outcome {
            SliceOutcome::Sliced { .. } => None,
            SliceOutcome::Passthrough { error, .. } => Some(error),
        }
    }

    /// Drops the metadata and returns the output polygons.
    #[must_use]
    pub fn into_polygons(self) -> Vec<Polygon<f64>> {
        self.fragments.into_iter().map(Fragment::into_polygon).collect()
    }
}
