use thiserror::Error;

use crate::geometry::Direction;

/// Top-level error type for polygon slicing.
///
/// None of these ever reach the caller of the slicing operation itself; they
/// are folded into the passthrough fallback and reported through
/// [`crate::operations::slice::SliceReport`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliceError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to the shape of input geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{kind} has {count} coordinates, at least {min} required")]
    TooFewCoordinates {
        kind: &'static str,
        count: usize,
        min: usize,
    },

    #[error("{kind} contains a non-finite coordinate")]
    NonFinite { kind: &'static str },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised by a geometry kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    #[error("line offset failed: {0}")]
    OffsetFailed(String),

    #[error("boolean difference failed: {0}")]
    DifferenceFailed(String),
}

/// Errors related to the slicing pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("trimmed splitter has fewer than 2 points")]
    NoInteriorSegment,

    #[error("splitter crosses the polygon boundary {count} times, an even nonzero count is required")]
    CrossingParity { count: usize },

    #[error("no {direction} fragment borders the splitter")]
    NoFragments { direction: Direction },
}

/// Convenience type alias for results using [`SliceError`].
pub type Result<T> = std::result::Result<T, SliceError>;
