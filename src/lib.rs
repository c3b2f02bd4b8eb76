pub mod error;
pub mod geometry;
pub mod kernel;
pub mod math;
pub mod operations;

pub use error::{Result, SliceError};
pub use operations::{slice_polygon, PolygonSlice2D, SliceOptions, SliceOutcome, SliceReport};
