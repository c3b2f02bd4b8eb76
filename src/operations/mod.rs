pub mod slice;

pub use slice::{slice_polygon, PolygonSlice2D, SliceOptions, SliceOutcome, SliceReport};
