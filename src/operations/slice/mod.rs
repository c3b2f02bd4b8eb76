mod assemble;
mod band;
mod cut;
mod options;
mod report;
#[cfg(test)]
mod test_kernel;
mod trim;

pub use options::{SliceOptions, DEFAULT_BAND_WIDTHS, DEFAULT_OVERLAP_TOLERANCE};
pub use report::{Fragment, SliceOutcome, SliceReport};

use geo::{LineString, Polygon};

use crate::error::OperationError;
use crate::geometry::Direction;
use crate::kernel::{GeoKernel, GeometryKernel};

/// Slices a polygon along a cutting line.
///
/// The splitter is first trimmed to the part that crosses the polygon. A
/// thin band is then built on each side of it and subtracted from the
/// polygon; the fragments bordering the splitter from both sides form the
/// output. Any failure returns the input polygon unchanged, so the output is
/// never empty.
///
/// Output polygons carry exterior rings only unless
/// [`SliceOptions::with_keep_holes`] is set.
#[derive(Debug, Clone)]
pub struct PolygonSlice2D<K = GeoKernel> {
    polygon: Polygon<f64>,
    splitter: LineString<f64>,
    options: SliceOptions,
    kernel: K,
}

impl PolygonSlice2D {
    /// Creates a slice operation with the default kernel and options.
    #[must_use]
    pub fn new(polygon: Polygon<f64>, splitter: LineString<f64>) -> Self {
        Self {
            polygon,
            splitter,
            options: SliceOptions::default(),
            kernel: GeoKernel,
        }
    }
}

impl<K: GeometryKernel> PolygonSlice2D<K> {
    /// Replaces the slice options.
    #[must_use]
    pub fn with_options(mut self, options: SliceOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the geometry kernel.
    #[must_use]
    pub fn with_kernel<K2: GeometryKernel>(self, kernel: K2) -> PolygonSlice2D<K2> {
        PolygonSlice2D {
            polygon: self.polygon,
            splitter: self.splitter,
            options: self.options,
            kernel,
        }
    }

    /// Executes the slice, returning the output polygons.
    #[must_use]
    pub fn execute(&self) -> Vec<Polygon<f64>> {
        self.execute_detailed().into_polygons()
    }

    /// Executes the slice, returning the fragments with their direction
    /// labels and the reason for any fallback.
    #[must_use]
    pub fn execute_detailed(&self) -> SliceReport {
        let Some(line) = trim::apply(&self.kernel, &self.polygon, &self.splitter) else {
            return assemble::passthrough(
                &self.polygon,
                None,
                OperationError::NoInteriorSegment.into(),
                &self.options,
            );
        };

        let [upper, lower] = Direction::ALL
            .map(|direction| cut::execute(&self.kernel, &self.polygon, &line, direction, &self.options));
        assemble::apply(&self.polygon, upper, lower, &self.options)
    }
}

/// Slices `polygon` along `splitter` with the default kernel and options.
#[must_use]
pub fn slice_polygon(polygon: &Polygon<f64>, splitter: &LineString<f64>) -> Vec<Polygon<f64>> {
    PolygonSlice2D::new(polygon.clone(), splitter.clone()).execute()
}
