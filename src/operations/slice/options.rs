use crate::error::{OperationError, Result};

/// Band widths tried in order, largest first.
pub const DEFAULT_BAND_WIDTHS: [f64; 3] = [0.01, 0.001, 0.0001];

/// Maximum distance between a fragment edge and the splitter for the
/// fragment to count as bordering the cut.
pub const DEFAULT_OVERLAP_TOLERANCE: f64 = 5e-5;

/// Tuning parameters for polygon slicing.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceOptions {
    band_widths: Vec<f64>,
    overlap_tolerance: f64,
    keep_holes: bool,
}

impl SliceOptions {
    /// Creates validated slice options.
    ///
    /// # Errors
    ///
    /// Returns an error if `band_widths` is empty, not strictly descending,
    /// or contains a non-positive or non-finite width, or if
    /// `overlap_tolerance` is not a positive finite number.
    pub fn new(band_widths: Vec<f64>, overlap_tolerance: f64) -> Result<Self> {
        if band_widths.is_empty() {
            return Err(OperationError::InvalidInput(
                "at least one band width required".to_owned(),
            )
            .into());
        }
        if band_widths.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err(OperationError::InvalidInput(
                "band widths must be positive and finite".to_owned(),
            )
            .into());
        }
        if band_widths.windows(2).any(|w| w[1] >= w[0]) {
            return Err(OperationError::InvalidInput(
                "band widths must be strictly descending".to_owned(),
            )
            .into());
        }
        if !overlap_tolerance.is_finite() || overlap_tolerance <= 0.0 {
            return Err(OperationError::InvalidInput(
                "overlap tolerance must be positive and finite".to_owned(),
            )
            .into());
        }
        Ok(Self {
            band_widths,
            overlap_tolerance,
            keep_holes: false,
        })
    }

    /// Keeps interior rings on output polygons instead of dropping them.
    #[must_use]
    pub fn with_keep_holes(mut self, keep_holes: bool) -> Self {
        self.keep_holes = keep_holes;
        self
    }

    /// Returns the trial band widths, largest first.
    #[must_use]
    pub fn band_widths(&self) -> &[f64] {
        &self.band_widths
    }

    /// Returns the boundary overlap tolerance.
    #[must_use]
    pub fn overlap_tolerance(&self) -> f64 {
        self.overlap_tolerance
    }

    /// Returns whether output polygons keep their holes.
    #[must_use]
    pub fn keep_holes(&self) -> bool {
        self.keep_holes
    }
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self {
            band_widths: DEFAULT_BAND_WIDTHS.to_vec(),
            overlap_tolerance: DEFAULT_OVERLAP_TOLERANCE,
            keep_holes: false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let opts = SliceOptions::default();
        assert_eq!(opts.band_widths(), &DEFAULT_BAND_WIDTHS);
        assert!((opts.overlap_tolerance() - 5e-5).abs() < f64::EPSILON);
        assert!(!opts.keep_holes());
    }

    #[test]
    fn new_with_valid_parameters() {
        let opts = SliceOptions::new(vec![0.5, 0.05], 1e-3).unwrap().with_keep_holes(true);
        assert_eq!(opts.band_widths(), &[0.5, 0.05]);
        assert!(opts.keep_holes());
    }

    #[test]
    fn empty_widths_fail() {
        assert!(SliceOptions::new(Vec::new(), 1e-5).is_err());
    }

    #[test]
    fn ascending_widths_fail() {
        assert!(SliceOptions::new(vec![0.001, 0.01], 1e-5).is_err());
        assert!(SliceOptions::new(vec![0.01, 0.01], 1e-5).is_err());
    }

    #[test]
    fn non_positive_width_fails() {
        assert!(SliceOptions::new(vec![0.01, 0.0], 1e-5).is_err());
        assert!(SliceOptions::new(vec![f64::NAN], 1e-5).is_err());
    }

    #[test]
    fn bad_tolerance_fails() {
        assert!(SliceOptions::new(vec![0.01], 0.0).is_err());
        assert!(SliceOptions::new(vec![0.01], f64::INFINITY).is_err());
    }
}
