use geo::Polygon;
use tracing::debug;

use super::options::SliceOptions;
use super::report::{Fragment, SliceOutcome, SliceReport};
use crate::error::{Result, SliceError};
use crate::geometry::{exterior_only, CutResult, Direction};

/// Combines both directional cuts into the final polygon set.
///
/// Slicing is all-or-nothing: if either cut failed, the output is the input
/// polygon alone. The upper cut's error wins when both failed.
#[must_use]
pub fn apply(
    polygon: &Polygon<f64>,
    upper: Result<CutResult>,
    lower: Result<CutResult>,
    options: &SliceOptions,
) -> SliceReport {
    match (upper, lower) {
        (Ok(upper), Ok(lower)) => {
            let fragments = [&upper, &lower]
                .into_iter()
                .flat_map(|cut| {
                    cut.parts()
                        .iter()
                        .map(move |part| Fragment::new(finish(part, options), Some(cut.direction())))
                })
                .collect();
            let outcome = SliceOutcome::Sliced {
                upper_width: upper.band_width(),
                lower_width: lower.band_width(),
            };
            SliceReport::new(fragments, outcome)
        }
        (Err(error), _) => passthrough(polygon, Some(Direction::Upper), error, options),
        (_, Err(error)) => passthrough(polygon, Some(Direction::Lower), error, options),
    }
}

/// Returns the input polygon alone, recording why it was not sliced.
#[must_use]
pub fn passthrough(
    polygon: &Polygon<f64>,
    failed: Option<Direction>,
    error: SliceError,
    options: &SliceOptions,
) -> SliceReport {
    match failed {
        Some(direction) => debug!(%direction, %error, "directional cut failed, returning input"),
        None => debug!(%error, "slice abandoned, returning input"),
    }
    SliceReport::new(
        vec![Fragment::new(finish(polygon, options), None)],
        SliceOutcome::Passthrough { failed, error },
    )
}

fn finish(polygon: &Polygon<f64>, options: &SliceOptions) -> Polygon<f64> {
    if options.keep_holes() {
        polygon.clone()
    } else {
        exterior_only(polygon)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::OperationError;
    use geo::polygon;

    fn holed_square() -> Polygon<f64> {
        polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 2.0), (x: 1.0, y: 2.0)]],
        )
    }

    fn half(x0: f64, x1: f64) -> Polygon<f64> {
        polygon![(x: x0, y: 0.0), (x: x1, y: 0.0), (x: x1, y: 10.0), (x: x0, y: 10.0)]
    }

    fn cut(parts: Vec<Polygon<f64>>, direction: Direction) -> Result<CutResult> {
        Ok(CutResult::from_parts(parts, direction, 0.01).unwrap())
    }

    fn failed(direction: Direction) -> Result<CutResult> {
        Err(OperationError::NoFragments { direction }.into())
    }

    #[test]
    fn both_succeeded_flattens_upper_then_lower() {
        let report = apply(
            &holed_square(),
            cut(vec![half(0.0, 5.0)], Direction::Upper),
            cut(vec![half(5.0, 7.0), half(8.0, 10.0)], Direction::Lower),
            &SliceOptions::default(),
        );
        assert!(report.is_sliced());
        let dirs: Vec<_> = report.fragments().iter().map(Fragment::direction).collect();
        assert_eq!(
            dirs,
            vec![Some(Direction::Upper), Some(Direction::Lower), Some(Direction::Lower)]
        );
        assert_eq!(report.into_polygons()[1], half(5.0, 7.0));
    }

    #[test]
    fn fragment_holes_are_dropped() {
        let report = apply(
            &half(0.0, 10.0),
            cut(vec![holed_square()], Direction::Upper),
            cut(vec![half(5.0, 10.0)], Direction::Lower),
            &SliceOptions::default(),
        );
        assert!(report.fragments()[0].polygon().interiors().is_empty());
    }

    #[test]
    fn fragment_holes_kept_on_request() {
        let report = apply(
            &half(0.0, 10.0),
            cut(vec![holed_square()], Direction::Upper),
            cut(vec![half(5.0, 10.0)], Direction::Lower),
            &SliceOptions::default().with_keep_holes(true),
        );
        assert_eq!(report.fragments()[0].polygon().interiors().len(), 1);
    }

    #[test]
    fn one_failure_returns_input_exterior() {
        let report = apply(
            &holed_square(),
            cut(vec![half(0.0, 5.0)], Direction::Upper),
            failed(Direction::Lower),
            &SliceOptions::default(),
        );
        assert!(!report.is_sliced());
        assert_eq!(report.fragments().len(), 1);
        assert_eq!(report.fragments()[0].direction(), None);
        assert_eq!(
            report.outcome(),
            &SliceOutcome::Passthrough {
                failed: Some(Direction::Lower),
                error: OperationError::NoFragments {
                    direction: Direction::Lower
                }
                .into(),
            }
        );
        let polys = report.into_polygons();
        assert_eq!(polys[0].exterior(), holed_square().exterior());
        assert!(polys[0].interiors().is_empty());
    }

    #[test]
    fn upper_error_reported_first() {
        let report = apply(
            &holed_square(),
            failed(Direction::Upper),
            failed(Direction::Lower),
            &SliceOptions::default(),
        );
        assert!(matches!(
            report.outcome(),
            SliceOutcome::Passthrough {
                failed: Some(Direction::Upper),
                ..
            }
        ));
    }
}
