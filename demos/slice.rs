//! Slices a few shapes and prints the fragments.
//!
//! ```text
//! cargo run --example slice
//! RUST_LOG=polyslice=trace cargo run --example slice
//! ```

use geo::{line_string, polygon, Area, LineString, Polygon};
use polyslice::{PolygonSlice2D, SliceOutcome};

fn main() {
    // Default: WARN for everything, INFO for polyslice.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("polyslice=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let square = polygon![
        (x: 0.0, y: 0.0),
        (x: 10.0, y: 0.0),
        (x: 10.0, y: 10.0),
        (x: 0.0, y: 10.0),
    ];

    let cases: [(&str, Polygon<f64>, LineString<f64>); 3] = [
        (
            "bisect",
            square.clone(),
            line_string![(x: 5.0, y: 15.0), (x: 5.0, y: -15.0)],
        ),
        (
            "tangent",
            square.clone(),
            line_string![(x: 5.0, y: 15.0), (x: 15.0, y: 5.0)],
        ),
        (
            "interior",
            square,
            line_string![(x: 2.0, y: 2.0), (x: 8.0, y: 8.0)],
        ),
    ];

    for (name, polygon, splitter) in cases {
        let report = PolygonSlice2D::new(polygon, splitter).execute_detailed();
        match report.outcome() {
            SliceOutcome::Sliced {
                upper_width,
                lower_width,
            } => println!("{name}: sliced (bands {upper_width} / {lower_width})"),
            SliceOutcome::Passthrough { error, .. } => println!("{name}: unchanged ({error})"),
        }
        for fragment in report.fragments() {
            let side = fragment
                .direction()
                .map_or_else(|| "input".to_owned(), |d| d.to_string());
            println!(
                "  {side:>5}  area={:.4}  vertices={}",
                fragment.polygon().unsigned_area(),
                fragment.polygon().exterior().0.len()
            );
        }
    }
}
