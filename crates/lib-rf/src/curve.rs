//! Building the sorted VSWR curve from raw sweep samples.

use crate::reflection::{reflection_coefficient, vswr_from_rho};
use lib_types::{Ohms, SweepSample, VswrCurve, VswrPoint};

/// Transform raw sweep samples into a frequency-sorted VSWR curve.
///
/// The sort key is frequency only and the sort is stable, so samples at
/// exactly equal frequencies keep their post-concatenation merge order.
/// An empty input produces an empty curve (zero sweep files is a valid,
/// trace-less run).
pub fn build_curve(samples: &[SweepSample], z0: Ohms) -> VswrCurve {
    let mut points: Vec<VswrPoint> = samples
        .iter()
        .map(|s| VswrPoint {
            frequency: s.frequency,
            vswr: vswr_from_rho(reflection_coefficient(s.resistance, s.reactance, z0)),
        })
        .collect();

    // +inf is the legitimate total-mismatch sentinel; NaN and anything
    // below 1 means rho left [0, 1].
    let anomalies = points.iter().filter(|p| !(p.vswr >= 1.0)).count();
    if anomalies > 0 {
        tracing::warn!(
            "{} of {} samples produced a VSWR outside [1, inf] (reflection \
             coefficient out of physical range); values passed through unclamped",
            anomalies,
            points.len()
        );
    }

    points.sort_by(|a, b| a.frequency.0.total_cmp(&b.frequency.0));

    VswrCurve::from_sorted(points)
}
