//! The derived VSWR curve.
//!
//! A [`VswrCurve`] is produced once per run by `lib-rf` and then shared
//! read-only by every panel that overlays it. Points are sorted ascending
//! by frequency; exact-frequency ties are allowed and keep their merge
//! order, they are never deduplicated.

use crate::units::MegaHertz;
use serde::{Deserialize, Serialize};

/// One point of the measured VSWR curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VswrPoint {
    /// Swept frequency.
    pub frequency: MegaHertz,

    /// Standing-wave ratio at that frequency. `>= 1` for clean data;
    /// `+inf` for a total mismatch (open/short), negative or NaN only
    /// when the underlying measurement was out of physical range.
    pub vswr: f64,
}

/// A frequency-sorted VSWR curve.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VswrCurve {
    points: Vec<VswrPoint>,
}

impl VswrCurve {
    /// Wrap an already-sorted point list.
    ///
    /// Callers are expected to have sorted by frequency; this is checked
    /// in debug builds only.
    pub fn from_sorted(points: Vec<VswrPoint>) -> Self {
        debug_assert!(
            points
                .windows(2)
                .all(|w| w[0].frequency.0 <= w[1].frequency.0),
            "VswrCurve points must be sorted by frequency"
        );
        Self { points }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points, sorted ascending by frequency.
    pub fn points(&self) -> &[VswrPoint] {
        &self.points
    }

    /// Frequency range covered by the sweep.
    pub fn frequency_range(&self) -> Option<(MegaHertz, MegaHertz)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.frequency, last.frequency)),
            _ => None,
        }
    }

    /// The sub-slice of points whose frequency lies in `[lo, hi]`.
    ///
    /// Returns an empty slice when the sweep does not cover the window,
    /// which is a normal outcome (a band the antenna was never swept in),
    /// not an error.
    pub fn window(&self, lo: MegaHertz, hi: MegaHertz) -> &[VswrPoint] {
        let start = self.points.partition_point(|p| p.frequency.0 < lo.0);
        let end = self.points.partition_point(|p| p.frequency.0 <= hi.0);
        if start >= end {
            return &[];
        }
        &self.points[start..end]
    }

    /// The best-matched point (lowest finite VSWR) in `[lo, hi]`.
    pub fn minimum_in(&self, lo: MegaHertz, hi: MegaHertz) -> Option<VswrPoint> {
        self.window(lo, hi)
            .iter()
            .filter(|p| p.vswr.is_finite())
            .copied()
            .min_by(|a, b| a.vswr.total_cmp(&b.vswr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> VswrCurve {
        VswrCurve::from_sorted(vec![
            VswrPoint { frequency: MegaHertz(1.8), vswr: 2.5 },
            VswrPoint { frequency: MegaHertz(1.9), vswr: 1.2 },
            VswrPoint { frequency: MegaHertz(2.0), vswr: 1.9 },
            VswrPoint { frequency: MegaHertz(7.1), vswr: f64::INFINITY },
        ])
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let c = curve();
        let w = c.window(MegaHertz(1.9), MegaHertz(2.0));
        assert_eq!(w.len(), 2);
        assert_eq!(w[0].frequency, MegaHertz(1.9));
        assert_eq!(w[1].frequency, MegaHertz(2.0));
    }

    #[test]
    fn test_window_outside_sweep_is_empty() {
        let c = curve();
        assert!(c.window(MegaHertz(430.0), MegaHertz(450.0)).is_empty());
        assert!(c.minimum_in(MegaHertz(430.0), MegaHertz(450.0)).is_none());
    }

    #[test]
    fn test_minimum_skips_infinite_points() {
        let c = curve();
        let best = c.minimum_in(MegaHertz(0.0), MegaHertz(500.0)).unwrap();
        assert_eq!(best.frequency, MegaHertz(1.9));

        // A window holding only the infinite point has no finite minimum.
        assert!(c.minimum_in(MegaHertz(7.0), MegaHertz(7.2)).is_none());
    }

    #[test]
    fn test_empty_curve() {
        let c = VswrCurve::default();
        assert!(c.is_empty());
        assert!(c.frequency_range().is_none());
        assert!(c.window(MegaHertz(0.0), MegaHertz(500.0)).is_empty());
    }
}
