//! Panel layout: one band plus the shared VSWR curve in, one renderable
//! panel descriptor out.
//!
//! Each panel is built by a pure function with no state shared across
//! bands. The curve is windowed per panel, never recomputed; a band the
//! sweep does not cover simply gets an empty trace.

use crate::model::{Band, Category};
use lib_types::{MegaHertz, VswrCurve};

/// One axis tick: position in data units plus its formatted label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// A filled horizontal bar in panel data coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub category: Category,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub height: f64,
}

/// A text annotation in panel data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    /// Font size in points.
    pub size: f64,
    pub text: String,
}

/// Everything a backend needs to draw one band's chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub name: &'static str,
    pub title: Option<String>,
    pub x_label: Option<&'static str>,
    pub y_label: &'static str,

    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,

    /// Segment bars, in declaration order (painter's algorithm).
    pub bars: Vec<Bar>,
    pub labels: Vec<Text>,

    /// The measured VSWR trace, clipped to the panel's frequency window.
    pub trace: Vec<(f64, f64)>,

    /// Dashed thresholds, already restricted to the visible y range.
    pub reference_lines: Vec<f64>,
}

/// Format one x tick label at the band's fixed decimal precision.
fn format_tick(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Build the panel descriptor for one band.
pub fn layout_panel(band: &Band, curve: &VswrCurve) -> Panel {
    let (lo, hi) = band.domain;
    let (y_lo, y_hi) = band.y_range;

    let x_ticks = band
        .x_ticks
        .iter()
        .map(|&v| Tick {
            value: v,
            label: format_tick(v, band.tick_decimals),
        })
        .collect();

    let y_ticks = band
        .y_ticks
        .iter()
        .map(|&v| Tick {
            value: v,
            label: format!("{}", v),
        })
        .collect();

    let bars = band
        .segments
        .iter()
        .map(|s| Bar {
            category: s.category,
            x0: s.start,
            x1: s.end,
            y0: s.slot.offset,
            height: s.slot.height,
        })
        .collect();

    let labels = band
        .labels
        .iter()
        .map(|l| Text {
            x: l.x,
            y: l.y,
            size: l.size,
            text: l.text.to_string(),
        })
        .collect();

    let trace = curve
        .window(MegaHertz(lo), MegaHertz(hi))
        .iter()
        .map(|p| (p.frequency.0, p.vswr))
        .collect();

    let reference_lines = band
        .reference_lines
        .iter()
        .copied()
        .filter(|&v| v >= y_lo && v <= y_hi)
        .collect();

    Panel {
        name: band.name,
        title: band.title.map(String::from),
        x_label: band.x_label,
        y_label: "VSWR",
        x_range: band.domain,
        y_range: band.y_range,
        x_ticks,
        y_ticks,
        bars,
        labels,
        trace,
        reference_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BAND_160M, BAND_2M, BAND_30M, OVERVIEW_HF};
    use lib_types::{VswrCurve, VswrPoint};

    fn curve(points: &[(f64, f64)]) -> VswrCurve {
        VswrCurve::from_sorted(
            points
                .iter()
                .map(|&(f, v)| VswrPoint {
                    frequency: MegaHertz(f),
                    vswr: v,
                })
                .collect(),
        )
    }

    #[test]
    fn test_empty_curve_still_renders_segments_and_labels() {
        let panel = layout_panel(&BAND_160M, &VswrCurve::default());

        assert!(panel.trace.is_empty());
        assert_eq!(panel.bars.len(), BAND_160M.segments.len());
        assert_eq!(panel.labels.len(), BAND_160M.labels.len());
        assert_eq!(panel.x_ticks.len(), BAND_160M.x_ticks.len());
    }

    #[test]
    fn test_trace_is_windowed_not_recomputed() {
        let c = curve(&[
            (1.7, 3.0),  // below the 160 m window
            (1.85, 1.4),
            (1.95, 1.8),
            (2.5, 9.0),  // above the 160 m window
        ]);
        let panel = layout_panel(&BAND_160M, &c);

        assert_eq!(panel.trace, vec![(1.85, 1.4), (1.95, 1.8)]);
    }

    #[test]
    fn test_tick_labels_use_band_precision() {
        let panel = layout_panel(&BAND_160M, &VswrCurve::default());
        assert_eq!(panel.x_ticks[0].label, "1.800");

        let panel = layout_panel(&BAND_30M, &VswrCurve::default());
        assert_eq!(panel.x_ticks[0].label, "10.10");

        let panel = layout_panel(&OVERVIEW_HF, &VswrCurve::default());
        assert_eq!(panel.x_ticks[1].label, "10");
    }

    #[test]
    fn test_y_tick_labels_trim_trailing_zeros() {
        let panel = layout_panel(&BAND_2M, &VswrCurve::default());
        let labels: Vec<&str> = panel.y_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "1.5", "2"]);
    }

    #[test]
    fn test_reference_lines_clip_to_y_range() {
        // Detail band shows both thresholds.
        let panel = layout_panel(&BAND_160M, &VswrCurve::default());
        assert_eq!(panel.reference_lines, vec![1.0, 3.0]);

        // Magnified band declares 3 but only 1 is inside (0.7, 2.1).
        let panel = layout_panel(&BAND_2M, &VswrCurve::default());
        assert_eq!(panel.reference_lines, vec![1.0]);

        // The HF overview adds the 10 threshold.
        let panel = layout_panel(&OVERVIEW_HF, &VswrCurve::default());
        assert_eq!(panel.reference_lines, vec![1.0, 3.0, 10.0]);
    }

    #[test]
    fn test_infinite_vswr_points_stay_in_the_trace() {
        let c = curve(&[(1.85, f64::INFINITY)]);
        let panel = layout_panel(&BAND_160M, &c);
        assert_eq!(panel.trace.len(), 1);
        assert!(panel.trace[0].1.is_infinite());
    }

    #[test]
    fn test_layout_is_deterministic() {
        let c = curve(&[(1.85, 1.4), (1.95, 1.8)]);
        assert_eq!(layout_panel(&BAND_160M, &c), layout_panel(&BAND_160M, &c));
    }
}
