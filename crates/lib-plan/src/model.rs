//! Declarative band-plan records.
//!
//! Everything here is static regulatory/allocation knowledge, defined once
//! in the catalog and never mutated. Frequencies are MHz on the x axis;
//! the y axis is in panel data units (VSWR for the chart range, so bars
//! and labels can sit below 1 or above the trace).

/// Allocation category of a segment. Chooses the fill color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Cw,
    Digital,
    Phone,
    Television,
    Beacon,
    Miscellaneous,
    Unallocated,
    Overview,
}

/// The horizontal stripe of a panel a segment occupies.
///
/// Segments of one band may overlap in frequency but stack in distinct
/// slots (e.g. CW over Phone over Digital within each 60 m channel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    /// Bottom edge, in panel data units.
    pub offset: f64,
    /// Stripe height, in panel data units.
    pub height: f64,
}

/// One labeled, colored frequency sub-range within a band.
///
/// Segments may overlap in frequency; overlap is resolved purely by
/// declaration order (later segments paint over earlier ones in the same
/// slot).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub category: Category,
    /// Painted extent in MHz; `start <= end`, both inside the band domain
    /// (small intentional overdraw at the edges is tolerated).
    pub start: f64,
    pub end: f64,
    pub slot: Slot,
}

/// A text annotation at an explicit position.
///
/// Positions are data, not derived: every label was placed by hand for
/// its band's scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    /// Anchor in MHz.
    pub x: f64,
    /// Anchor in panel data units.
    pub y: f64,
    /// Font size in points.
    pub size: f64,
    pub text: &'static str,
}

/// One band of the plan: a panel's worth of catalog data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub name: &'static str,

    /// Panel caption, used by the overview panels.
    pub title: Option<&'static str>,

    /// X-axis caption, used by the overview panels.
    pub x_label: Option<&'static str>,

    /// Visible frequency window in MHz, possibly wider than the union of
    /// the segments to leave margin.
    pub domain: (f64, f64),

    /// Vertical axis range. Detail bands use (-1, 10); the 2 m / 70 cm
    /// panels magnify (0.7, 2.1) because a working antenna stays near 1.
    pub y_range: (f64, f64),

    pub y_ticks: &'static [f64],

    /// Explicit tick positions: every boundary that matters gets one.
    pub x_ticks: &'static [f64],

    /// Decimal places for the x tick labels; fixed per band, not derived
    /// from magnitude.
    pub tick_decimals: usize,

    /// VSWR thresholds to draw as dashed horizontal lines. Lines outside
    /// `y_range` are declared but clipped at layout time.
    pub reference_lines: &'static [f64],

    pub segments: &'static [Segment],
    pub labels: &'static [Label],
}
