//! Page composition: fixed grouping of panels onto three pages.
//!
//! Membership and ordering are catalog properties, declared here as data
//! rather than computed. Page 1 and 2 are portrait detail pages; page 3
//! holds the two landscape overview panels.

use crate::catalog::{
    BAND_10M, BAND_12M, BAND_15M, BAND_160M, BAND_17M, BAND_20M, BAND_2200M, BAND_2M, BAND_30M,
    BAND_40M, BAND_60M, BAND_630M, BAND_6M, BAND_70CM, BAND_80M, OVERVIEW_HF, OVERVIEW_VHF_UHF,
};
use crate::layout::{layout_panel, Panel};
use crate::model::Band;
use lib_types::VswrCurve;

/// Document title, shown above the first panel of page 1.
pub const DOCUMENT_TITLE: &str = "Canadian Band Plan with VSWR  (v.2026.12.24)";

/// Physical orientation of a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// One composed page, ready for the document emitter. Terminal: consumed
/// once, never revisited.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub orientation: Orientation,
    pub panels: Vec<Panel>,
}

static PAGE_ONE: &[&Band] = &[
    &BAND_2200M,
    &BAND_630M,
    &BAND_160M,
    &BAND_80M,
    &BAND_60M,
    &BAND_40M,
    &BAND_30M,
    &BAND_20M,
];

static PAGE_TWO: &[&Band] = &[
    &BAND_17M,
    &BAND_15M,
    &BAND_12M,
    &BAND_10M,
    &BAND_6M,
    &BAND_2M,
    &BAND_70CM,
];

static PAGE_THREE: &[&Band] = &[&OVERVIEW_HF, &OVERVIEW_VHF_UHF];

fn compose(bands: &[&Band], orientation: Orientation, curve: &VswrCurve) -> Page {
    Page {
        orientation,
        panels: bands.iter().map(|b| layout_panel(b, curve)).collect(),
    }
}

/// Lay out the full three-page document against one shared curve.
pub fn compose_pages(curve: &VswrCurve) -> Vec<Page> {
    let mut page_one = compose(PAGE_ONE, Orientation::Portrait, curve);
    // The document title rides on the first panel.
    page_one.panels[0].title = Some(DOCUMENT_TITLE.to_string());

    vec![
        page_one,
        compose(PAGE_TWO, Orientation::Portrait, curve),
        compose(PAGE_THREE, Orientation::Landscape, curve),
    ]
}
