//! # lib-plan
//!
//! The band-plan side of the swr-chart generator:
//!
//! - **Catalog**: the fixed, declarative table of bands, segments, ticks
//!   and label placements
//! - **Layout**: per-band pure panel construction against the shared
//!   VSWR curve
//! - **Pages**: fixed composition of panels onto the three-page document

pub mod catalog;
pub mod layout;
pub mod model;
pub mod pages;

pub use catalog::{validate, ALL_BANDS, DETAIL_BANDS};
pub use layout::{layout_panel, Panel};
pub use model::{Band, Category, Label, Segment, Slot};
pub use pages::{compose_pages, Orientation, Page, DOCUMENT_TITLE};
