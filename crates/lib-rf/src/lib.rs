//! # lib-rf
//!
//! The numeric core of the swr-chart band plan generator:
//!
//! - **Reflection coefficient**: `|Z - Z0| / |Z + Z0|` for each sweep point
//! - **VSWR transform**: `(1 + rho) / (1 - rho)` with an infinite-VSWR
//!   sentinel at total mismatch
//! - **Curve assembly**: global merge + stable frequency sort

pub mod curve;
pub mod error;
pub mod reflection;

pub use curve::build_curve;
pub use error::{RfError, RfResult};
pub use reflection::{reflection_coefficient, reflection_magnitude, vswr_from_reflection, vswr_from_rho};
