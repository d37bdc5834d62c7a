//! # lib-types
//!
//! Core type definitions for the swr-chart band plan generator.
//!
//! This crate provides the foundational types shared across the workspace:
//! - Physical units with compile-time safety
//! - Raw sweep samples as read from the analyzer
//! - The derived, frequency-sorted VSWR curve

pub mod curve;
pub mod sweep;
pub mod units;

pub use curve::*;
pub use sweep::*;
pub use units::*;
