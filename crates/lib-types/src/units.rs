//! Physical units with type safety.
//!
//! These newtypes keep frequencies and impedances from being mixed up
//! with the plain floats used for chart geometry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Frequency in megahertz.
///
/// Antenna analyzers report sweep points in MHz, and every band boundary
/// in the catalog is written in MHz, so this is the base unit of the
/// whole pipeline rather than Hz.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct MegaHertz(pub f64);

impl MegaHertz {
    pub const ZERO: Self = Self(0.0);

    #[inline]
    pub fn from_khz(khz: f64) -> Self {
        Self(khz * 1e-3)
    }

    #[inline]
    pub fn from_hz(hz: f64) -> Self {
        Self(hz * 1e-6)
    }

    #[inline]
    pub fn as_khz(&self) -> f64 {
        self.0 * 1e3
    }

    #[inline]
    pub fn as_hz(&self) -> f64 {
        self.0 * 1e6
    }
}

impl fmt::Display for MegaHertz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} MHz", self.0)
    }
}

impl Add for MegaHertz {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for MegaHertz {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for MegaHertz {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for MegaHertz {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

/// Impedance in Ohms.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Ohms(pub f64);

impl Ohms {
    /// Standard 50 ohm reference impedance.
    pub const Z0_50: Self = Self(50.0);

    /// Standard 75 ohm reference impedance.
    pub const Z0_75: Self = Self(75.0);
}

impl Add for Ohms {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<f64> for Ohms {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_khz_round_trip() {
        let f = MegaHertz::from_khz(1_800.0);
        assert_relative_eq!(f.0, 1.8);
        assert_relative_eq!(f.as_khz(), 1_800.0);
    }

    #[test]
    fn test_hz_conversion() {
        let f = MegaHertz::from_hz(144_390_000.0);
        assert_relative_eq!(f.0, 144.39);
        assert_relative_eq!(f.as_hz(), 144_390_000.0);
    }
}
