//! Reflection coefficient and VSWR transforms.
//!
//! For a load `Z = R + jX` against a real reference impedance `Z0`, the
//! reflection coefficient magnitude is
//!
//! ```text
//! rho = |Z - Z0| / |Z + Z0|
//!     = sqrt(((R - Z0)^2 + X^2) / ((R + Z0)^2 + X^2))
//! ```
//!
//! and the standing-wave ratio is `VSWR = (1 + rho) / (1 - rho)`.
//!
//! For passive loads `rho` lies in `[0, 1]`. `rho = 1` (open or short)
//! makes the VSWR quotient divide by zero, which in IEEE arithmetic is
//! `+inf` — that is the defined "infinite VSWR" sentinel, not an error;
//! plotting simply clips it to the axis. Measurement noise near a short
//! can push `rho` slightly above 1; that is a data-quality condition and
//! is passed through unclamped (the resulting VSWR goes negative), so
//! callers can see it rather than have it silently corrected.

use crate::error::{RfError, RfResult};
use lib_types::Ohms;
use num_complex::Complex64;

/// Reflection coefficient magnitude for a single load impedance.
#[inline]
pub fn reflection_coefficient(resistance: f64, reactance: f64, z0: Ohms) -> f64 {
    let z = Complex64::new(resistance, reactance);
    let z0 = Complex64::new(z0.0, 0.0);
    (z - z0).norm() / (z + z0).norm()
}

/// Elementwise reflection coefficient magnitudes for paired R/X arrays.
pub fn reflection_magnitude(
    resistance: &[f64],
    reactance: &[f64],
    z0: Ohms,
) -> RfResult<Vec<f64>> {
    if resistance.len() != reactance.len() {
        return Err(RfError::LengthMismatch {
            expected: resistance.len(),
            actual: reactance.len(),
        });
    }

    Ok(resistance
        .iter()
        .zip(reactance)
        .map(|(&r, &x)| reflection_coefficient(r, x, z0))
        .collect())
}

/// VSWR from a reflection coefficient magnitude.
#[inline]
pub fn vswr_from_rho(rho: f64) -> f64 {
    (1.0 + rho) / (1.0 - rho)
}

/// Elementwise VSWR from reflection coefficient magnitudes.
pub fn vswr_from_reflection(rho: &[f64]) -> Vec<f64> {
    rho.iter().map(|&r| vswr_from_rho(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matched_load_is_unity() {
        let rho = reflection_coefficient(50.0, 0.0, Ohms::Z0_50);
        assert_relative_eq!(rho, 0.0);
        assert_relative_eq!(vswr_from_rho(rho), 1.0);
    }

    #[test]
    fn test_resistive_mismatch() {
        // R = 25, X = 0: rho = 25/75 = 1/3, VSWR = (4/3)/(2/3) = 2.
        let rho = reflection_coefficient(25.0, 0.0, Ohms::Z0_50);
        assert_relative_eq!(rho, 1.0 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(vswr_from_rho(rho), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_short_circuit_is_infinite() {
        // A dead short: rho = 1 exactly, VSWR = +inf sentinel.
        let rho = reflection_coefficient(0.0, 0.0, Ohms::Z0_50);
        assert_relative_eq!(rho, 1.0);
        assert_eq!(vswr_from_rho(rho), f64::INFINITY);
    }

    #[test]
    fn test_reactive_load() {
        // Purely reactive load (R = 0, X = 50): |Z-Z0| = |Z+Z0|, rho = 1.
        let rho = reflection_coefficient(0.0, 50.0, Ohms::Z0_50);
        assert_relative_eq!(rho, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_out_of_range_rho_passes_through() {
        // Negative resistance is not a passive load; rho > 1 and the
        // VSWR goes negative. Surfaced, not clamped.
        let rho = reflection_coefficient(-10.0, 0.0, Ohms::Z0_50);
        assert!(rho > 1.0);
        assert!(vswr_from_rho(rho) < 0.0);
    }

    #[test]
    fn test_length_mismatch_is_reported() {
        let err = reflection_magnitude(&[50.0, 25.0], &[0.0], Ohms::Z0_50);
        assert!(matches!(
            err,
            Err(RfError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }
}
