//! Raw antenna-analyzer sweep samples.

use crate::units::MegaHertz;
use serde::{Deserialize, Serialize};

/// One measured point of a frequency sweep.
///
/// The analyzer reports the load impedance `Z = R + jX` at each swept
/// frequency. Samples are immutable once loaded; ordering within a file
/// is only significant until the global sort into a [`crate::VswrCurve`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepSample {
    /// Swept frequency.
    pub frequency: MegaHertz,

    /// Load resistance in ohms (real part of Z).
    pub resistance: f64,

    /// Load reactance in ohms (imaginary part of Z).
    pub reactance: f64,
}

impl SweepSample {
    pub fn new(frequency: MegaHertz, resistance: f64, reactance: f64) -> Self {
        Self {
            frequency,
            resistance,
            reactance,
        }
    }
}
