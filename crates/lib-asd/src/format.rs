//! RigExpert AntScope `.asd` sweep-file parser.
//!
//! An `.asd` file is a single JSON object:
//!
//! ```text
//! {"Measurements": [{"fq": 1.800, "r": 52.3, "x": -4.1}, ...]}
//! ```
//!
//! with `fq` in MHz and `r`/`x` in ohms. Per-file sample order is
//! preserved; the global frequency sort happens later in `lib-rf`.

use crate::error::ParseError;
use lib_types::{MegaHertz, SweepSample};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct AsdFile {
    #[serde(rename = "Measurements")]
    measurements: Vec<AsdMeasurement>,
}

#[derive(Debug, Deserialize)]
struct AsdMeasurement {
    /// Frequency in MHz.
    fq: f64,
    /// Resistance in ohms.
    r: f64,
    /// Reactance in ohms.
    x: f64,
}

/// Parse an `.asd` file from a string.
pub fn parse_asd(content: &str) -> Result<Vec<SweepSample>, ParseError> {
    let file: AsdFile = serde_json::from_str(content)?;

    let mut samples = Vec::with_capacity(file.measurements.len());
    for m in &file.measurements {
        if !m.fq.is_finite() || m.fq < 0.0 {
            return Err(ParseError::invalid_value(
                "fq",
                format!("frequency must be finite and non-negative, got {}", m.fq),
            ));
        }
        samples.push(SweepSample::new(MegaHertz(m.fq), m.r, m.x));
    }

    if samples.is_empty() {
        tracing::warn!("Sweep file contains an empty Measurements list");
    }

    Ok(samples)
}

/// Parse an `.asd` file from a path.
pub fn parse_asd_file(path: &Path) -> Result<Vec<SweepSample>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_asd(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_ASD: &str = r#"{
        "Measurements": [
            {"fq": 1.800, "r": 50.0, "x": 0.0},
            {"fq": 1.900, "r": 25.0, "x": 0.0},
            {"fq": 2.000, "r": 48.7, "x": 12.5}
        ]
    }"#;

    #[test]
    fn test_parse_sample_asd() {
        let samples = parse_asd(SAMPLE_ASD).unwrap();

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].frequency, MegaHertz(1.8));
        assert_eq!(samples[0].resistance, 50.0);
        assert_eq!(samples[2].reactance, 12.5);
    }

    #[test]
    fn test_per_file_order_is_preserved() {
        // Descending sweeps exist in the wild; the loader must not sort.
        let reversed = r#"{"Measurements": [
            {"fq": 2.0, "r": 50.0, "x": 0.0},
            {"fq": 1.8, "r": 50.0, "x": 0.0}
        ]}"#;
        let samples = parse_asd(reversed).unwrap();
        assert_eq!(samples[0].frequency, MegaHertz(2.0));
        assert_eq!(samples[1].frequency, MegaHertz(1.8));
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        assert!(parse_asd("{\"Measurements\": [").is_err());
        assert!(parse_asd("[]").is_err());
    }

    #[test]
    fn test_missing_field_is_fatal() {
        let missing_x = r#"{"Measurements": [{"fq": 1.8, "r": 50.0}]}"#;
        assert!(parse_asd(missing_x).is_err());
    }

    #[test]
    fn test_negative_frequency_rejected() {
        let bad = r#"{"Measurements": [{"fq": -1.8, "r": 50.0, "x": 0.0}]}"#;
        assert!(matches!(
            parse_asd(bad),
            Err(ParseError::InvalidValue { field: "fq", .. })
        ));
    }

    #[test]
    fn test_empty_measurements_is_not_an_error() {
        let samples = parse_asd(r#"{"Measurements": []}"#).unwrap();
        assert!(samples.is_empty());
    }
}
