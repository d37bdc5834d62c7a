//! Sweep-file discovery and multi-file merging.

use crate::error::ParseError;
use crate::format::parse_asd_file;
use lib_types::SweepSample;
use std::path::{Path, PathBuf};

/// File extension the analyzer software writes.
pub const SWEEP_EXTENSION: &str = "asd";

/// List the `.asd` files in a directory, sorted lexicographically by
/// file name.
///
/// The sort makes discovery order (and therefore the merge order of
/// exact-frequency ties) reproducible across runs and platforms.
pub fn discover_sweep_files(dir: &Path) -> Result<Vec<PathBuf>, ParseError> {
    if !dir.is_dir() {
        return Err(ParseError::NotADirectory(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map_or(false, |ext| ext.eq_ignore_ascii_case(SWEEP_EXTENSION))
        })
        .collect();

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Load and concatenate every sweep file in a directory.
///
/// Each later file's samples are placed BEFORE the accumulated earlier
/// ones. The global frequency sort in `lib-rf` makes the final curve
/// independent of this, except for exact-frequency ties, which keep
/// merge order.
///
/// Finding zero sweep files is a warning, not an error: the chart is
/// still useful as a plain band-plan reference without a trace.
pub fn load_sweep_dir(dir: &Path) -> Result<Vec<SweepSample>, ParseError> {
    let files = discover_sweep_files(dir)?;

    if files.is_empty() {
        tracing::warn!("No .{} sweep files found in {:?}", SWEEP_EXTENSION, dir);
        return Ok(Vec::new());
    }

    let mut merged: Vec<SweepSample> = Vec::new();
    for file in &files {
        tracing::info!("Loading sweep file {:?}", file);
        let mut samples = parse_asd_file(file)?;
        tracing::debug!("{} samples in {:?}", samples.len(), file);

        samples.extend(merged);
        merged = samples;
    }

    tracing::info!(
        "Merged {} samples from {} sweep files",
        merged.len(),
        files.len()
    );

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_types::MegaHertz;
    use std::fs;

    struct TempSweepDir(PathBuf);

    impl TempSweepDir {
        fn new(tag: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("asd-{}-{}", tag, std::process::id()));
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn write(&self, name: &str, fq: &[f64]) {
            let measurements: Vec<String> = fq
                .iter()
                .map(|f| format!("{{\"fq\": {}, \"r\": 50.0, \"x\": 0.0}}", f))
                .collect();
            let body = format!("{{\"Measurements\": [{}]}}", measurements.join(","));
            fs::write(self.0.join(name), body).unwrap();
        }
    }

    impl Drop for TempSweepDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_discovery_is_lexicographic_and_filtered() {
        let tmp = TempSweepDir::new("discover");
        tmp.write("b_40m.asd", &[7.0]);
        tmp.write("a_80m.asd", &[3.5]);
        fs::write(tmp.0.join("notes.txt"), "not a sweep").unwrap();

        let files = discover_sweep_files(&tmp.0).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a_80m.asd", "b_40m.asd"]);
    }

    #[test]
    fn test_later_files_are_prepended() {
        let tmp = TempSweepDir::new("merge");
        tmp.write("a.asd", &[1.8, 1.9]);
        tmp.write("b.asd", &[7.0, 7.1]);

        let merged = load_sweep_dir(&tmp.0).unwrap();
        let freqs: Vec<MegaHertz> = merged.iter().map(|s| s.frequency).collect();
        // b.asd is discovered second, so its samples land first.
        assert_eq!(
            freqs,
            vec![
                MegaHertz(7.0),
                MegaHertz(7.1),
                MegaHertz(1.8),
                MegaHertz(1.9)
            ]
        );
    }

    #[test]
    fn test_empty_directory_is_a_warning_not_an_error() {
        let tmp = TempSweepDir::new("empty");
        let merged = load_sweep_dir(&tmp.0).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let missing = std::env::temp_dir().join("asd-does-not-exist-xyzzy");
        assert!(matches!(
            load_sweep_dir(&missing),
            Err(ParseError::NotADirectory(_))
        ));
    }
}
