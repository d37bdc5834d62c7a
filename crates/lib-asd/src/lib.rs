//! # lib-asd
//!
//! Measurement loading for the swr-chart band plan generator.
//!
//! Reads RigExpert AntScope `.asd` sweep files (JSON) and merges any
//! number of them into one raw sample list, ready for the VSWR transform
//! in `lib-rf`.

pub mod discover;
pub mod error;
pub mod format;

pub use discover::{discover_sweep_files, load_sweep_dir, SWEEP_EXTENSION};
pub use error::ParseError;
pub use format::{parse_asd, parse_asd_file};
