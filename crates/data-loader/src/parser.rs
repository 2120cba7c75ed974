//! Parser for dataset files.
//!
//! A dataset file is a single JSON object:
//!
//! ```json
//! {
//!   "past_winners": { "Hello": { "year": 2016, "artist": "Adele", "tempo": 79, "energy": 0.45 } },
//!   "nominees": { "WILDFLOWER": { "artist": "Billie Eilish", "tempo": 105, "energy": 0.25 } },
//!   "prior_wins": { "WILDFLOWER": 2 },
//!   "bonus_weight": 0.15
//! }
//! ```
//!
//! Object key order is preserved, so the order of `past_winners` in the file
//! is the order used for best-match tie-breaks.

use crate::error::{DataLoadError, Result};
use crate::types::Dataset;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read and parse a dataset file
pub fn parse_dataset_file(path: &Path) -> Result<Dataset> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_dataset(&content, &file_name)
}

/// Parse dataset JSON held in memory
///
/// `file` is only used to label parse errors.
pub fn parse_dataset(content: &str, file: &str) -> Result<Dataset> {
    serde_json::from_str(content).map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line: e.line(),
        column: e.column(),
        reason: e.to_string(),
    })
}
