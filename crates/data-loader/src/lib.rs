//! # Data Loader Crate
//!
//! This crate loads the inputs of a historical similarity analysis: past
//! winners (the reference set), nominees (the candidate set), prior-win counts
//! and an optional bonus weight.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Feature, FeatureRecord, ItemSet, BonusTable, Dataset)
//! - **parser**: Parse JSON dataset files into Rust structs
//! - **loader**: Load + validate a dataset
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_file(Path::new("data/historical_winners.json"))?;
//! let hello = dataset.past_winners.get("Hello").unwrap();
//! println!("{} won in {}", hello.artist, hello.year);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    ItemId,
    CandidateSet,
    ReferenceSet,
    // Core types
    BonusTable,
    CandidateItem,
    Dataset,
    FeatureRecord,
    ItemSet,
    ReferenceItem,
    // Enums
    Feature,
    // Constants
    NEUTRAL_TEMPO_BPM,
    NEUTRAL_UNIT_VALUE,
};
