//! Dataset loading and validation.
//!
//! Validation belongs here, at ingestion, so the engine downstream never has
//! to reject input:
//! - at least one past winner is required (otherwise there is no best match)
//! - every feature value must be finite
//! - the bonus weight, when given, must be finite and non-negative
//! - prior-win entries for unknown nominees are allowed but logged

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{debug, info, warn};

impl Dataset {
    /// Load and validate a dataset file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading dataset from {:?}", path);

        let dataset = parser::parse_dataset_file(path)?;
        dataset.validate()?;

        let (winners, nominees, bonuses) = dataset.counts();
        info!(
            "Loaded {} past winners, {} nominees, {} prior-win entries",
            winners, nominees, bonuses
        );
        Ok(dataset)
    }

    /// Parse and validate dataset JSON held in memory
    pub fn from_json_str(content: &str) -> Result<Self> {
        let dataset = parser::parse_dataset(content, "<memory>")?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Validate data integrity
    ///
    /// Returns Ok(()) if valid, Err on the first problem found
    pub fn validate(&self) -> Result<()> {
        if self.past_winners.is_empty() {
            return Err(DataLoadError::ValidationError(
                "dataset has no past winners to compare against".to_string(),
            ));
        }

        for (id, item) in self.past_winners.iter() {
            check_features(id, &item.features)?;
        }
        for (id, item) in self.nominees.iter() {
            check_features(id, &item.features)?;
        }

        if let Some(weight) = self.bonus_weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(DataLoadError::InvalidValue {
                    item: "dataset".to_string(),
                    field: "bonus_weight".to_string(),
                    value: weight.to_string(),
                });
            }
        }

        for (id, count) in self.prior_wins.iter() {
            if !self.nominees.contains(id) {
                warn!("Prior-win entry for unknown nominee '{}' ({} wins) is ignored", id, count);
            }
        }

        debug!("Dataset validated");
        Ok(())
    }
}

/// Reject NaN and infinite feature values.
///
/// Out-of-range but finite values (e.g. tempo 200) are legal.
fn check_features(id: &str, record: &FeatureRecord) -> Result<()> {
    for (feature, value) in record.present() {
        if !value.is_finite() {
            return Err(DataLoadError::InvalidValue {
                item: id.to_string(),
                field: feature.name().to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}
