//! Side-by-side feature comparison of one nominee and one past winner.
//!
//! Used for "spotlight" questions such as how close a nominee is to a
//! specific earlier winner by the same artist.

use data_loader::{Feature, FeatureRecord, ItemId};
use serde::Serialize;

/// Absolute difference below which a feature counts as a close match
pub const CLOSE_MATCH_THRESHOLD: f64 = 0.2;

/// Features shown in a comparison table, in display order
pub const COMPARED_FEATURES: [Feature; 4] = [
    Feature::Energy,
    Feature::Valence,
    Feature::Acousticness,
    Feature::Danceability,
];

/// One row of a comparison table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureDelta {
    pub feature: Feature,
    pub nominee: f64,
    pub reference: f64,
    /// `|nominee - reference|`
    pub difference: f64,
}

impl FeatureDelta {
    pub fn is_close(&self) -> bool {
        self.difference < CLOSE_MATCH_THRESHOLD
    }
}

/// Raw (unnormalized) per-feature differences.
///
/// Missing values take the same neutral defaults the engine uses.
pub fn feature_deltas(nominee: &FeatureRecord, reference: &FeatureRecord) -> Vec<FeatureDelta> {
    COMPARED_FEATURES
        .into_iter()
        .map(|feature| {
            let nominee = nominee.value_or_default(feature);
            let reference = reference.value_or_default(feature);
            FeatureDelta {
                feature,
                nominee,
                reference,
                difference: (nominee - reference).abs(),
            }
        })
        .collect()
}

/// A nominee measured against one named past winner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub nominee: ItemId,
    pub reference: ItemId,
    pub reference_year: u16,
    pub similarity: f64,
    pub deltas: Vec<FeatureDelta>,
}

impl Comparison {
    /// Number of features within [`CLOSE_MATCH_THRESHOLD`]
    pub fn close_features(&self) -> usize {
        self.deltas.iter().filter(|delta| delta.is_close()).count()
    }
}
