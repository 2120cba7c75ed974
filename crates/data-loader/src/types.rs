//! Core domain types for historical similarity analysis.
//!
//! - [`Feature`] is the closed schema of audio features
//! - [`FeatureRecord`] holds the (possibly partial) feature values of one song
//! - [`ItemSet`] is an insertion-ordered collection of songs keyed by title
//! - [`BonusTable`] counts prior wins per nominee
//! - [`Dataset`] bundles everything read from a dataset file

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a song (its title, e.g. "bad guy")
pub type ItemId = String;

// =============================================================================
// Feature Schema
// =============================================================================

/// Neutral value substituted for a missing unit-interval feature
pub const NEUTRAL_UNIT_VALUE: f64 = 0.5;

/// Neutral tempo (BPM) substituted when a record has no tempo
pub const NEUTRAL_TEMPO_BPM: f64 = 120.0;

/// Audio features understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Energy,
    Valence,
    Danceability,
    Acousticness,
    /// Beats per minute, practically 40-220
    Tempo,
}

impl Feature {
    /// Fixed vector order used by the similarity engine
    pub const SCHEMA: [Feature; 5] = [
        Feature::Energy,
        Feature::Valence,
        Feature::Danceability,
        Feature::Acousticness,
        Feature::Tempo,
    ];

    /// Order in which features are listed in exported reports
    pub const REPORTED: [Feature; 5] = [
        Feature::Tempo,
        Feature::Energy,
        Feature::Valence,
        Feature::Danceability,
        Feature::Acousticness,
    ];

    /// Field name as it appears in dataset files and reports
    pub fn name(self) -> &'static str {
        match self {
            Feature::Energy => "energy",
            Feature::Valence => "valence",
            Feature::Danceability => "danceability",
            Feature::Acousticness => "acousticness",
            Feature::Tempo => "tempo",
        }
    }

    /// Value used when a record does not carry this feature
    pub fn default_value(self) -> f64 {
        match self {
            Feature::Tempo => NEUTRAL_TEMPO_BPM,
            _ => NEUTRAL_UNIT_VALUE,
        }
    }

    /// True for the four features that live in [0, 1]
    pub fn is_unit_interval(self) -> bool {
        !matches!(self, Feature::Tempo)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Feature Records
// =============================================================================

/// Raw feature values of one song.
///
/// Every feature is optional. Nothing here enforces ranges; a missing value
/// is resolved to [`Feature::default_value`] by whoever reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danceability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acousticness: Option<f64>,
}

impl FeatureRecord {
    /// Creates a record with no features set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this record with `feature` set (builder pattern)
    pub fn with(mut self, feature: Feature, value: f64) -> Self {
        *self.slot_mut(feature) = Some(value);
        self
    }

    /// Returns the raw value of a feature, if present
    pub fn get(&self, feature: Feature) -> Option<f64> {
        match feature {
            Feature::Energy => self.energy,
            Feature::Valence => self.valence,
            Feature::Danceability => self.danceability,
            Feature::Acousticness => self.acousticness,
            Feature::Tempo => self.tempo,
        }
    }

    /// Returns the value of a feature, falling back to its neutral default
    pub fn value_or_default(&self, feature: Feature) -> f64 {
        self.get(feature).unwrap_or_else(|| feature.default_value())
    }

    /// Iterates over the features that are actually present
    pub fn present(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::SCHEMA
            .into_iter()
            .filter_map(|feature| self.get(feature).map(|value| (feature, value)))
    }

    fn slot_mut(&mut self, feature: Feature) -> &mut Option<f64> {
        match feature {
            Feature::Energy => &mut self.energy,
            Feature::Valence => &mut self.valence,
            Feature::Danceability => &mut self.danceability,
            Feature::Acousticness => &mut self.acousticness,
            Feature::Tempo => &mut self.tempo,
        }
    }
}

impl AsRef<FeatureRecord> for FeatureRecord {
    fn as_ref(&self) -> &FeatureRecord {
        self
    }
}

// =============================================================================
// Songs
// =============================================================================

/// A past winner: features plus the year and artist it is reported with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceItem {
    pub year: u16,
    pub artist: String,
    #[serde(flatten)]
    pub features: FeatureRecord,
}

impl AsRef<FeatureRecord> for ReferenceItem {
    fn as_ref(&self) -> &FeatureRecord {
        &self.features
    }
}

/// A nominee being ranked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateItem {
    pub artist: String,
    #[serde(flatten)]
    pub features: FeatureRecord,
}

impl AsRef<FeatureRecord> for CandidateItem {
    fn as_ref(&self) -> &FeatureRecord {
        &self.features
    }
}

/// Insertion-ordered set of songs keyed by title.
///
/// Iteration order is the order the songs were inserted (or appear in the
/// dataset file). Best-match tie-breaks depend on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemSet<T> {
    items: IndexMap<ItemId, T>,
}

/// Past winners, in reference order
pub type ReferenceSet = ItemSet<ReferenceItem>;

/// Nominees, in input order
pub type CandidateSet = ItemSet<CandidateItem>;

impl<T> ItemSet<T> {
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    /// Adds a song at the end of the set (builder pattern).
    ///
    /// Re-using an id replaces the earlier entry but keeps its position.
    pub fn with(mut self, id: impl Into<ItemId>, item: T) -> Self {
        self.items.insert(id.into(), item);
        self
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &T)> {
        self.items.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.keys()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for ItemSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Into<ItemId>> FromIterator<(K, T)> for ItemSet<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|(id, item)| (id.into(), item)).collect(),
        }
    }
}

// =============================================================================
// Bonus Table
// =============================================================================

/// Prior win counts per nominee.
///
/// Nominees without an entry have zero prior wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BonusTable {
    counts: IndexMap<ItemId, u32>,
}

impl BonusTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the count for a nominee (builder pattern)
    pub fn with(mut self, id: impl Into<ItemId>, count: u32) -> Self {
        self.counts.insert(id.into(), count);
        self
    }

    /// Count for a nominee, 0 when the table has no entry
    pub fn count(&self, id: &str) -> u32 {
        self.counts.get(id).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, u32)> {
        self.counts.iter().map(|(id, &count)| (id, count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<K: Into<ItemId>> FromIterator<(K, u32)> for BonusTable {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(id, count)| (id.into(), count)).collect(),
        }
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// Everything one analysis run needs, as read from a dataset file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub past_winners: ReferenceSet,
    pub nominees: CandidateSet,
    #[serde(default)]
    pub prior_wins: BonusTable,
    /// Overrides the default bonus weight when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_weight: Option<f64>,
}

impl Dataset {
    pub fn new(past_winners: ReferenceSet, nominees: CandidateSet, prior_wins: BonusTable) -> Self {
        Self {
            past_winners,
            nominees,
            prior_wins,
            bonus_weight: None,
        }
    }

    /// Counts for debugging/validation: (past winners, nominees, bonus entries)
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.past_winners.len(),
            self.nominees.len(),
            self.prior_wins.len(),
        )
    }
}
