//! Feature vector construction.
//!
//! Turns a [`FeatureRecord`] into the fixed five-dimensional vector the
//! similarity engine works on. Building is total: missing features take their
//! neutral default and nothing is clamped.

use data_loader::{Feature, FeatureRecord};
use serde::Serialize;

/// Number of dimensions in a feature vector
pub const DIMENSIONS: usize = Feature::SCHEMA.len();

/// Tempo mapped to 0.0
pub const TEMPO_FLOOR_BPM: f64 = 60.0;

/// Tempo range mapped onto one unit (60 BPM -> 0.0, 180 BPM -> 1.0)
pub const TEMPO_SPAN_BPM: f64 = 120.0;

/// Map a tempo in BPM onto a unit-ish scale.
///
/// Values outside 60-180 BPM land outside [0, 1]; that is allowed.
pub fn normalize_tempo(bpm: f64) -> f64 {
    (bpm - TEMPO_FLOOR_BPM) / TEMPO_SPAN_BPM
}

/// Normalize a raw value of one feature
pub fn normalize(feature: Feature, raw: f64) -> f64 {
    match feature {
        Feature::Tempo => normalize_tempo(raw),
        _ => raw,
    }
}

/// Normalized feature values in [`Feature::SCHEMA`] order:
/// energy, valence, danceability, acousticness, tempo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector([f64; DIMENSIONS]);

impl FeatureVector {
    /// Wrap already-normalized values
    pub fn new(values: [f64; DIMENSIONS]) -> Self {
        Self(values)
    }

    /// Build a vector from a record, substituting defaults before normalizing
    pub fn from_record(record: &FeatureRecord) -> Self {
        let mut values = [0.0; DIMENSIONS];
        for (value, feature) in values.iter_mut().zip(Feature::SCHEMA) {
            *value = normalize(feature, record.value_or_default(feature));
        }
        Self(values)
    }

    pub fn values(&self) -> &[f64; DIMENSIONS] {
        &self.0
    }

    /// Normalized value of one feature
    pub fn get(&self, feature: Feature) -> f64 {
        self.0[slot(feature)]
    }

    pub fn dot(&self, other: &FeatureVector) -> f64 {
        self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
    }

    /// Euclidean (L2) norm
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }
}

/// Position of a feature in [`Feature::SCHEMA`]
fn slot(feature: Feature) -> usize {
    match feature {
        Feature::Energy => 0,
        Feature::Valence => 1,
        Feature::Danceability => 2,
        Feature::Acousticness => 3,
        Feature::Tempo => 4,
    }
}

impl From<&FeatureRecord> for FeatureVector {
    fn from(record: &FeatureRecord) -> Self {
        Self::from_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tempo() {
        assert_eq!(normalize_tempo(60.0), 0.0);
        assert_eq!(normalize_tempo(120.0), 0.5);
        assert_eq!(normalize_tempo(180.0), 1.0);
        // No clamping outside the nominal range
        assert_eq!(normalize_tempo(240.0), 1.5);
        assert_eq!(normalize_tempo(30.0), -0.25);
    }

    #[test]
    fn test_vector_order() {
        let record = FeatureRecord::new()
            .with(Feature::Energy, 0.1)
            .with(Feature::Valence, 0.2)
            .with(Feature::Danceability, 0.3)
            .with(Feature::Acousticness, 0.4)
            .with(Feature::Tempo, 120.0);

        let vector = FeatureVector::from_record(&record);
        assert_eq!(vector.values(), &[0.1, 0.2, 0.3, 0.4, 0.5]);
        assert_eq!(vector.get(Feature::Acousticness), 0.4);
        assert_eq!(vector.get(Feature::Tempo), 0.5);
    }

    #[test]
    fn test_empty_record_uses_defaults() {
        let vector = FeatureVector::from_record(&FeatureRecord::new());
        // Default tempo (120 BPM) normalizes to 0.5 as well
        assert_eq!(vector.values(), &[0.5; DIMENSIONS]);
    }

    #[test]
    fn test_missing_feature_equals_explicit_default() {
        let base = FeatureRecord::new()
            .with(Feature::Energy, 0.7)
            .with(Feature::Tempo, 95.0);

        let explicit = base.with(Feature::Valence, 0.5);
        assert_eq!(
            FeatureVector::from_record(&base),
            FeatureVector::from_record(&explicit)
        );
    }

    #[test]
    fn test_slots_match_schema() {
        for (idx, feature) in Feature::SCHEMA.into_iter().enumerate() {
            assert_eq!(slot(feature), idx);
        }
    }

    #[test]
    fn test_norm_and_dot() {
        let v = FeatureVector::new([3.0, 4.0, 0.0, 0.0, 0.0]);
        assert_eq!(v.norm(), 5.0);
        assert_eq!(v.dot(&FeatureVector::new([1.0, 1.0, 1.0, 1.0, 1.0])), 7.0);
    }
}
