//! Cosine similarity between feature vectors.
//!
//! ## Algorithm
//! cosine(A, B) = (A · B) / (‖A‖ · ‖B‖)
//!
//! When either vector has zero norm the score is [`ZERO_NORM_FALLBACK`]
//! instead of a division by zero. Since feature values are non-negative in
//! practice, scores land in [0, 1].

use crate::features::FeatureVector;
use crate::traits::SimilarityMetric;

/// Score returned when either vector is all zeros
pub const ZERO_NORM_FALLBACK: f64 = 0.5;

/// Cosine similarity of two vectors, see the module docs for the zero case
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> f64 {
    let norm_product = a.norm() * b.norm();
    if norm_product == 0.0 {
        return ZERO_NORM_FALLBACK;
    }
    a.dot(b) / norm_product
}

/// The cosine metric as a [`SimilarityMetric`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CosineSimilarity;

impl SimilarityMetric for CosineSimilarity {
    fn name(&self) -> &str {
        "cosine_similarity"
    }

    fn similarity(&self, a: &FeatureVector, b: &FeatureVector) -> f64 {
        cosine_similarity(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Feature, FeatureRecord};

    const EPS: f64 = 1e-9;

    fn hello() -> FeatureRecord {
        FeatureRecord::new()
            .with(Feature::Energy, 0.45)
            .with(Feature::Valence, 0.18)
            .with(Feature::Danceability, 0.48)
            .with(Feature::Acousticness, 0.34)
            .with(Feature::Tempo, 79.0)
    }

    #[test]
    fn test_identical_records_score_one() {
        let v = FeatureVector::from_record(&hello());
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_known_value() {
        // [1,0,...] vs [1,1,0,...] -> 1 / sqrt(2)
        let a = FeatureVector::new([1.0, 0.0, 0.0, 0.0, 0.0]);
        let b = FeatureVector::new([1.0, 1.0, 0.0, 0.0, 0.0]);
        assert!((cosine_similarity(&a, &b) - std::f64::consts::FRAC_1_SQRT_2).abs() < EPS);
    }

    #[test]
    fn test_orthogonal_vectors_score_zero() {
        let a = FeatureVector::new([1.0, 0.0, 0.0, 0.0, 0.0]);
        let b = FeatureVector::new([0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_magnitude_is_ignored() {
        let a = FeatureVector::new([0.2, 0.4, 0.1, 0.3, 0.5]);
        let b = FeatureVector::new([0.4, 0.8, 0.2, 0.6, 1.0]);
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_zero_vector_fallback() {
        // All unit features at zero and tempo at the 60 BPM floor
        let silent = FeatureRecord::new()
            .with(Feature::Energy, 0.0)
            .with(Feature::Valence, 0.0)
            .with(Feature::Danceability, 0.0)
            .with(Feature::Acousticness, 0.0)
            .with(Feature::Tempo, 60.0);
        let zero = FeatureVector::from_record(&silent);
        assert_eq!(zero.norm(), 0.0);

        let other = FeatureVector::from_record(&hello());
        assert_eq!(cosine_similarity(&zero, &other), ZERO_NORM_FALLBACK);
        assert_eq!(cosine_similarity(&other, &zero), ZERO_NORM_FALLBACK);
        assert_eq!(cosine_similarity(&zero, &zero), 0.5);
    }

    #[test]
    fn test_metric_name() {
        assert_eq!(CosineSimilarity.name(), "cosine_similarity");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use data_loader::{Feature, FeatureRecord};
    use proptest::prelude::*;

    fn arb_vector() -> impl Strategy<Value = FeatureVector> {
        proptest::array::uniform5(0.0f64..2.0).prop_map(FeatureVector::new)
    }

    /// Records with unit-interval features and tempo in the nominal 60-180 range
    fn arb_record() -> impl Strategy<Value = FeatureRecord> {
        (
            0.0f64..=1.0,
            0.0f64..=1.0,
            0.0f64..=1.0,
            0.0f64..=1.0,
            60.0f64..=180.0,
        )
            .prop_map(|(energy, valence, dance, acoustic, tempo)| {
                FeatureRecord::new()
                    .with(Feature::Energy, energy)
                    .with(Feature::Valence, valence)
                    .with(Feature::Danceability, dance)
                    .with(Feature::Acousticness, acoustic)
                    .with(Feature::Tempo, tempo)
            })
    }

    proptest! {
        /// Cosine similarity is symmetric
        #[test]
        fn cosine_symmetric(a in arb_vector(), b in arb_vector()) {
            prop_assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
        }

        /// Every non-zero vector is fully similar to itself
        #[test]
        fn cosine_self_similarity(a in arb_vector()) {
            prop_assume!(a.norm() > 0.0);
            prop_assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-9);
        }

        /// In-range records always score within [0, 1]
        #[test]
        fn cosine_in_unit_range(a in arb_record(), b in arb_record()) {
            let sim = cosine_similarity(&FeatureVector::from_record(&a), &FeatureVector::from_record(&b));
            prop_assert!(sim >= 0.0 && sim <= 1.0 + 1e-12, "similarity {} out of range", sim);
        }

        /// Dropping valence is the same as setting it to the neutral 0.5
        #[test]
        fn missing_valence_defaults(a in arb_record(), b in arb_record()) {
            let mut without = a;
            without.valence = None;
            let with_default = without.with(Feature::Valence, 0.5);

            let other = FeatureVector::from_record(&b);
            prop_assert_eq!(
                cosine_similarity(&FeatureVector::from_record(&without), &other),
                cosine_similarity(&FeatureVector::from_record(&with_default), &other)
            );
        }
    }
}
