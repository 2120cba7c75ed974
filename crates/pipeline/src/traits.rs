//! Core traits for the scoring pipeline.
//!
//! This module defines the SimilarityMetric trait that the matcher is
//! generic over.

use crate::features::FeatureVector;

/// Symmetric similarity between two feature vectors.
///
/// ## Design Note
/// - `Send + Sync` lets a matcher score candidates on rayon's thread pool
/// - Implementations must be pure: same inputs, same score
/// - Higher means more alike
pub trait SimilarityMetric: Send + Sync {
    /// Returns the name of this metric (reported in the analysis methodology)
    fn name(&self) -> &str;

    /// Score two vectors.
    ///
    /// Must be symmetric: `similarity(a, b) == similarity(b, a)`.
    fn similarity(&self, a: &FeatureVector, b: &FeatureVector) -> f64;
}
