//! Matching nominees against past winners.
//!
//! Every nominee is scored against every past winner; there is no pruning or
//! early exit. The best match is the highest similarity, and on a tie the
//! winner listed first in the reference set wins. That tie-break is
//! arbitrary but deterministic.

use crate::features::FeatureVector;
use crate::similarity::CosineSimilarity;
use crate::traits::SimilarityMetric;
use data_loader::{FeatureRecord, ItemId, ItemSet};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// The closest past winner for one nominee
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestMatch {
    #[serde(rename = "best_match")]
    pub reference: ItemId,
    #[serde(rename = "best_similarity")]
    pub similarity: f64,
}

/// Similarity of one nominee to every past winner.
///
/// Serializes as `{ "similarities": {...}, "best_match": ..., "best_similarity": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    #[serde(skip)]
    pub candidate: ItemId,
    /// One entry per past winner, in reference order
    pub similarities: IndexMap<ItemId, f64>,
    /// `None` only when there were no past winners to compare with
    #[serde(flatten)]
    pub best: Option<BestMatch>,
}

impl SimilarityResult {
    /// Similarity of the best match, 0.0 when there is none
    pub fn best_similarity(&self) -> f64 {
        self.best.as_ref().map_or(0.0, |best| best.similarity)
    }

    /// Id of the best match, if any
    pub fn best_match(&self) -> Option<&str> {
        self.best.as_ref().map(|best| best.reference.as_str())
    }
}

/// Pick the highest score, keeping the first one seen on ties
pub fn select_best<'a>(scores: impl IntoIterator<Item = (&'a ItemId, f64)>) -> Option<BestMatch> {
    let mut best: Option<BestMatch> = None;
    for (reference, similarity) in scores {
        let better = match &best {
            None => true,
            Some(current) => similarity > current.similarity,
        };
        if better {
            best = Some(BestMatch {
                reference: reference.clone(),
                similarity,
            });
        }
    }
    best
}

/// Scores nominees against a fixed set of past winners.
///
/// Reference vectors are built once on construction; matching never mutates
/// the matcher, so it can be shared across threads.
#[derive(Debug, Clone)]
pub struct Matcher<M = CosineSimilarity> {
    metric: M,
    references: Vec<(ItemId, FeatureVector)>,
}

impl Matcher<CosineSimilarity> {
    /// Create a matcher using cosine similarity
    pub fn new<T: AsRef<FeatureRecord>>(references: &ItemSet<T>) -> Self {
        Self::with_metric(CosineSimilarity, references)
    }
}

impl<M: SimilarityMetric> Matcher<M> {
    /// Create a matcher with a custom metric
    pub fn with_metric<T: AsRef<FeatureRecord>>(metric: M, references: &ItemSet<T>) -> Self {
        let references = references
            .iter()
            .map(|(id, item)| (id.clone(), FeatureVector::from_record(item.as_ref())))
            .collect();
        Self { metric, references }
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Number of past winners each nominee is compared with
    pub fn reference_count(&self) -> usize {
        self.references.len()
    }

    /// Score one nominee against every past winner
    pub fn match_candidate(&self, candidate: &str, record: &FeatureRecord) -> SimilarityResult {
        let vector = FeatureVector::from_record(record);

        let similarities: IndexMap<ItemId, f64> = self
            .references
            .iter()
            .map(|(id, reference)| (id.clone(), self.metric.similarity(&vector, reference)))
            .collect();

        let best = select_best(similarities.iter().map(|(id, &sim)| (id, sim)));

        SimilarityResult {
            candidate: candidate.to_string(),
            similarities,
            best,
        }
    }

    /// Score all nominees in parallel.
    ///
    /// Returns one result per nominee, in the nominees' input order.
    pub fn match_all<T>(&self, candidates: &ItemSet<T>) -> Vec<SimilarityResult>
    where
        T: AsRef<FeatureRecord> + Sync,
    {
        let items: Vec<(&ItemId, &T)> = candidates.iter().collect();
        let results: Vec<SimilarityResult> = items
            .par_iter()
            .map(|(id, item)| self.match_candidate(id, item.as_ref()))
            .collect();

        debug!(
            "Matched {} candidates against {} references",
            results.len(),
            self.references.len()
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Feature, ReferenceItem, ReferenceSet};

    fn record(energy: f64, valence: f64, tempo: f64) -> FeatureRecord {
        FeatureRecord::new()
            .with(Feature::Energy, energy)
            .with(Feature::Valence, valence)
            .with(Feature::Danceability, 0.5)
            .with(Feature::Acousticness, 0.2)
            .with(Feature::Tempo, tempo)
    }

    fn winner(year: u16, features: FeatureRecord) -> ReferenceItem {
        ReferenceItem {
            year,
            artist: format!("Artist {year}"),
            features,
        }
    }

    #[test]
    fn test_every_reference_scored() {
        let references = ReferenceSet::new()
            .with("A", winner(2016, record(0.9, 0.1, 80.0)))
            .with("B", winner(2017, record(0.1, 0.9, 170.0)))
            .with("C", winner(2018, record(0.5, 0.5, 120.0)));
        let matcher = Matcher::new(&references);

        let result = matcher.match_candidate("nominee", &record(0.8, 0.2, 90.0));
        let ids: Vec<&str> = result.similarities.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(result.best_match(), Some("A"));
    }

    #[test]
    fn test_tie_goes_to_first_reference() {
        // Two identical winners produce identical similarity
        let same = record(0.45, 0.18, 79.0);
        let references = ReferenceSet::new()
            .with("Hello", winner(2016, same))
            .with("Hello (2017)", winner(2017, same))
            .with("Other", winner(2018, record(0.9, 0.9, 170.0)));
        let matcher = Matcher::new(&references);

        let result = matcher.match_candidate("nominee", &same);
        assert_eq!(result.similarities["Hello"], result.similarities["Hello (2017)"]);
        assert_eq!(result.best_match(), Some("Hello"));

        // Reversing the reference order flips the pick
        let reversed = ReferenceSet::new()
            .with("Hello (2017)", winner(2017, same))
            .with("Hello", winner(2016, same));
        let result = Matcher::new(&reversed).match_candidate("nominee", &same);
        assert_eq!(result.best_match(), Some("Hello (2017)"));
    }

    #[test]
    fn test_select_best_strict_maximum() {
        let ids: Vec<ItemId> = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        let scores = [0.3, 0.9, 0.9, 0.1];

        let best = select_best(ids.iter().zip(scores)).unwrap();
        assert_eq!(best.reference, "b");
        assert_eq!(best.similarity, 0.9);
    }

    #[test]
    fn test_no_references() {
        let matcher = Matcher::new(&ReferenceSet::new());
        let result = matcher.match_candidate("lonely", &record(0.5, 0.5, 120.0));

        assert!(result.similarities.is_empty());
        assert!(result.best.is_none());
        assert_eq!(result.best_similarity(), 0.0);
    }

    #[test]
    fn test_match_all_keeps_candidate_order() {
        let references = ReferenceSet::new()
            .with("A", winner(2016, record(0.9, 0.1, 80.0)))
            .with("B", winner(2017, record(0.1, 0.9, 170.0)));
        let matcher = Matcher::new(&references);

        let candidates: ItemSet<FeatureRecord> = (0..50)
            .map(|i| (format!("nominee-{i}"), record(i as f64 / 50.0, 0.5, 100.0 + i as f64)))
            .collect();

        let results = matcher.match_all(&candidates);
        assert_eq!(results.len(), 50);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.candidate, format!("nominee-{i}"));
            assert_eq!(result.similarities.len(), 2);
        }
    }

    #[test]
    fn test_candidates_scored_independently() {
        let references = ReferenceSet::new()
            .with("A", winner(2016, record(0.9, 0.1, 80.0)))
            .with("B", winner(2017, record(0.1, 0.9, 170.0)));
        let matcher = Matcher::new(&references);

        let solo = matcher.match_candidate("x", &record(0.3, 0.6, 140.0));
        let batch: ItemSet<FeatureRecord> = ItemSet::new()
            .with("y", record(0.99, 0.01, 61.0))
            .with("x", record(0.3, 0.6, 140.0));

        let results = matcher.match_all(&batch);
        assert_eq!(results[1], solo);
    }

    #[test]
    fn test_serialized_shape() {
        let references = ReferenceSet::new().with("A", winner(2016, record(0.9, 0.1, 80.0)));
        let result = Matcher::new(&references).match_candidate("n", &record(0.9, 0.1, 80.0));

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("similarities").unwrap().get("A").is_some());
        assert_eq!(json["best_match"], "A");
        assert!(json.get("best_similarity").unwrap().is_f64());
        assert!(json.get("candidate").is_none());
    }
}
