//! Final score aggregation and ranking.
//!
//! `final = best_similarity + prior_wins * bonus_weight`
//!
//! Nominees missing from the bonus table have zero prior wins. The ranking is
//! by descending final score; equal scores keep the nominees' input order.

use crate::matching::SimilarityResult;
use data_loader::{BonusTable, ItemId};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// Bonus added per prior win unless configured otherwise
pub const DEFAULT_BONUS_WEIGHT: f64 = 0.15;

/// Composite score of one nominee
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalScore {
    pub candidate: ItemId,
    pub best_similarity: f64,
    pub bonus_count: u32,
    /// `bonus_count * bonus_weight`
    pub bonus: f64,
    pub final_score: f64,
}

/// Combines best-match similarity with the prior-win bonus
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreAggregator {
    bonus_weight: f64,
}

impl ScoreAggregator {
    /// Create an aggregator with [`DEFAULT_BONUS_WEIGHT`]
    pub fn new() -> Self {
        Self {
            bonus_weight: DEFAULT_BONUS_WEIGHT,
        }
    }

    /// Configure the bonus per prior win (default: 0.15)
    pub fn with_bonus_weight(mut self, bonus_weight: f64) -> Self {
        self.bonus_weight = bonus_weight;
        self
    }

    pub fn bonus_weight(&self) -> f64 {
        self.bonus_weight
    }

    /// The composite formula on its own
    pub fn final_score(&self, best_similarity: f64, bonus_count: u32) -> f64 {
        best_similarity + self.bonus(bonus_count)
    }

    /// Score one nominee's match result
    pub fn score(&self, result: &SimilarityResult, bonuses: &BonusTable) -> FinalScore {
        let best_similarity = result.best_similarity();
        let bonus_count = bonuses.count(&result.candidate);
        let bonus = self.bonus(bonus_count);

        FinalScore {
            candidate: result.candidate.clone(),
            best_similarity,
            bonus_count,
            bonus,
            final_score: best_similarity + bonus,
        }
    }

    /// Score every nominee and order them
    pub fn aggregate(&self, results: &[SimilarityResult], bonuses: &BonusTable) -> Ranking {
        let scores: Vec<FinalScore> = results
            .iter()
            .map(|result| self.score(result, bonuses))
            .collect();

        debug!(
            "Aggregated {} final scores (bonus weight {})",
            scores.len(),
            self.bonus_weight
        );
        Ranking::new(scores)
    }

    fn bonus(&self, bonus_count: u32) -> f64 {
        f64::from(bonus_count) * self.bonus_weight
    }
}

impl Default for ScoreAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Final scores in input order plus their descending order
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    scores: Vec<FinalScore>,
    /// Indices into `scores`, best first
    order: Vec<usize>,
}

impl Ranking {
    /// Order scores descending; the sort is stable so ties keep input order
    pub fn new(scores: Vec<FinalScore>) -> Self {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].final_score.total_cmp(&scores[a].final_score));
        Self { scores, order }
    }

    /// Scores in nominee input order
    pub fn scores(&self) -> &[FinalScore] {
        &self.scores
    }

    /// Scores best first
    pub fn ranked(&self) -> impl Iterator<Item = &FinalScore> {
        self.order.iter().map(|&idx| &self.scores[idx])
    }

    /// The nominee with the highest final score
    pub fn winner(&self) -> Option<&FinalScore> {
        self.ranked().next()
    }

    pub fn get(&self, candidate: &str) -> Option<&FinalScore> {
        self.scores.iter().find(|score| score.candidate == candidate)
    }

    /// nominee -> final score, in input order
    pub fn final_scores(&self) -> IndexMap<ItemId, f64> {
        self.scores
            .iter()
            .map(|score| (score.candidate.clone(), score.final_score))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
