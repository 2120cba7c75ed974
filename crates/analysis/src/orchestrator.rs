//! # Analysis Orchestrator
//!
//! This module coordinates a full analysis run:
//! 1. Build reference vectors for the past winners
//! 2. Score every nominee against every past winner
//! 3. Add the prior-win bonus and rank
//! 4. Assemble the report
//!
//! It also answers one-off comparisons between a nominee and a named past
//! winner.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Result, anyhow};
use indexmap::IndexMap;
use tracing::{debug, info, instrument};

use data_loader::{Dataset, Feature, ItemId};
use pipeline::{DEFAULT_BONUS_WEIGHT, FeatureVector, Matcher, ScoreAggregator, SimilarityMetric, SimilarityResult};

use crate::comparison::{Comparison, feature_deltas};
use crate::report::{ANALYSIS_TYPE, AnalysisReport, Methodology};

/// Runs the scoring pipeline over one dataset
#[derive(Clone)]
pub struct AnalysisOrchestrator {
    dataset: Arc<Dataset>,
    matcher: Matcher,
    aggregator: ScoreAggregator,
}

impl AnalysisOrchestrator {
    /// Create an orchestrator for a dataset
    ///
    /// The bonus weight comes from the dataset when it has one, otherwise
    /// [`DEFAULT_BONUS_WEIGHT`].
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let bonus_weight = dataset.bonus_weight.unwrap_or(DEFAULT_BONUS_WEIGHT);
        let matcher = Matcher::new(&dataset.past_winners);
        let aggregator = ScoreAggregator::new().with_bonus_weight(bonus_weight);

        Self {
            dataset,
            matcher,
            aggregator,
        }
    }

    /// Override the bonus per prior win
    pub fn with_bonus_weight(mut self, bonus_weight: f64) -> Self {
        self.aggregator = self.aggregator.with_bonus_weight(bonus_weight);
        self
    }

    pub fn bonus_weight(&self) -> f64 {
        self.aggregator.bonus_weight()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Main entry point: score and rank every nominee
    #[instrument(skip(self), fields(
        nominees = self.dataset.nominees.len(),
        past_winners = self.dataset.past_winners.len()
    ))]
    pub fn run(&self) -> AnalysisReport {
        let start_time = Instant::now();

        // Score matrix
        let results = self.matcher.match_all(&self.dataset.nominees);
        info!(
            "Scored {} nominees against {} past winners",
            results.len(),
            self.matcher.reference_count()
        );

        // Aggregate
        let ranking = self.aggregator.aggregate(&results, &self.dataset.prior_wins);
        if let Some(winner) = ranking.winner() {
            info!(
                "Top nominee: {} (final score {:.3})",
                winner.candidate, winner.final_score
            );
        }

        let similarity_results: IndexMap<ItemId, SimilarityResult> = results
            .into_iter()
            .map(|result| (result.candidate.clone(), result))
            .collect();

        let report = AnalysisReport {
            analysis_type: ANALYSIS_TYPE,
            nominees: self.dataset.nominees.clone(),
            past_winners: self.dataset.past_winners.clone(),
            similarity_results,
            prior_bonus_counts: self.dataset.prior_wins.clone(),
            final_scores: ranking.final_scores(),
            ranking: ranking.ranked().cloned().collect(),
            winner: ranking.winner().map(|score| score.candidate.clone()),
            methodology: self.methodology(),
        };

        info!("Analysis completed in {:?}", start_time.elapsed());
        report
    }

    /// Compare one nominee with one past winner
    pub fn compare(&self, nominee: &str, winner: &str) -> Result<Comparison> {
        let nominee_item = self
            .dataset
            .nominees
            .get(nominee)
            .ok_or_else(|| anyhow!("Nominee '{}' not found", nominee))?;
        let winner_item = self
            .dataset
            .past_winners
            .get(winner)
            .ok_or_else(|| anyhow!("Past winner '{}' not found", winner))?;

        let similarity = self.matcher.metric().similarity(
            &FeatureVector::from_record(&nominee_item.features),
            &FeatureVector::from_record(&winner_item.features),
        );
        debug!("{} vs {}: {:.3}", nominee, winner, similarity);

        Ok(Comparison {
            nominee: nominee.to_string(),
            reference: winner.to_string(),
            reference_year: winner_item.year,
            similarity,
            deltas: feature_deltas(&nominee_item.features, &winner_item.features),
        })
    }

    fn methodology(&self) -> Methodology {
        Methodology {
            similarity_metric: self.matcher.metric().name().to_string(),
            features_used: Feature::REPORTED.to_vec(),
            bonus_weight: self.aggregator.bonus_weight(),
        }
    }
}
