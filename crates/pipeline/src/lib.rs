//! Similarity scoring engine for nominees versus past winners.
//!
//! This crate provides:
//! - FeatureVector for turning feature records into normalized vectors
//! - SimilarityMetric trait and the cosine implementation
//! - Matcher for scoring each nominee against every past winner
//! - ScoreAggregator for adding the prior-win bonus and ranking
//!
//! ## Architecture
//! Three pure stages, each usable on its own:
//! 1. Build vectors (reference vectors once, nominee vectors per match)
//! 2. Score matrix: every nominee against every past winner, best match picked
//! 3. Aggregate: best similarity + bonus, ordered best first
//!
//! Nothing in here does I/O or keeps state between calls.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Matcher, ScoreAggregator};
//!
//! let matcher = Matcher::new(&dataset.past_winners);
//! let results = matcher.match_all(&dataset.nominees);
//!
//! let ranking = ScoreAggregator::new()
//!     .with_bonus_weight(0.15)
//!     .aggregate(&results, &dataset.prior_wins);
//!
//! println!("winner: {:?}", ranking.winner());
//! ```

pub mod traits;
pub mod features;
pub mod similarity;
pub mod matching;
pub mod scoring;

// Re-export main types
pub use traits::SimilarityMetric;
pub use features::{FeatureVector, normalize_tempo};
pub use similarity::{CosineSimilarity, ZERO_NORM_FALLBACK, cosine_similarity};
pub use matching::{BestMatch, Matcher, SimilarityResult, select_best};
pub use scoring::{DEFAULT_BONUS_WEIGHT, FinalScore, Ranking, ScoreAggregator};
