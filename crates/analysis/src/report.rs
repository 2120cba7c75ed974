//! Analysis report model and output adapters.
//!
//! The report is the only thing output adapters see. It carries the inputs,
//! every intermediate result and the parameters used, so an exported file
//! documents how its numbers were produced.

use anyhow::{Context, Result};
use data_loader::{BonusTable, CandidateSet, Feature, ItemId, ReferenceSet};
use indexmap::IndexMap;
use pipeline::{FinalScore, SimilarityResult};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Value of the `analysis_type` field in exported reports
pub const ANALYSIS_TYPE: &str = "historical_winner_similarity";

/// Parameters the scores were computed with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Methodology {
    pub similarity_metric: String,
    pub features_used: Vec<Feature>,
    pub bonus_weight: f64,
}

/// Complete output of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub analysis_type: &'static str,
    pub nominees: CandidateSet,
    pub past_winners: ReferenceSet,
    /// Per nominee, in nominee order
    pub similarity_results: IndexMap<ItemId, SimilarityResult>,
    pub prior_bonus_counts: BonusTable,
    /// Per nominee, in nominee order
    pub final_scores: IndexMap<ItemId, f64>,
    /// Best first
    pub ranking: Vec<FinalScore>,
    pub winner: Option<ItemId>,
    pub methodology: Methodology,
}

impl AnalysisReport {
    /// Final score breakdown of one nominee
    pub fn score_for(&self, nominee: &str) -> Option<&FinalScore> {
        self.ranking.iter().find(|score| score.candidate == nominee)
    }

    /// The winning nominee's score breakdown
    pub fn winning_score(&self) -> Option<&FinalScore> {
        self.ranking.first()
    }
}

/// Something that consumes a finished report (file, terminal, ...)
pub trait ReportWriter {
    /// Returns the name of this writer (for logging)
    fn name(&self) -> &str;

    fn write(&self, report: &AnalysisReport) -> Result<()>;
}

/// Writes the report as pretty-printed JSON
#[derive(Debug, Clone)]
pub struct JsonReportWriter {
    path: PathBuf,
}

impl JsonReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportWriter for JsonReportWriter {
    fn name(&self) -> &str {
        "json"
    }

    fn write(&self, report: &AnalysisReport) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create {}", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, report).context("Failed to serialize report")?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!("Saved report to {}", self.path.display());
        Ok(())
    }
}
