//! Historical winner analysis: runs the scoring pipeline over a dataset and
//! packages the outcome for reporting.
//!
//! ## Components
//! - **orchestrator**: AnalysisOrchestrator, the run/compare entry points
//! - **report**: AnalysisReport plus the ReportWriter trait and JSON export
//! - **comparison**: per-feature comparison of a nominee and a past winner
//!
//! Computation and output are kept apart: the orchestrator returns a report
//! and writers only ever read it.

pub mod comparison;
pub mod orchestrator;
pub mod report;

pub use comparison::{CLOSE_MATCH_THRESHOLD, Comparison, FeatureDelta};
pub use orchestrator::AnalysisOrchestrator;
pub use report::{ANALYSIS_TYPE, AnalysisReport, JsonReportWriter, Methodology, ReportWriter};
