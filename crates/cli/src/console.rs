//! Terminal tables for analysis reports and comparisons.

use analysis::{AnalysisReport, Comparison, ReportWriter};
use anyhow::Result;
use colored::Colorize;

const RULE_WIDTH: usize = 70;

/// Prints a report as the best-match and final-score tables
pub struct ConsoleReport {
    /// Also print every nominee's full similarity distribution
    pub explain: bool,
}

impl ReportWriter for ConsoleReport {
    fn name(&self) -> &str {
        "console"
    }

    fn write(&self, report: &AnalysisReport) -> Result<()> {
        print_banner("SONG OF THE YEAR - HISTORICAL WINNER ANALYSIS");

        println!("\n{}", "NOMINEE SIMILARITY TO EACH PAST WINNER".bold());
        println!("{}", "-".repeat(RULE_WIDTH));
        println!("{:<20} {:<30} {:>10}", "Nominee", "Best Match (Past Winner)", "Similarity");
        println!("{}", "-".repeat(RULE_WIDTH));
        for (nominee, result) in &report.similarity_results {
            println!(
                "{:<20} {:<30} {:>10.3}",
                nominee,
                result.best_match().unwrap_or("-"),
                result.best_similarity()
            );
        }

        if self.explain {
            println!("\n{}", "FULL SIMILARITY DISTRIBUTION".bold());
            for (nominee, result) in &report.similarity_results {
                println!("{}", nominee.cyan());
                for (winner, similarity) in &result.similarities {
                    let year = report
                        .past_winners
                        .get(winner)
                        .map(|item| item.year.to_string())
                        .unwrap_or_default();
                    println!("  {:<30} {:>6} {:>10.3}", winner, year, similarity);
                }
            }
        }

        print_banner("FINAL HISTORICAL WINNER SCORE");
        println!("{:<20} {:>12} {:>12} {:>12}", "Nominee", "Audio Match", "Prior Wins", "Final Score");
        println!("{}", "-".repeat(60));
        for nominee in report.final_scores.keys() {
            if let Some(score) = report.score_for(nominee) {
                println!(
                    "{:<20} {:>12.3} {:>12} {:>12.3}",
                    nominee, score.best_similarity, score.bonus_count, score.final_score
                );
            }
        }

        println!("\n{}", "RANKING".bold());
        for (idx, score) in report.ranking.iter().enumerate() {
            println!(
                "{}. {} - {:.3}",
                (idx + 1).to_string().green(),
                score.candidate,
                score.final_score
            );
        }

        print_banner("CONCLUSION");
        match report.winning_score() {
            Some(winner) => println!(
                "{} has the HIGHEST final score ({:.3})",
                winner.candidate.green().bold(),
                winner.final_score
            ),
            None => println!("No nominees to rank"),
        }
        println!(
            "Metric: {} | bonus per prior win: {}",
            report.methodology.similarity_metric, report.methodology.bonus_weight
        );

        Ok(())
    }
}

/// Prints a nominee-vs-winner comparison table
pub fn print_comparison(comparison: &Comparison) {
    print_banner(&format!(
        "{} vs {} ({})",
        comparison.nominee, comparison.reference, comparison.reference_year
    ));
    println!(
        "Similarity: {}",
        format!("{:.3}", comparison.similarity).bold()
    );

    println!(
        "\n{:<15} {:>12} {:>22} {:>12}",
        "Feature", comparison.nominee, comparison.reference, "Difference"
    );
    println!("{}", "-".repeat(65));
    for delta in &comparison.deltas {
        let mark = if delta.is_close() { "✓".green().to_string() } else { String::new() };
        println!(
            "{:<15} {:>12.2} {:>22.2} {:>12.2} {}",
            delta.feature.name(),
            delta.nominee,
            delta.reference,
            delta.difference,
            mark
        );
    }
    println!(
        "\n{} of {} features within {}",
        comparison.close_features(),
        comparison.deltas.len(),
        analysis::CLOSE_MATCH_THRESHOLD
    );
}

fn print_banner(title: &str) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("{}", title.bold().blue());
    println!("{}", "=".repeat(RULE_WIDTH));
}
