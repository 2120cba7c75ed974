use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::Dataset;
use analysis::{AnalysisOrchestrator, JsonReportWriter, ReportWriter};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

mod console;

use console::{print_comparison, ConsoleReport};

/// HitMatch - rank nominees by similarity to past winners
#[derive(Parser)]
#[command(name = "hitmatch")]
#[command(about = "Ranks award nominees by audio-feature similarity to past winners", long_about = None)]
struct Cli {
    /// Path to the dataset file (past winners, nominees, prior wins)
    #[arg(short, long, default_value = "data/historical_winners.json")]
    data_file: PathBuf,

    /// Bonus added per prior win (overrides the dataset's value)
    #[arg(long)]
    bonus_weight: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every nominee and print the ranking
    Rank {
        /// Show each nominee's similarity to every past winner
        #[arg(long)]
        explain: bool,
    },

    /// Compare one nominee with one past winner feature by feature
    Compare {
        /// Nominee title
        #[arg(long)]
        nominee: String,

        /// Past winner title
        #[arg(long)]
        winner: String,
    },

    /// Run the analysis and save the full report as JSON
    Export {
        /// Output file (parent directories are created)
        #[arg(short, long, default_value = "data/historical_winner_analysis.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let dataset = Arc::new(
        Dataset::load_from_file(&cli.data_file)
            .with_context(|| format!("Failed to load dataset {}", cli.data_file.display()))?,
    );
    println!("{} Loaded dataset in {:?}", "✓".green(), start.elapsed());

    let mut orchestrator = AnalysisOrchestrator::new(dataset);
    if let Some(weight) = cli.bonus_weight {
        anyhow::ensure!(
            weight.is_finite() && weight >= 0.0,
            "--bonus-weight must be a non-negative number, got {}",
            weight
        );
        orchestrator = orchestrator.with_bonus_weight(weight);
    }
    tracing::debug!("Bonus weight per prior win: {}", orchestrator.bonus_weight());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Rank { explain } => handle_rank(&orchestrator, explain)?,
        Commands::Compare { nominee, winner } => handle_compare(&orchestrator, &nominee, &winner)?,
        Commands::Export { output } => handle_export(&orchestrator, output)?,
    }

    Ok(())
}

/// Handle the 'rank' command
fn handle_rank(orchestrator: &AnalysisOrchestrator, explain: bool) -> Result<()> {
    let report = orchestrator.run();
    ConsoleReport { explain }.write(&report)
}

/// Handle the 'compare' command
fn handle_compare(orchestrator: &AnalysisOrchestrator, nominee: &str, winner: &str) -> Result<()> {
    let comparison = orchestrator.compare(nominee, winner)?;
    print_comparison(&comparison);
    Ok(())
}

/// Handle the 'export' command
fn handle_export(orchestrator: &AnalysisOrchestrator, output: PathBuf) -> Result<()> {
    let report = orchestrator.run();
    let writer = JsonReportWriter::new(output);
    writer.write(&report)?;

    println!("{} Saved to {}", "✓".green(), writer.path().display());
    if let Some(winner) = report.winning_score() {
        println!(
            "{} has the highest final score ({:.3})",
            winner.candidate.bold(),
            winner.final_score
        );
    }
    Ok(())
}
