//! Command-line interface.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use crate::application::use_cases::update_checkouts::{
    UpdateCheckoutsConfig, UpdateCheckoutsUseCase, UpdateSummary,
};

/// repoup - update every version-controlled checkout under a root directory
#[derive(Parser)]
#[command(name = "repoup")]
#[command(about = "Update every version-controlled checkout under a root directory")]
#[command(version)]
pub struct Cli {
    /// Root directory whose immediate subdirectories are the checkouts
    #[arg(long, value_name = "DIR")]
    pub root: PathBuf,

    /// Print run counts after processing
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI application entry point.
pub struct CliApp;

impl CliApp {
    /// Create the application.
    pub fn new() -> Self {
        Self
    }

    /// Parse arguments from the environment and execute a run.
    ///
    /// Per-checkout failures are reported but never turn into a non-zero
    /// exit; only fatal startup conditions (root missing, not a directory,
    /// unlistable) do.
    pub async fn run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run_with(cli).await
    }

    async fn run_with(&self, cli: Cli) -> Result<()> {
        let config = UpdateCheckoutsConfig::new(&cli.root);
        let use_case = UpdateCheckoutsUseCase::new(config);

        let summary = use_case.execute().await?;

        render_report(&summary);

        if cli.verbose {
            println!("  Checkouts updated: {}", summary.updated_count);
            println!("  Checkouts skipped: {}", summary.skipped_count);
            if !summary.failed.is_empty() {
                println!("  Checkouts failed: {}", summary.failed.len());
            }
        }

        Ok(())
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Print the failure report; silent when every checkout updated cleanly.
fn render_report(summary: &UpdateSummary) {
    if summary.is_clean() {
        return;
    }

    println!(
        "{} The following checkouts failed to update:",
        "⚠".yellow().bold()
    );
    for name in &summary.failed {
        println!("  {} {}", "⚠".yellow(), name.red());
    }
}
