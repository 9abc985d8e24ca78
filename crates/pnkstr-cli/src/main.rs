mod console;
mod probe;
mod run;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pnkstr")]
#[command(about = "Search X for PNKSTR mentions, summarize engagement, and export CSV")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search every configured query, print an engagement summary, and export CSV
    Run {
        /// Search query; repeat to run several. Replaces `PNKSTR_QUERIES`
        #[arg(long = "query")]
        queries: Vec<String>,

        /// Results per query (10-100). Replaces `PNKSTR_MAX_RESULTS`
        #[arg(long)]
        max_results: Option<u32>,
    },
    /// Issue one small search and print the raw response structure
    Probe {
        #[arg(long, default_value = "PNKSTR")]
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Configuration problems are fatal before any client exists.
    let config = pnkstr_core::load_app_config()
        .context("configuration error (copy .env.example to .env and set TWITTER_BEARER_TOKEN)")?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Probe { query }) => probe::run_probe(&config, &query).await,
        Some(Commands::Run {
            queries,
            max_results,
        }) => {
            let config = config.with_overrides(&queries, max_results)?;
            run_and_log(&config).await
        }
        None => run_and_log(&config).await,
    }
}

async fn run_and_log(config: &pnkstr_core::AppConfig) -> anyhow::Result<()> {
    let report = run::run_pipeline(config).await?;
    let failed = report
        .queries
        .iter()
        .filter(|q| matches!(q.status, pnkstr_xapi::QueryStatus::Failed(_)))
        .count();
    tracing::info!(
        records = report.records.len(),
        summarized = report.summary.is_some(),
        exported = !matches!(report.export, pnkstr_report::ExportOutcome::Skipped),
        failed_queries = failed,
        calls = report.calls,
        "run complete"
    );
    Ok(())
}
