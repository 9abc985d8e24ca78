//! The search → normalize → summarize → export pipeline.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use pnkstr_core::{AppConfig, NormalizedRecord};
use pnkstr_report::{export_csv, summarize, EngagementSummary, ExportOutcome};
use pnkstr_xapi::{normalize_page, search, CallLogger, QueryStatus, SearchTransport, XApiClient};

use crate::console;

/// Output locations for one run, sharing a single timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunPaths {
    pub csv: PathBuf,
    pub call_log: PathBuf,
}

impl RunPaths {
    pub(crate) fn new(config: &AppConfig, stamp: &str) -> Self {
        Self {
            csv: config.data_dir.join(format!("pnkstr_tweets_{stamp}.csv")),
            call_log: config.log_dir.join(format!("api_calls_{stamp}.txt")),
        }
    }
}

/// Local-time run stamp used in output file names.
pub(crate) fn run_stamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QueryReport {
    pub query: String,
    pub status: QueryStatus,
    pub records: usize,
}

#[derive(Debug)]
pub(crate) struct RunReport {
    pub queries: Vec<QueryReport>,
    pub records: Vec<NormalizedRecord>,
    pub summary: Option<EngagementSummary>,
    pub export: ExportOutcome,
    pub calls: u64,
}

/// Runs the pipeline against the live API using `config`.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the call log cannot be
/// written, or the CSV export fails. Individual query failures do not abort
/// the run.
pub(crate) async fn run_pipeline(config: &AppConfig) -> anyhow::Result<RunReport> {
    let paths = RunPaths::new(config, &run_stamp());
    let client = XApiClient::with_base_url(
        &config.bearer_token,
        config.request_timeout_secs,
        &config.user_agent,
        &config.api_base_url,
    )?;
    let mut logger = CallLogger::new(&paths.call_log)?;

    console::print_banner("X API PPU PILOT: PNKSTR SEARCH");
    tracing::info!(
        queries = config.queries.len(),
        max_results = config.max_results,
        "starting search run"
    );

    let report = execute(
        &client,
        &mut logger,
        &config.queries,
        config.max_results,
        &paths.csv,
    )
    .await?;

    console::print_usage(report.calls, logger.path());
    Ok(report)
}

/// Searches each query in turn, normalizes each response against its own
/// user table, then summarizes and exports the combined records.
///
/// # Errors
///
/// Returns an error if the call log cannot be written or the CSV export fails.
pub(crate) async fn execute<T>(
    transport: &T,
    logger: &mut CallLogger,
    queries: &[String],
    max_results: u32,
    csv_path: &Path,
) -> anyhow::Result<RunReport>
where
    T: SearchTransport + ?Sized,
{
    let mut reports = Vec::with_capacity(queries.len());
    let mut records = Vec::new();

    for query in queries {
        console::print_searching(query);
        let outcome = search(transport, logger, query, max_results)
            .await
            .context("failed to write API call log")?;

        let (status, batch) = match normalize_page(query, &outcome.page) {
            Ok(batch) => (outcome.status, batch),
            Err(e) => {
                tracing::error!(query = query.as_str(), error = %e, "malformed search response");
                (QueryStatus::Failed(format!("malformed response: {e}")), Vec::new())
            }
        };

        console::print_query_status(query, &status);
        reports.push(QueryReport {
            query: query.clone(),
            status,
            records: batch.len(),
        });
        records.extend(batch);
    }

    let summary = summarize(&records);
    console::print_summary(summary.as_ref());

    let export = export_csv(&records, csv_path)
        .with_context(|| format!("failed to write {}", csv_path.display()))?;
    console::print_export(&export);
    console::print_query_table(&reports);

    Ok(RunReport {
        queries: reports,
        records,
        summary,
        export,
        calls: logger.calls(),
    })
}
