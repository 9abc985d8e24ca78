//! One-off inspection of a raw search response.

use anyhow::Context;
use pnkstr_core::AppConfig;
use pnkstr_xapi::{
    describe_shape, CallLogger, ResponseShape, SearchRequest, XApiClient, SEARCH_RECENT_ENDPOINT,
};

use crate::run::{run_stamp, RunPaths};

/// Smallest page the endpoint accepts; the probe only needs one post.
const PROBE_MAX_RESULTS: u32 = 10;

/// Issues one logged search for `query` and prints the response structure.
///
/// # Errors
///
/// Unlike a normal run, any failure here is returned so the process exits
/// non-zero.
pub(crate) async fn run_probe(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    let paths = RunPaths::new(config, &run_stamp());
    let client = XApiClient::with_base_url(
        &config.bearer_token,
        config.request_timeout_secs,
        &config.user_agent,
        &config.api_base_url,
    )?;
    let mut logger = CallLogger::new(&paths.call_log)?;

    let request = SearchRequest::new(query, PROBE_MAX_RESULTS)?;
    logger.record(SEARCH_RECENT_ENDPOINT, &request.log_params())?;
    let body = client
        .search_recent_raw(&request)
        .await
        .with_context(|| format!("probe search for '{query}' failed"))?;

    println!("{}", render_shape(&describe_shape(&body)));
    println!("\nLog file: {}", logger.path().display());
    Ok(())
}

fn render_shape(shape: &ResponseShape) -> String {
    let result_count = shape
        .result_count
        .map_or_else(|| "n/a".to_string(), |c| c.to_string());
    let mut out = format!(
        "Top-level keys: {:?}\nResult count: {result_count}\nPosts in data: {}\n",
        shape.top_level_keys, shape.post_count
    );
    match (&shape.first_post_kind, &shape.first_post) {
        (Some(kind), Some(post)) => {
            out.push_str(&format!(
                "\nFirst post type: {kind}\nFirst post: {}\n",
                pretty(post)
            ));
        }
        _ => out.push_str("\nNo posts in response\n"),
    }
    match &shape.includes {
        Some(includes) => out.push_str(&format!("\nIncludes: {}", pretty(includes))),
        None => out.push_str("\nIncludes: none"),
    }
    out
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
