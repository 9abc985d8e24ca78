//! One logged recent-search call per query.

use pnkstr_core::MAX_RESULTS_RANGE;
use serde_json::json;

use crate::call_log::CallLogger;
use crate::client::SEARCH_RECENT_ENDPOINT;
use crate::error::{CallLogError, XApiError};
use crate::transport::SearchTransport;
use crate::types::SearchPage;

pub const TWEET_FIELDS: &[&str] = &["created_at", "public_metrics", "author_id", "lang"];
pub const EXPANSIONS: &[&str] = &["author_id"];
pub const USER_FIELDS: &[&str] = &["username", "name", "verified"];

/// A validated recent-search request with the fixed field selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    max_results: u32,
}

impl SearchRequest {
    /// # Errors
    ///
    /// Returns [`XApiError::InvalidMaxResults`] unless `max_results` is in `10..=100`.
    pub fn new(query: impl Into<String>, max_results: u32) -> Result<Self, XApiError> {
        if !MAX_RESULTS_RANGE.contains(&max_results) {
            return Err(XApiError::InvalidMaxResults(max_results));
        }
        Ok(Self {
            query: query.into(),
            max_results,
        })
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    /// Query-string parameters in the order they are sent.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("query", self.query.clone()),
            ("max_results", self.max_results.to_string()),
            ("tweet.fields", TWEET_FIELDS.join(",")),
            ("expansions", EXPANSIONS.join(",")),
            ("user.fields", USER_FIELDS.join(",")),
        ]
    }

    /// The parameter mapping written to the call log.
    #[must_use]
    pub fn log_params(&self) -> serde_json::Value {
        json!({
            "query": self.query,
            "max_results": self.max_results,
            "tweet_fields": TWEET_FIELDS,
            "expansions": EXPANSIONS,
            "user_fields": USER_FIELDS,
        })
    }
}

/// How a single query's search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryStatus {
    /// The request succeeded and returned this many posts.
    Found(usize),
    /// The request succeeded with zero matches.
    Empty,
    /// The request (or the handling of its response) failed.
    Failed(String),
}

impl QueryStatus {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Found(_) => "ok",
            Self::Empty => "empty",
            Self::Failed(_) => "failed",
        }
    }
}

/// Result of [`search`] for one query. `page` is empty unless `status` is `Found`.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub query: String,
    pub status: QueryStatus,
    pub page: SearchPage,
}

impl QueryOutcome {
    fn failed(query: &str, reason: String) -> Self {
        Self {
            query: query.to_string(),
            status: QueryStatus::Failed(reason),
            page: SearchPage::default(),
        }
    }
}

/// Run one recent search for `query`, logging the call before it is sent.
///
/// Transport failures never escape: they are reported through
/// [`QueryStatus::Failed`] and the caller moves on. Nothing is retried.
///
/// # Errors
///
/// Returns [`CallLogError`] only when the call log cannot be written.
pub async fn search<T>(
    transport: &T,
    logger: &mut CallLogger,
    query: &str,
    max_results: u32,
) -> Result<QueryOutcome, CallLogError>
where
    T: SearchTransport + ?Sized,
{
    let request = match SearchRequest::new(query, max_results) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(query, error = %e, "search request rejected before sending");
            return Ok(QueryOutcome::failed(query, e.to_string()));
        }
    };

    let call_number = logger.record(SEARCH_RECENT_ENDPOINT, &request.log_params())?;
    tracing::debug!(
        query,
        call_number,
        transport = transport.name(),
        "issuing recent search"
    );

    match transport.search_recent(&request).await {
        Ok(page) if page.posts.is_empty() => {
            tracing::info!(query, "search returned no posts");
            Ok(QueryOutcome {
                query: query.to_string(),
                status: QueryStatus::Empty,
                page,
            })
        }
        Ok(page) => {
            let count = page.posts.len();
            tracing::info!(query, count, "search returned posts");
            Ok(QueryOutcome {
                query: query.to_string(),
                status: QueryStatus::Found(count),
                page,
            })
        }
        Err(e) => {
            tracing::warn!(query, error = %e, "search failed; treating as no results");
            Ok(QueryOutcome::failed(query, e.to_string()))
        }
    }
}
