//! HTTP client for the X API v2 recent-search endpoint.
//!
//! Wraps `reqwest` with bearer-token auth and typed response
//! deserialization. Non-2xx answers and problem-only payloads surface as
//! [`XApiError::Api`] with the API's own description.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::XApiError;
use crate::search::SearchRequest;
use crate::types::{ApiProblem, SearchPage, SearchResponse};

/// Endpoint path relative to the API root; also the endpoint id in the call log.
pub const SEARCH_RECENT_ENDPOINT: &str = "tweets/search/recent";

/// Longest slice of a non-JSON error body carried into an error message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Client for the X API v2.
///
/// The API root comes from configuration, so tests point it at a mock server.
pub struct XApiClient {
    client: Client,
    bearer_token: String,
    search_url: Url,
}

impl XApiClient {
    /// Creates a client rooted at `base_url`, e.g. `https://api.x.com/2/`.
    ///
    /// # Errors
    ///
    /// Returns [`XApiError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`XApiError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        bearer_token: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, XApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `join` appends to the root path
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let search_url = Url::parse(&normalised)
            .and_then(|root| root.join(SEARCH_RECENT_ENDPOINT))
            .map_err(|e| XApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            bearer_token: bearer_token.to_owned(),
            search_url,
        })
    }

    /// Fetches one page of recent posts and builds its [`SearchPage`].
    ///
    /// A 200 carrying only `errors` (no `data`) is treated as a failure so
    /// it is not mistaken for a zero-match search.
    ///
    /// # Errors
    ///
    /// - [`XApiError::Api`] on a non-2xx status or a problem-only payload.
    /// - [`XApiError::Http`] on network failure.
    /// - [`XApiError::Deserialize`] if the body does not match the expected shape.
    pub async fn fetch_search_page(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchPage, XApiError> {
        let body = self.search_recent_raw(request).await?;
        let response: SearchResponse =
            serde_json::from_value(body).map_err(|e| XApiError::Deserialize {
                context: format!("{SEARCH_RECENT_ENDPOINT}(query={})", request.query()),
                source: e,
            })?;

        let no_data = response.data.as_ref().is_none_or(Vec::is_empty);
        if no_data {
            if let Some(problem) = response.errors.first() {
                return Err(XApiError::Api {
                    status: 200,
                    detail: problem.describe(),
                });
            }
        }

        let page = SearchPage::from(response);
        if !page.errors.is_empty() {
            tracing::warn!(
                query = request.query(),
                problems = page.errors.len(),
                "search returned partial errors alongside data"
            );
        }
        Ok(page)
    }

    /// Performs the search and returns the raw JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`XApiClient::fetch_search_page`], minus shape validation.
    pub async fn search_recent_raw(
        &self,
        request: &SearchRequest,
    ) -> Result<serde_json::Value, XApiError> {
        let url = self.build_search_url(request);
        self.request_json(&url).await
    }

    /// Builds the request URL with percent-encoded query parameters.
    #[must_use]
    pub fn build_search_url(&self, request: &SearchRequest) -> Url {
        let mut url = self.search_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in request.query_pairs() {
                pairs.append_pair(k, &v);
            }
        }
        url
    }

    /// Sends an authenticated GET and parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`XApiError::Api`] on a non-2xx status, [`XApiError::Http`] on
    /// network failure, [`XApiError::Deserialize`] if the body is not JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, XApiError> {
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| XApiError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    /// Builds an [`XApiError::Api`] from an error body, preferring the
    /// problem JSON's own description.
    fn api_error(status: u16, body: &str) -> XApiError {
        let detail = serde_json::from_str::<ApiProblem>(body)
            .ok()
            .filter(|p| p.detail.is_some() || p.title.is_some() || p.message.is_some())
            .map_or_else(
                || body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
                |p| p.describe(),
            );
        XApiError::Api { status, detail }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
