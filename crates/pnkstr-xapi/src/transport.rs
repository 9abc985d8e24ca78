//! The seam between the search pipeline and whatever reaches the API.

use async_trait::async_trait;

use crate::client::XApiClient;
use crate::error::XApiError;
use crate::search::SearchRequest;
use crate::types::SearchPage;

/// Anything that can execute a recent search and hand back a [`SearchPage`].
///
/// Adapters convert their native response shape into [`SearchPage`] before
/// returning, so normalization never needs to know which adapter ran.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    /// Short label used in diagnostics.
    fn name(&self) -> &'static str;

    /// Perform exactly one search request.
    ///
    /// # Errors
    ///
    /// Returns [`XApiError`] on network, HTTP status, or payload failures.
    async fn search_recent(&self, request: &SearchRequest) -> Result<SearchPage, XApiError>;
}

#[async_trait]
impl SearchTransport for XApiClient {
    fn name(&self) -> &'static str {
        "x-api-v2"
    }

    async fn search_recent(&self, request: &SearchRequest) -> Result<SearchPage, XApiError> {
        self.fetch_search_page(request).await
    }
}
