//! X API v2 recent-search access for the PNKSTR pilot.
//!
//! Wraps the `tweets/search/recent` endpoint behind [`SearchTransport`],
//! records every outbound call through [`CallLogger`] for pay-per-use cost
//! tracking, and flattens responses into [`pnkstr_core::NormalizedRecord`]s.

pub mod call_log;
pub mod client;
pub mod error;
pub mod normalize;
pub mod search;
pub mod shape;
pub mod transport;
pub mod types;

pub use call_log::CallLogger;
pub use client::{XApiClient, SEARCH_RECENT_ENDPOINT};
pub use error::{CallLogError, NormalizeError, XApiError};
pub use normalize::{normalize, normalize_page, normalize_text, UNKNOWN_AUTHOR};
pub use search::{search, QueryOutcome, QueryStatus, SearchRequest};
pub use shape::{describe_shape, ResponseShape};
pub use transport::SearchTransport;
pub use types::{PublicMetrics, RawPost, RawUser, SearchPage};
