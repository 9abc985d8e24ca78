//! X API v2 recent-search response types.
//!
//! Every field the pilot does not strictly need is optional so that access
//! tiers which omit fields (most often `impression_count`) still deserialize.
//! [`SearchPage`] is the single shape the rest of the crate works with.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `GET 2/tweets/search/recent`.
///
/// `data` is absent when nothing matched; `errors` carries partial-failure
/// problems the API reports alongside a 200.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Option<Vec<RawPost>>,
    #[serde(default)]
    pub includes: Option<Includes>,
    #[serde(default)]
    pub meta: Option<SearchMeta>,
    #[serde(default)]
    pub errors: Vec<ApiProblem>,
}

/// The response-scoped inclusion table requested via `expansions=author_id`.
#[derive(Debug, Default, Deserialize)]
pub struct Includes {
    #[serde(default)]
    pub users: Vec<RawUser>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchMeta {
    #[serde(default)]
    pub result_count: Option<u64>,
    #[serde(default)]
    pub next_token: Option<String>,
}

/// Problem object from the `errors` array or a non-2xx body.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiProblem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiProblem {
    /// Best human-readable description the problem carries.
    #[must_use]
    pub fn describe(&self) -> String {
        self.detail
            .as_deref()
            .or(self.message.as_deref())
            .or(self.title.as_deref())
            .unwrap_or("unknown problem")
            .to_string()
    }
}

/// One post as returned by the API.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPost {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub public_metrics: Option<PublicMetrics>,
}

/// Engagement counters. Any counter the API leaves out or sends as `null`
/// reads as `0`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicMetrics {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub like_count: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub retweet_count: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub reply_count: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub quote_count: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub impression_count: u64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u64>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// An author from the inclusion table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUser {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub verified: bool,
}

/// One search response reduced to what normalization needs.
///
/// `users` is keyed by author id and belongs to this response only.
#[derive(Debug, Default, Clone)]
pub struct SearchPage {
    pub posts: Vec<RawPost>,
    pub users: HashMap<String, RawUser>,
    pub result_count: Option<u64>,
    /// Present when more results exist. Never followed: one page per query.
    pub next_token: Option<String>,
    pub errors: Vec<ApiProblem>,
}

impl From<SearchResponse> for SearchPage {
    fn from(response: SearchResponse) -> Self {
        let users = response
            .includes
            .map(|inc| inc.users)
            .unwrap_or_default()
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();
        let meta = response.meta.unwrap_or_default();

        Self {
            posts: response.data.unwrap_or_default(),
            users,
            result_count: meta.result_count,
            next_token: meta.next_token,
            errors: response.errors,
        }
    }
}
