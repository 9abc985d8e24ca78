//! Flattening of API posts into [`NormalizedRecord`]s.

use std::collections::HashMap;

use pnkstr_core::NormalizedRecord;

use crate::error::NormalizeError;
use crate::types::{RawPost, RawUser, SearchPage};

/// Handle and display name used when a post's author is not in the user table.
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// Replaces every `\n` and `\r` with a single space so a post fits on one CSV line.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

/// Converts the posts of one response into records tagged with `query`.
///
/// Authors are resolved against `users`, the inclusion table from the same
/// response. Unresolved authors get [`UNKNOWN_AUTHOR`] and `verified = false`;
/// absent counts become `0`; `created_at` is passed through untouched.
///
/// # Errors
///
/// Returns [`NormalizeError::MissingId`] for the first post without an id.
/// No post is skipped.
pub fn normalize(
    query: &str,
    posts: &[RawPost],
    users: &HashMap<String, RawUser>,
) -> Result<Vec<NormalizedRecord>, NormalizeError> {
    posts
        .iter()
        .enumerate()
        .map(|(index, post)| normalize_post(query, index, post, users))
        .collect()
}

/// [`normalize`] over a whole [`SearchPage`].
///
/// # Errors
///
/// See [`normalize`].
pub fn normalize_page(
    query: &str,
    page: &SearchPage,
) -> Result<Vec<NormalizedRecord>, NormalizeError> {
    normalize(query, &page.posts, &page.users)
}

fn normalize_post(
    query: &str,
    index: usize,
    post: &RawPost,
    users: &HashMap<String, RawUser>,
) -> Result<NormalizedRecord, NormalizeError> {
    let tweet_id = post
        .id
        .clone()
        .ok_or(NormalizeError::MissingId { index })?;
    let author_id = post.author_id.clone().unwrap_or_default();
    let author = users.get(&author_id);
    let metrics = post.public_metrics.unwrap_or_default();

    Ok(NormalizedRecord {
        query: query.to_string(),
        tweet_id,
        created_at: post.created_at.clone().unwrap_or_default(),
        text: normalize_text(post.text.as_deref().unwrap_or_default()),
        author_id,
        author_username: author.map_or_else(|| UNKNOWN_AUTHOR.to_string(), |u| u.username.clone()),
        author_name: author.map_or_else(|| UNKNOWN_AUTHOR.to_string(), |u| u.name.clone()),
        author_verified: author.is_some_and(|u| u.verified),
        likes: metrics.like_count,
        retweets: metrics.retweet_count,
        replies: metrics.reply_count,
        quotes: metrics.quote_count,
        impressions: metrics.impression_count,
        language: post.lang.clone().unwrap_or_default(),
    })
}
