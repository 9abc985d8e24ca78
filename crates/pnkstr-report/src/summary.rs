//! Engagement totals, averages, and the top-ranked posts of a batch.

use pnkstr_core::NormalizedRecord;

/// Number of posts kept in [`EngagementSummary::top`].
pub const TOP_N: usize = 5;

/// Characters of post text kept in [`TopPost::text_preview`].
pub const TEXT_PREVIEW_CHARS: usize = 100;

/// Aggregates over a non-empty batch of records.
#[derive(Debug, Clone, PartialEq)]
pub struct EngagementSummary {
    pub count: usize,
    pub total_likes: u64,
    pub total_retweets: u64,
    pub total_replies: u64,
    pub total_quotes: u64,
    pub total_impressions: u64,
    pub avg_likes: f64,
    pub avg_retweets: f64,
    pub avg_replies: f64,
    /// Up to [`TOP_N`] posts, highest likes + retweets first.
    pub top: Vec<TopPost>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopPost {
    pub username: String,
    /// Likes + retweets + replies.
    pub total_engagement: u64,
    pub text_preview: String,
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
}

/// Summarizes `records`, or returns `None` when there is nothing to summarize.
///
/// Ranking is a stable sort on likes + retweets, descending, so records
/// with equal scores keep their input order.
#[must_use]
pub fn summarize(records: &[NormalizedRecord]) -> Option<EngagementSummary> {
    if records.is_empty() {
        return None;
    }

    let sum = |f: fn(&NormalizedRecord) -> u64| -> u64 { records.iter().map(f).sum() };
    let total_likes = sum(|r| r.likes);
    let total_retweets = sum(|r| r.retweets);
    let total_replies = sum(|r| r.replies);
    let total_quotes = sum(|r| r.quotes);
    let total_impressions = sum(|r| r.impressions);

    #[allow(clippy::cast_precision_loss)]
    let mean = |total: u64| total as f64 / records.len() as f64;

    let mut ranked: Vec<&NormalizedRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.ranking_score().cmp(&a.ranking_score()));
    let top = ranked.into_iter().take(TOP_N).map(top_post).collect();

    Some(EngagementSummary {
        count: records.len(),
        total_likes,
        total_retweets,
        total_replies,
        total_quotes,
        total_impressions,
        avg_likes: mean(total_likes),
        avg_retweets: mean(total_retweets),
        avg_replies: mean(total_replies),
        top,
    })
}

fn top_post(record: &NormalizedRecord) -> TopPost {
    TopPost {
        username: record.author_username.clone(),
        total_engagement: record.total_engagement(),
        text_preview: record.text.chars().take(TEXT_PREVIEW_CHARS).collect(),
        likes: record.likes,
        retweets: record.retweets,
        replies: record.replies,
    }
}
