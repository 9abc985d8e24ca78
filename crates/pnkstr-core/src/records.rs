use serde::Serialize;

/// One post flattened into the canonical row shape written to CSV.
///
/// The CSV exporter serializes this struct directly: field names are the
/// header and declaration order is the column order. Engagement counts are
/// unsigned; a count the API did not return is stored as `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRecord {
    /// The search query that produced this post.
    pub query: String,
    pub tweet_id: String,
    /// Creation timestamp exactly as the API returned it.
    pub created_at: String,
    /// Post body with every `\n` and `\r` replaced by a space.
    pub text: String,
    pub author_id: String,
    /// `"unknown"` when the author is missing from the response's user table.
    pub author_username: String,
    /// `"unknown"` when the author is missing from the response's user table.
    pub author_name: String,
    pub author_verified: bool,
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
    pub quotes: u64,
    pub impressions: u64,
    pub language: String,
}

impl NormalizedRecord {
    /// Ranking score: likes plus retweets.
    #[must_use]
    pub fn ranking_score(&self) -> u64 {
        self.likes.saturating_add(self.retweets)
    }

    /// Likes plus retweets plus replies.
    #[must_use]
    pub fn total_engagement(&self) -> u64 {
        self.ranking_score().saturating_add(self.replies)
    }
}
