use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Social platforms a post can originate from.
///
/// Declaration order is the display order used by per-platform rollups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    Twitter,
    Instagram,
    LinkedIn,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::Instagram,
        Platform::LinkedIn,
        Platform::Facebook,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::Instagram => "Instagram",
            Platform::LinkedIn => "LinkedIn",
            Platform::Facebook => "Facebook",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single social-media post as delivered by an upstream producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Caller-assigned, unique within one batch.
    pub id: u64,
    pub platform: Platform,
    pub content: String,
    pub likes: u64,
    pub shares: u64,
    pub comments: u64,
    pub timestamp: DateTime<Utc>,
}

impl Post {
    /// Likes + shares + comments.
    #[must_use]
    pub fn engagement(&self) -> u64 {
        self.likes
            .saturating_add(self.shares)
            .saturating_add(self.comments)
    }
}

/// Upstream producer of posts.
///
/// Implementations decide ordering; aggregations that surface "recent" posts
/// keep whatever order the producer returns.
pub trait PostSource: Send + Sync {
    /// Produce a batch of posts whose timestamps are at or before `now`.
    fn fetch_posts(&self, now: DateTime<Utc>) -> Vec<Post>;
}
