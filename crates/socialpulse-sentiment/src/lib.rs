//! Sentiment scoring and aggregation for SocialPulse.
//!
//! Scores post text with a lexicon-based analyzer and reduces scored batches
//! to the summaries the dashboard consumes: batch statistics, a platform
//! overview, a 7-day sentiment timeline and a daily engagement series.

pub mod error;
pub mod lexicon;
pub mod overview;
pub mod scorer;
pub mod timeline;
pub mod types;

mod stats;
mod summary;

pub use error::SentimentError;
pub use lexicon::Lexicon;
pub use overview::build_overview;
pub use scorer::{normalize_text, score, score_input, score_posts, summarize, SentimentAnalyzer};
pub use timeline::{
    build_engagement_timeline, build_timeline, RECENT_POSTS_LIMIT, TIMELINE_DAYS,
};
pub use types::{
    AnalyticsOverview, EngagementBucket, PlatformStats, ScoredPost, SentimentCategory,
    SentimentDistribution, SentimentScore, SentimentSummary, SentimentTimeline, TimelineBucket,
};
