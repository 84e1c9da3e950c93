//! Synthetic upstream producers for demos and tests.
//!
//! Nothing here is used by the scoring or aggregation code; it only feeds
//! them posts and static dashboard data.

mod posts;
mod trending;

pub use posts::{SamplePostSource, SAMPLE_TEXTS};
pub use trending::{trending_hashtags, TrendingHashtag};
