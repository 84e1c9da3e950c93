//! Dashboard overview over a scored batch.

use std::collections::BTreeMap;

use socialpulse_core::Platform;

use crate::stats::{mean, round_to};
use crate::types::{AnalyticsOverview, PlatformStats, ScoredPost, SentimentDistribution};

/// Totals, sentiment distribution and per-platform rollups for a batch.
///
/// Every known platform appears in `platform_stats`, even with no posts.
/// An empty batch has an average score of `0.0`.
#[must_use]
pub fn build_overview(posts: &[ScoredPost]) -> AnalyticsOverview {
    let mut platform_stats: BTreeMap<Platform, PlatformStats> = Platform::ALL
        .iter()
        .map(|&p| (p, PlatformStats::default()))
        .collect();

    let mut total_engagement = 0_u64;
    for scored in posts {
        let engagement = scored.post.engagement();
        total_engagement = total_engagement.saturating_add(engagement);

        let stats = platform_stats.entry(scored.post.platform).or_default();
        stats.posts += 1;
        stats.engagement = stats.engagement.saturating_add(engagement);
    }

    let sentiment_distribution: SentimentDistribution =
        posts.iter().map(|p| p.sentiment).collect();

    tracing::debug!(posts = posts.len(), total_engagement, "built analytics overview");

    AnalyticsOverview {
        total_posts: posts.len(),
        total_engagement,
        avg_sentiment_score: round_to(mean(posts.iter().map(|p| p.score)), 2),
        sentiment_distribution,
        platform_stats,
    }
}
