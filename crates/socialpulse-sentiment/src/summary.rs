//! Batch summary statistics.

use crate::stats::{mean, percentage, round_to};
use crate::types::{SentimentDistribution, SentimentScore, SentimentSummary};

/// Reduce already-scored results to counts, averages and percentages.
///
/// Averages are taken over the rounded per-item outputs. Empty input yields
/// an all-zero summary.
pub(crate) fn summarize_scores(scores: &[SentimentScore]) -> SentimentSummary {
    let total = scores.len();
    let dist: SentimentDistribution = scores.iter().map(|s| s.sentiment).collect();

    SentimentSummary {
        total_analyzed: total,
        positive: dist.positive,
        negative: dist.negative,
        neutral: dist.neutral,
        average_score: round_to(mean(scores.iter().map(|s| s.score)), 3),
        average_confidence: round_to(mean(scores.iter().map(|s| s.confidence)), 2),
        positive_percentage: percentage(dist.positive, total),
        negative_percentage: percentage(dist.negative, total),
        neutral_percentage: percentage(dist.neutral, total),
    }
}
