use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use socialpulse_core::{Platform, Post};

/// Polarity bucket derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl SentimentCategory {
    /// Scores strictly above this are positive.
    pub const POSITIVE_THRESHOLD: f64 = 0.1;
    /// Scores strictly below this are negative.
    pub const NEGATIVE_THRESHOLD: f64 = -0.1;

    /// Classify a polarity score. The thresholds themselves are neutral.
    #[must_use]
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > Self::POSITIVE_THRESHOLD {
            Self::Positive
        } else if polarity < Self::NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scorer output for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub sentiment: SentimentCategory,
    /// Polarity in `[-1.0, 1.0]`, 3 decimals.
    pub score: f64,
    /// `|polarity| * 100` capped at 100, 2 decimals.
    ///
    /// This is a rescaling of polarity magnitude, not a calibrated probability.
    pub confidence: f64,
    /// In `[0.0, 1.0]`, 3 decimals. Zero when no lexicon word matched.
    pub subjectivity: f64,
}

impl SentimentScore {
    /// Result for empty or absent text.
    pub const NEUTRAL: Self = Self {
        sentiment: SentimentCategory::Neutral,
        score: 0.0,
        confidence: 0.0,
        subjectivity: 0.0,
    };
}

/// Per-category counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    pub fn record(&mut self, category: SentimentCategory) {
        match category {
            SentimentCategory::Positive => self.positive += 1,
            SentimentCategory::Negative => self.negative += 1,
            SentimentCategory::Neutral => self.neutral += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

impl FromIterator<SentimentCategory> for SentimentDistribution {
    fn from_iter<I: IntoIterator<Item = SentimentCategory>>(iter: I) -> Self {
        let mut dist = Self::default();
        for category in iter {
            dist.record(category);
        }
        dist
    }
}

/// Summary statistics over a batch of texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub total_analyzed: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Mean polarity, 3 decimals. 0 for an empty batch.
    pub average_score: f64,
    /// Mean confidence, 2 decimals. 0 for an empty batch.
    pub average_confidence: f64,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
    pub neutral_percentage: f64,
}

/// A post together with its sentiment classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPost {
    #[serde(flatten)]
    pub post: Post,
    pub sentiment: SentimentCategory,
    pub score: f64,
}

/// Post count and summed engagement for one platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub posts: usize,
    pub engagement: u64,
}

/// Dashboard overview of a scored batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsOverview {
    pub total_posts: usize,
    pub total_engagement: u64,
    /// Mean post score, 2 decimals. 0 for an empty batch.
    pub avg_sentiment_score: f64,
    pub sentiment_distribution: SentimentDistribution,
    /// Always holds every [`Platform`], zero-valued when absent from the batch.
    pub platform_stats: BTreeMap<Platform, PlatformStats>,
}

/// Category counts for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBucket {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub counts: SentimentDistribution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentTimeline {
    /// Most recent day first.
    pub timeline: Vec<TimelineBucket>,
    /// Leading posts of the batch, in received order.
    pub recent_posts: Vec<ScoredPost>,
}

/// Summed engagement counters for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementBucket {
    pub date: NaiveDate,
    pub likes: u64,
    pub shares: u64,
    pub comments: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_neutral() {
        assert_eq!(
            SentimentCategory::from_polarity(0.1),
            SentimentCategory::Neutral
        );
        assert_eq!(
            SentimentCategory::from_polarity(-0.1),
            SentimentCategory::Neutral
        );
        assert_eq!(
            SentimentCategory::from_polarity(0.0),
            SentimentCategory::Neutral
        );
    }

    #[test]
    fn just_past_thresholds_classify() {
        assert_eq!(
            SentimentCategory::from_polarity(0.100_001),
            SentimentCategory::Positive
        );
        assert_eq!(
            SentimentCategory::from_polarity(-0.100_001),
            SentimentCategory::Negative
        );
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentCategory::Positive).expect("serialize");
        assert_eq!(json, "\"positive\"");
    }

    #[test]
    fn display_matches_serialized_name() {
        for category in [
            SentimentCategory::Positive,
            SentimentCategory::Negative,
            SentimentCategory::Neutral,
        ] {
            let json = serde_json::to_value(category).expect("serialize");
            assert_eq!(json, category.to_string());
        }
    }

    #[test]
    fn distribution_partitions_its_total() {
        let dist: SentimentDistribution = [
            SentimentCategory::Positive,
            SentimentCategory::Neutral,
            SentimentCategory::Negative,
            SentimentCategory::Positive,
        ]
        .into_iter()
        .collect();
        assert_eq!(dist.positive, 2);
        assert_eq!(dist.negative, 1);
        assert_eq!(dist.neutral, 1);
        assert_eq!(dist.total(), 4);
    }

    #[test]
    fn timeline_bucket_flattens_counts() {
        let bucket = TimelineBucket {
            date: NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date"),
            counts: SentimentDistribution {
                positive: 3,
                negative: 1,
                neutral: 0,
            },
        };
        let json = serde_json::to_value(bucket).expect("serialize");
        assert_eq!(json["date"], "2026-03-01");
        assert_eq!(json["positive"], 3);
        assert_eq!(json["negative"], 1);
        assert_eq!(json["neutral"], 0);
    }
}
