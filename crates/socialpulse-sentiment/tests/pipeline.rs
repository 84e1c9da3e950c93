//! End-to-end scoring and aggregation over a hand-built batch.

use chrono::{DateTime, Duration, TimeZone, Utc};
use socialpulse_core::{Platform, Post};
use socialpulse_sentiment::{
    build_overview, build_timeline, score, score_posts, summarize, SentimentCategory,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 20, 8, 0, 0).unwrap()
}

fn batch() -> Vec<Post> {
    let texts = [
        (Platform::Twitter, "Amazing product! Highly recommend to everyone!"),
        (Platform::Instagram, "Not satisfied with the service. Very disappointed."),
        (Platform::LinkedIn, "Just okay, nothing special about it."),
        (Platform::Twitter, "Terrible experience. Would not recommend."),
        (Platform::Facebook, "Great quality and fast delivery!"),
    ];
    texts
        .iter()
        .zip(0_i64..)
        .map(|(&(platform, content), i)| Post {
            id: u64::try_from(i + 1).unwrap(),
            platform,
            content: content.to_string(),
            likes: 100,
            shares: 10,
            comments: 1,
            timestamp: now() - Duration::hours(20 * i),
        })
        .collect()
}

#[test]
fn overview_and_timeline_agree_on_distribution() {
    let scored = score_posts(batch());
    let overview = build_overview(&scored);
    let timeline = build_timeline(&scored, now());

    assert_eq!(overview.total_posts, 5);
    assert_eq!(overview.total_engagement, 555);
    assert_eq!(overview.platform_stats[&Platform::Twitter].posts, 2);

    let mut bucketed = socialpulse_sentiment::SentimentDistribution::default();
    for bucket in &timeline.timeline {
        bucketed.positive += bucket.counts.positive;
        bucketed.negative += bucket.counts.negative;
        bucketed.neutral += bucket.counts.neutral;
    }
    // every post is within 80 hours of now
    assert_eq!(bucketed, overview.sentiment_distribution);
    assert_eq!(timeline.recent_posts.len(), 5);
    assert_eq!(timeline.recent_posts[0].post.id, 1);
}

#[test]
fn summary_matches_individual_scores() {
    let texts: Vec<String> = batch().into_iter().map(|p| p.content).collect();
    let summary = summarize(&texts);
    let positives = texts
        .iter()
        .filter(|t| score(t).sentiment == SentimentCategory::Positive)
        .count();
    assert_eq!(summary.total_analyzed, 5);
    assert_eq!(summary.positive, positives);
    assert_eq!(summary.positive, 2);
    assert_eq!(summary.negative, 2);
    assert_eq!(summary.neutral, 1);
    assert_eq!(summary.positive_percentage, 40.0);
}

#[test]
fn scored_post_json_has_flat_post_fields() {
    let scored = score_posts(batch());
    let json = serde_json::to_value(&scored[0]).expect("serialize");
    assert_eq!(json["id"], 1);
    assert_eq!(json["platform"], "Twitter");
    assert_eq!(json["likes"], 100);
    assert_eq!(json["sentiment"], "positive");
    assert!(json["score"].as_f64().is_some_and(|s| s > 0.1));
}
