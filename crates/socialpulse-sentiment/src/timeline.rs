//! Calendar-day timelines over a scored batch.

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::types::{
    EngagementBucket, ScoredPost, SentimentDistribution, SentimentTimeline, TimelineBucket,
};

/// Number of daily buckets in the sentiment timeline, today included.
pub const TIMELINE_DAYS: u32 = 7;

/// Cap on the `recent_posts` pass-through list.
pub const RECENT_POSTS_LIMIT: usize = 10;

/// Index of the bucket a timestamp falls into, counting back from `today`.
///
/// `None` for dates after `today` or `window` or more days before it.
fn bucket_index(today: NaiveDate, timestamp: DateTime<Utc>, window: u32) -> Option<usize> {
    let days_back = (today - timestamp.date_naive()).num_days();
    if days_back < 0 || days_back >= i64::from(window) {
        return None;
    }
    usize::try_from(days_back).ok()
}

/// Dates covered by a window, most recent first.
fn window_dates(today: NaiveDate, window: u32) -> impl Iterator<Item = NaiveDate> {
    (0..window).map_while(move |i| today.checked_sub_days(Days::new(u64::from(i))))
}

/// Per-day sentiment counts for the 7 days ending at `now`, plus the leading
/// posts of the batch.
///
/// Posts dated outside the window are ignored. `recent_posts` keeps the
/// producer's order and is not re-sorted.
#[must_use]
pub fn build_timeline(posts: &[ScoredPost], now: DateTime<Utc>) -> SentimentTimeline {
    let today = now.date_naive();
    let mut timeline: Vec<TimelineBucket> = window_dates(today, TIMELINE_DAYS)
        .map(|date| TimelineBucket {
            date,
            counts: SentimentDistribution::default(),
        })
        .collect();

    let mut excluded = 0_usize;
    for scored in posts {
        match bucket_index(today, scored.post.timestamp, TIMELINE_DAYS)
            .and_then(|i| timeline.get_mut(i))
        {
            Some(bucket) => bucket.counts.record(scored.sentiment),
            None => excluded += 1,
        }
    }

    tracing::debug!(posts = posts.len(), excluded, "built sentiment timeline");

    SentimentTimeline {
        timeline,
        recent_posts: posts.iter().take(RECENT_POSTS_LIMIT).cloned().collect(),
    }
}

/// Summed likes, shares and comments per day for the `days` days ending at
/// `now`, most recent first.
#[must_use]
pub fn build_engagement_timeline(
    posts: &[ScoredPost],
    now: DateTime<Utc>,
    days: u32,
) -> Vec<EngagementBucket> {
    let today = now.date_naive();
    let mut buckets: Vec<EngagementBucket> = window_dates(today, days)
        .map(|date| EngagementBucket {
            date,
            likes: 0,
            shares: 0,
            comments: 0,
        })
        .collect();

    for scored in posts {
        let Some(bucket) =
            bucket_index(today, scored.post.timestamp, days).and_then(|i| buckets.get_mut(i))
        else {
            continue;
        };
        bucket.likes = bucket.likes.saturating_add(scored.post.likes);
        bucket.shares = bucket.shares.saturating_add(scored.post.shares);
        bucket.comments = bucket.comments.saturating_add(scored.post.comments);
    }

    buckets
}

#[cfg(test)]
#[path = "timeline_test.rs"]
mod tests;
