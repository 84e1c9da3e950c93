use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use socialpulse_core::{Platform, Post, PostSource};

/// Canned post bodies the sample producer draws from.
pub const SAMPLE_TEXTS: [&str; 10] = [
    "Amazing product! Highly recommend to everyone!",
    "Not satisfied with the service. Very disappointed.",
    "Just okay, nothing special about it.",
    "Absolutely love this! Best purchase ever!",
    "Terrible experience. Would not recommend.",
    "Great quality and fast delivery!",
    "Could be better. Average experience.",
    "Fantastic! Exceeded my expectations!",
    "Waste of money. Very poor quality.",
    "Decent product for the price.",
];

/// Random post producer.
///
/// Ids run `1..=count` in emission order. Timestamps fall between 1 hour and
/// `max_age_hours` hours before `now`. A seeded source emits the same batch
/// for the same `now` on every call.
#[derive(Debug, Clone)]
pub struct SamplePostSource {
    count: usize,
    max_age_hours: u32,
    seed: Option<u64>,
}

impl SamplePostSource {
    #[must_use]
    pub fn new(count: usize, max_age_hours: u32) -> Self {
        Self {
            count,
            max_age_hours: max_age_hours.max(1),
            seed: None,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    fn generate<R: Rng>(&self, rng: &mut R, now: DateTime<Utc>) -> Vec<Post> {
        (1_u64..)
            .take(self.count)
            .map(|id| {
                let content = SAMPLE_TEXTS.choose(rng).copied().unwrap_or_default();
                let platform = Platform::ALL
                    .choose(rng)
                    .copied()
                    .unwrap_or(Platform::Twitter);
                let age_hours = rng.random_range(1..=self.max_age_hours);
                Post {
                    id,
                    platform,
                    content: content.to_string(),
                    likes: rng.random_range(10..=1000),
                    shares: rng.random_range(5..=500),
                    comments: rng.random_range(2..=200),
                    timestamp: now - Duration::hours(i64::from(age_hours)),
                }
            })
            .collect()
    }
}

impl PostSource for SamplePostSource {
    fn fetch_posts(&self, now: DateTime<Utc>) -> Vec<Post> {
        let posts = self.generate(&mut self.rng(), now);
        tracing::debug!(
            count = posts.len(),
            seeded = self.seed.is_some(),
            "generated sample posts"
        );
        posts
    }
}
