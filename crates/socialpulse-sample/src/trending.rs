use serde::Serialize;

/// One row of the static trending-hashtags list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendingHashtag {
    pub tag: &'static str,
    pub count: u32,
    /// Growth in percent.
    pub growth: f64,
}

#[rustfmt::skip]
const TRENDING: [TrendingHashtag; 10] = [
    TrendingHashtag { tag: "#AI", count: 1250, growth: 15.5 },
    TrendingHashtag { tag: "#MachineLearning", count: 980, growth: 12.3 },
    TrendingHashtag { tag: "#DataScience", count: 875, growth: 8.7 },
    TrendingHashtag { tag: "#Python", count: 756, growth: 10.2 },
    TrendingHashtag { tag: "#React", count: 654, growth: 7.8 },
    TrendingHashtag { tag: "#WebDev", count: 543, growth: 6.5 },
    TrendingHashtag { tag: "#JavaScript", count: 498, growth: 5.9 },
    TrendingHashtag { tag: "#TechNews", count: 432, growth: 4.2 },
    TrendingHashtag { tag: "#Coding", count: 387, growth: 3.8 },
    TrendingHashtag { tag: "#Programming", count: 321, growth: 2.5 },
];

/// Fixed trending list, ordered by count descending.
#[must_use]
pub fn trending_hashtags() -> &'static [TrendingHashtag] {
    &TRENDING
}
