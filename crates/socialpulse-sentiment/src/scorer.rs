//! Lexicon-based sentiment scorer.

use std::sync::LazyLock;

use regex::Regex;
use socialpulse_core::Post;

use crate::error::SentimentError;
use crate::lexicon::Lexicon;
use crate::stats::{mean, round_to};
use crate::summary::summarize_scores;
use crate::types::{ScoredPost, SentimentCategory, SentimentScore, SentimentSummary};

/// Words (with inner apostrophes) and modifier-ending punctuation.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)*|[.!?;,]").expect("valid regex"));

/// Applied to a negated word's polarity: flips the sign and halves it.
const NEGATION_FACTOR: f64 = -0.5;

/// Unrounded scorer output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RawSentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Scores text against a borrowed [`Lexicon`].
///
/// Cheap to copy; holds no mutable state, so one analyzer can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct SentimentAnalyzer<'a> {
    lexicon: &'a Lexicon,
}

impl SentimentAnalyzer<'static> {
    /// Analyzer over the process-wide lexicon.
    #[must_use]
    pub fn shared() -> Self {
        Self::new(Lexicon::shared())
    }
}

impl Default for SentimentAnalyzer<'static> {
    fn default() -> Self {
        Self::shared()
    }
}

impl<'a> SentimentAnalyzer<'a> {
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Score one text.
    ///
    /// Empty text yields [`SentimentScore::NEUTRAL`]. Never fails.
    #[must_use]
    pub fn analyze(&self, text: &str) -> SentimentScore {
        if text.is_empty() {
            return SentimentScore::NEUTRAL;
        }

        let raw = self.raw_sentiment(text);
        let confidence = (raw.polarity.abs() * 100.0).min(100.0);

        SentimentScore {
            sentiment: SentimentCategory::from_polarity(raw.polarity),
            score: round_to(raw.polarity, 3),
            confidence: round_to(confidence, 2),
            subjectivity: round_to(raw.subjectivity, 3),
        }
    }

    /// Score possibly-absent text; `None` behaves like an empty string.
    #[must_use]
    pub fn analyze_input(&self, text: Option<&str>) -> SentimentScore {
        self.analyze(normalize_text(text))
    }

    /// Score text that the caller is required to supply.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::EmptyText`] when `text` is absent or empty.
    pub fn analyze_required(&self, text: Option<&str>) -> Result<SentimentScore, SentimentError> {
        match text {
            Some(t) if !t.is_empty() => Ok(self.analyze(t)),
            _ => Err(SentimentError::EmptyText),
        }
    }

    /// Score each text independently, preserving input order.
    #[must_use]
    pub fn batch_analyze<S: AsRef<str>>(&self, texts: &[S]) -> Vec<SentimentScore> {
        texts.iter().map(|t| self.analyze(t.as_ref())).collect()
    }

    /// Score a batch and reduce it to summary statistics.
    #[must_use]
    pub fn summarize<S: AsRef<str>>(&self, texts: &[S]) -> SentimentSummary {
        let scores = self.batch_analyze(texts);
        tracing::debug!(count = scores.len(), "summarized sentiment batch");
        summarize_scores(&scores)
    }

    /// Attach a sentiment classification to every post, keeping order.
    #[must_use]
    pub fn score_posts(&self, posts: Vec<Post>) -> Vec<ScoredPost> {
        posts
            .into_iter()
            .map(|post| {
                let result = self.analyze(&post.content);
                ScoredPost {
                    post,
                    sentiment: result.sentiment,
                    score: result.score,
                }
            })
            .collect()
    }

    /// Full-precision polarity and subjectivity.
    ///
    /// Each lexicon word yields one assessment. An intensifier scales only the
    /// word immediately after it. A negator applies only to the word right
    /// after it, looking through intensifiers ("not very good"). Punctuation
    /// `.`, `!`, `?`, `;` and `,` drops any pending modifier. The result is the
    /// mean over all assessments.
    pub(crate) fn raw_sentiment(&self, text: &str) -> RawSentiment {
        let lowered = text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'");

        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();
        let mut intensity = 1.0_f64;
        let mut negated = false;

        for token in TOKEN_RE.find_iter(&lowered).map(|m| m.as_str()) {
            if matches!(token, "." | "!" | "?" | ";" | ",") {
                intensity = 1.0;
                negated = false;
                continue;
            }
            if self.lexicon.is_negation(token) {
                negated = true;
                continue;
            }
            if let Some(factor) = self.lexicon.intensifier(token) {
                intensity *= factor;
                continue;
            }
            if let Some(word) = self.lexicon.word(token) {
                let mut polarity = (word.polarity * intensity).clamp(-1.0, 1.0);
                if negated {
                    polarity *= NEGATION_FACTOR;
                }
                polarities.push(polarity);
                subjectivities.push((word.subjectivity * intensity).clamp(0.0, 1.0));
            }
            intensity = 1.0;
            negated = false;
        }

        if polarities.is_empty() {
            return RawSentiment {
                polarity: 0.0,
                subjectivity: 0.0,
            };
        }

        RawSentiment {
            polarity: mean(polarities).clamp(-1.0, 1.0),
            subjectivity: mean(subjectivities).clamp(0.0, 1.0),
        }
    }
}

/// Coerce absent input to the empty string.
#[must_use]
pub fn normalize_text(text: Option<&str>) -> &str {
    text.unwrap_or_default()
}

/// Score one text with the shared lexicon.
#[must_use]
pub fn score(text: &str) -> SentimentScore {
    SentimentAnalyzer::shared().analyze(text)
}

/// Score possibly-absent text with the shared lexicon.
#[must_use]
pub fn score_input(text: Option<&str>) -> SentimentScore {
    SentimentAnalyzer::shared().analyze_input(text)
}

/// Summarize a batch of texts with the shared lexicon.
#[must_use]
pub fn summarize<S: AsRef<str>>(texts: &[S]) -> SentimentSummary {
    SentimentAnalyzer::shared().summarize(texts)
}

/// Score a batch of posts with the shared lexicon.
#[must_use]
pub fn score_posts(posts: Vec<Post>) -> Vec<ScoredPost> {
    SentimentAnalyzer::shared().score_posts(posts)
}

#[cfg(test)]
#[path = "scorer_test.rs"]
mod tests;
