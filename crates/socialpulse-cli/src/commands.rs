//! Command handlers. Each returns pretty-printed JSON for `main` to print.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use socialpulse_core::{AppConfig, PostSource};
use socialpulse_sample::SamplePostSource;
use socialpulse_sentiment::{build_overview, build_timeline, SentimentAnalyzer};

/// Score one text that must be present.
///
/// # Errors
///
/// Returns an error if `text` is absent or empty.
pub(crate) fn run_score(text: Option<&str>) -> anyhow::Result<String> {
    let result = SentimentAnalyzer::shared().analyze_required(text)?;
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Summarize newline-separated texts. Blank lines are skipped.
pub(crate) fn run_summarize(input: &str) -> anyhow::Result<String> {
    let texts: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    tracing::debug!(count = texts.len(), "summarizing input lines");
    let summary = SentimentAnalyzer::shared().summarize(&texts);
    Ok(serde_json::to_string_pretty(&summary)?)
}

pub(crate) fn run_overview(source: &dyn PostSource, now: DateTime<Utc>) -> anyhow::Result<String> {
    let scored = SentimentAnalyzer::shared().score_posts(source.fetch_posts(now));
    Ok(serde_json::to_string_pretty(&build_overview(&scored))?)
}

pub(crate) fn run_timeline(source: &dyn PostSource, now: DateTime<Utc>) -> anyhow::Result<String> {
    let scored = SentimentAnalyzer::shared().score_posts(source.fetch_posts(now));
    Ok(serde_json::to_string_pretty(&build_timeline(&scored, now))?)
}

pub(crate) fn sample_source(
    config: &AppConfig,
    count: Option<usize>,
    seed: Option<u64>,
) -> SamplePostSource {
    let source = SamplePostSource::new(
        count.unwrap_or(config.sample_post_count),
        config.sample_max_age_hours,
    );
    match seed {
        Some(seed) => source.with_seed(seed),
        None => source,
    }
}

/// Read the whole of `path`, or stdin when no path is given.
pub(crate) fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
