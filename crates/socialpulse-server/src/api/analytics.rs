use axum::{extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use socialpulse_sample::{trending_hashtags, TrendingHashtag};
use socialpulse_sentiment::{
    build_engagement_timeline, build_overview, build_timeline, normalize_text, AnalyticsOverview,
    EngagementBucket, ScoredPost, SentimentScore, SentimentSummary, SentimentTimeline,
};

use crate::middleware::RequestId;

use super::{
    map_join_error, map_sentiment_error, ApiError, ApiJson, ApiResponse, AppState, ResponseMeta,
};

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SummaryRequest {
    #[serde(default)]
    pub texts: Vec<Value>,
}

/// Only JSON strings count as text; anything else is treated as absent.
fn text_of(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}

/// Pull a batch from the post source and score it off the async runtime.
async fn scored_batch(
    state: &AppState,
    req_id: &RequestId,
) -> Result<(Vec<ScoredPost>, DateTime<Utc>), ApiError> {
    let now = Utc::now();
    let posts = state.source.fetch_posts(now);
    let analyzer = state.analyzer;
    let scored = tokio::task::spawn_blocking(move || analyzer.score_posts(posts))
        .await
        .map_err(|e| map_join_error(req_id.0.clone(), &e))?;
    Ok((scored, now))
}

pub(super) async fn get_overview(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<AnalyticsOverview>>, ApiError> {
    let (scored, _) = scored_batch(&state, &req_id).await?;
    let data = build_overview(&scored);

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_sentiment(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<SentimentTimeline>>, ApiError> {
    let (scored, now) = scored_batch(&state, &req_id).await?;
    let data = build_timeline(&scored, now);

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_engagement(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<EngagementBucket>>>, ApiError> {
    let (scored, now) = scored_batch(&state, &req_id).await?;
    let data = build_engagement_timeline(&scored, now, state.engagement_days);

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_trending(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<&'static [TrendingHashtag]>> {
    Json(ApiResponse {
        data: trending_hashtags(),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn analyze_post(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    ApiJson(body): ApiJson<AnalyzeRequest>,
) -> Result<Json<ApiResponse<SentimentScore>>, ApiError> {
    let data = state
        .analyzer
        .analyze_required(text_of(body.text.as_ref()))
        .map_err(|e| {
            tracing::debug!(error = %e, "rejected analyze request");
            map_sentiment_error(req_id.0.clone(), &e)
        })?;
    tracing::debug!(sentiment = %data.sentiment, score = data.score, "analyzed text");

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn summarize_posts(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    ApiJson(body): ApiJson<SummaryRequest>,
) -> Result<Json<ApiResponse<SentimentSummary>>, ApiError> {
    let analyzer = state.analyzer;
    let data = tokio::task::spawn_blocking(move || {
        let texts: Vec<&str> = body
            .texts
            .iter()
            .map(|v| normalize_text(text_of(Some(v))))
            .collect();
        analyzer.summarize(&texts)
    })
    .await
    .map_err(|e| map_join_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
