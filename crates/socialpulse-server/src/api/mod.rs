mod analytics;

use std::sync::Arc;

use axum::{
    extract::{FromRequest, Request},
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use socialpulse_core::PostSource;
use socialpulse_sentiment::{SentimentAnalyzer, SentimentError};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PostSource>,
    pub analyzer: SentimentAnalyzer<'static>,
    pub engagement_days: u32,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// JSON body extractor whose rejections use the [`ApiError`] envelope.
///
/// Missing content type, malformed JSON and shape mismatches all map to
/// `bad_request`.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request_id = req
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_default();

        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "rejected request body");
                Err(ApiError::new(request_id, "bad_request", rejection.body_text()))
            }
        }
    }
}

pub(super) fn map_sentiment_error(request_id: String, error: &SentimentError) -> ApiError {
    match error {
        SentimentError::EmptyText => ApiError::new(request_id, "bad_request", error.to_string()),
    }
}

pub(super) fn map_join_error(request_id: String, error: &tokio::task::JoinError) -> ApiError {
    tracing::error!(error = %error, "scoring task failed");
    ApiError::new(request_id, "internal_error", "scoring task failed")
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState) -> Router {
    let analytics = Router::new()
        .route("/api/analytics/overview", get(analytics::get_overview))
        .route("/api/analytics/sentiment", get(analytics::get_sentiment))
        .route("/api/analytics/trending", get(analytics::get_trending))
        .route("/api/analytics/engagement", get(analytics::get_engagement))
        .route("/api/analytics/analyze", post(analytics::analyze_post))
        .route("/api/analytics/summary", post(analytics::summarize_posts));

    Router::new()
        .route("/health", get(health))
        .merge(analytics)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData { status: "healthy" },
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
