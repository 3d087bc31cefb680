//! Analytics dashboard endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    analytics::{Insight, Sentiment, SentimentBreakdown},
    error::AppResult,
    models::{destination::DestinationStats, metric::MetricSeries},
    AppState,
};

/// Query parameters shared by the dashboard endpoints
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct AnalyticsQuery {
    /// Time range (7d, 30d, 90d, 1y); unknown values mean 30d
    pub range: Option<String>,
    /// Region filter, echoed back (default: all)
    pub region: Option<String>,
}

/// Headline figures
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardMetrics {
    /// Visitors summed over the range
    pub total_visitors: u64,
    /// Revenue summed over the range
    pub total_revenue: u64,
    /// Mean daily rating, absent when there are no samples
    pub average_satisfaction: Option<f64>,
    pub active_locations: usize,
}

/// Dashboard summary
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub range: String,
    pub region: String,
    pub generated_at: DateTime<Utc>,
    pub metrics: DashboardMetrics,
    /// Week-over-week visitor growth in percent; null when there is no baseline
    pub visitor_growth: Option<f64>,
    /// Week-over-week revenue growth in percent; null when there is no baseline
    pub revenue_growth: Option<f64>,
    pub destinations: Vec<DestinationStats>,
    pub sentiment: SentimentBreakdown,
    pub visitors: MetricSeries,
    pub revenue: MetricSeries,
    pub satisfaction: MetricSeries,
}

/// Projected values at one horizon
#[derive(Debug, Serialize, ToSchema)]
pub struct PredictionSet {
    /// Horizon in days
    pub days: u32,
    pub visitors: f64,
    pub revenue: f64,
    /// Rating clamped to 1-5
    pub satisfaction: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Predictions {
    pub next_week: PredictionSet,
    pub next_month: PredictionSet,
}

/// Downloadable analytics document
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyticsExport {
    pub time_range: String,
    pub region: String,
    pub generated_at: DateTime<Utc>,
    pub metrics: DashboardMetrics,
    pub visitors: MetricSeries,
    pub revenue: MetricSeries,
    pub satisfaction: MetricSeries,
    pub destinations: Vec<DestinationStats>,
    pub sentiment: SentimentBreakdown,
    pub insights: Vec<Insight>,
}

/// Trend estimation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TrendRequest {
    /// Samples at unit spacing, oldest first
    pub values: Vec<f64>,
    /// Days ahead to project (default: 7)
    #[validate(range(min = 0.0, message = "Horizon cannot be negative"))]
    pub horizon_days: Option<f64>,
    /// Number of trailing samples used (default: configured window)
    #[validate(range(min = 1, message = "Window must hold at least one sample"))]
    pub window_size: Option<usize>,
    /// Lower bound of the projection
    pub min: Option<f64>,
    /// Upper bound of the projection
    pub max: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TrendResponse {
    /// Least-squares slope over the window, per sample
    pub slope: f64,
    /// Window mean plus slope times horizon, clamped when bounds were given
    pub predicted: f64,
}

/// Growth rate request
#[derive(Debug, Deserialize, ToSchema)]
pub struct GrowthRequest {
    pub recent: Vec<f64>,
    pub previous: Vec<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GrowthResponse {
    /// Percent change of the recent mean over the previous mean
    pub growth: f64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SentimentRequest {
    #[validate(length(max = 10000, message = "Text is too long"))]
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SentimentResponse {
    pub sentiment: Sentiment,
}

/// Get the dashboard summary
#[utoipa::path(
    get,
    path = "/analytics/dashboard",
    tag = "analytics",
    params(AnalyticsQuery),
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary)
    )
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> AppResult<Json<DashboardSummary>> {
    let analytics = &state.services.analytics;
    let range = analytics.range(query.range.as_deref());
    let summary = analytics.dashboard(range, analytics.region(query.region)).await?;
    Ok(Json(summary))
}

/// Get threshold-based insights
#[utoipa::path(
    get,
    path = "/analytics/insights",
    tag = "analytics",
    params(AnalyticsQuery),
    responses(
        (status = 200, description = "Insights for the range", body = Vec<Insight>)
    )
)]
pub async fn get_insights(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> AppResult<Json<Vec<Insight>>> {
    let analytics = &state.services.analytics;
    let insights = analytics.insights(analytics.range(query.range.as_deref())).await?;
    Ok(Json(insights))
}

/// Get next-week and next-month projections
#[utoipa::path(
    get,
    path = "/analytics/predictions",
    tag = "analytics",
    params(AnalyticsQuery),
    responses(
        (status = 200, description = "Projections", body = Predictions)
    )
)]
pub async fn get_predictions(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> AppResult<Json<Predictions>> {
    let analytics = &state.services.analytics;
    let predictions = analytics.predictions(analytics.range(query.range.as_deref())).await?;
    Ok(Json(predictions))
}

/// Export the analytics document
#[utoipa::path(
    get,
    path = "/analytics/export",
    tag = "analytics",
    params(AnalyticsQuery),
    responses(
        (status = 200, description = "Analytics document", body = AnalyticsExport)
    )
)]
pub async fn export_analytics(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> AppResult<Json<AnalyticsExport>> {
    let analytics = &state.services.analytics;
    let range = analytics.range(query.range.as_deref());
    let export = analytics.export(range, analytics.region(query.region)).await?;
    Ok(Json(export))
}

/// Estimate the trend of a series and project it forward
#[utoipa::path(
    post,
    path = "/analytics/trend",
    tag = "analytics",
    request_body = TrendRequest,
    responses(
        (status = 200, description = "Slope and projection", body = TrendResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 422, description = "Values overflow", body = crate::error::ErrorResponse)
    )
)]
pub async fn estimate_trend(
    State(state): State<AppState>,
    Json(request): Json<TrendRequest>,
) -> AppResult<Json<TrendResponse>> {
    request.validate()?;

    let clamp = match (request.min, request.max) {
        (None, None) => None,
        (min, max) => Some((min.unwrap_or(f64::NEG_INFINITY), max.unwrap_or(f64::INFINITY))),
    };
    if let Some((lo, hi)) = clamp {
        if lo > hi {
            return Err(crate::error::AppError::BadRequest(
                "min must not exceed max".to_string(),
            ));
        }
    }

    let response = state.services.analytics.trend(
        &request.values,
        request.horizon_days.unwrap_or(7.0),
        request.window_size,
        clamp,
    )?;
    Ok(Json(response))
}

/// Percent growth between two windows
#[utoipa::path(
    post,
    path = "/analytics/growth",
    tag = "analytics",
    request_body = GrowthRequest,
    responses(
        (status = 200, description = "Growth rate", body = GrowthResponse),
        (status = 400, description = "A window is empty", body = crate::error::ErrorResponse),
        (status = 422, description = "Previous mean is zero or values overflow", body = crate::error::ErrorResponse)
    )
)]
pub async fn growth_rate(
    State(state): State<AppState>,
    Json(request): Json<GrowthRequest>,
) -> AppResult<Json<GrowthResponse>> {
    let growth = state.services.analytics.growth(&request.recent, &request.previous)?;
    Ok(Json(GrowthResponse { growth }))
}

/// Classify the sentiment of a piece of feedback
#[utoipa::path(
    post,
    path = "/analytics/sentiment",
    tag = "analytics",
    request_body = SentimentRequest,
    responses(
        (status = 200, description = "Sentiment", body = SentimentResponse)
    )
)]
pub async fn analyze_sentiment(
    State(state): State<AppState>,
    Json(request): Json<SentimentRequest>,
) -> AppResult<Json<SentimentResponse>> {
    request.validate()?;
    Ok(Json(SentimentResponse {
        sentiment: state.services.analytics.sentiment(&request.text),
    }))
}
