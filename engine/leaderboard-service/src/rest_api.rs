//! REST API endpoints for the leaderboard service
//!
//! This module exposes the ranked leaderboard and the per-row point
//! breakdowns over HTTP. Rows are recomputed from a fresh feed snapshot on
//! every request.

use feed_client::FeedClient;
use leaderboard_engine::{
    attribute, build_leaderboard, BreakdownResult, EngineError, LeaderboardRow, PointCategory,
};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{error, info};
use warp::http::StatusCode;
use warp::Filter;

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    fn new(code: &str, message: String) -> Self {
        Self {
            error: ErrorDetail { code: code.to_string(), message },
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Custom rejection for not-found responses
#[derive(Debug)]
struct NotFoundError(ErrorResponse);
impl warp::reject::Reject for NotFoundError {}

/// Custom rejection for malformed requests
#[derive(Debug)]
struct BadRequestError(ErrorResponse);
impl warp::reject::Reject for BadRequestError {}

/// Custom rejection for upstream feed failures
#[derive(Debug)]
struct UpstreamError(ErrorResponse);
impl warp::reject::Reject for UpstreamError {}

/// Query parameters for the breakdown endpoint
#[derive(Debug, Deserialize)]
pub struct BreakdownParams {
    pub athlete: String,
    pub category: String,
}

/// Breakdown response: the row's identity plus the expanded category
#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub athlete: String,
    pub team: String,
    pub position: String,
    pub breakdown: BreakdownResult,
}

/// Fetch all feeds and build the ranked leaderboard, mapping failures to
/// API rejections
async fn build_fresh_leaderboard(
    client: &FeedClient,
) -> Result<Vec<LeaderboardRow>, warp::Rejection> {
    let feeds = client.fetch_all().await.map_err(|e| {
        error!("Feed fetch failed: {e:#}");
        warp::reject::custom(UpstreamError(ErrorResponse::new(
            "FEEDS_UNAVAILABLE",
            "Failed to fetch upstream stat feeds".to_string(),
        )))
    })?;

    build_leaderboard(&feeds).map_err(|e| match e {
        EngineError::NoData => warp::reject::custom(NotFoundError(ErrorResponse::new(
            "NO_DATA",
            "No leaderboard data available".to_string(),
        ))),
    })
}

/// GET /api/leaderboard
async fn get_leaderboard(client: Arc<FeedClient>) -> Result<impl warp::Reply, warp::Rejection> {
    let rows = build_fresh_leaderboard(&client).await?;
    info!("Serving leaderboard with {} rows", rows.len());
    Ok(warp::reply::json(&rows))
}

/// GET /api/leaderboard/breakdown?athlete=...&category=stat|win|mvp
async fn get_breakdown(
    params: BreakdownParams,
    client: Arc<FeedClient>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let category: PointCategory = params.category.parse().map_err(|message: String| {
        warp::reject::custom(BadRequestError(ErrorResponse::new("BAD_CATEGORY", message)))
    })?;

    let rows = build_fresh_leaderboard(&client).await?;

    let row = rows.iter().find(|r| r.athlete == params.athlete).ok_or_else(|| {
        warp::reject::custom(NotFoundError(ErrorResponse::new(
            "ATHLETE_NOT_FOUND",
            format!("No leaderboard row for athlete: {}", params.athlete),
        )))
    })?;

    let response = BreakdownResponse {
        athlete: row.athlete.clone(),
        team: row.team.clone(),
        position: row.position.clone(),
        breakdown: attribute(row, category),
    };

    Ok(warp::reply::json(&response))
}

/// Map rejections to JSON error replies
async fn handle_rejection(err: warp::Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, body) = if let Some(NotFoundError(resp)) = err.find() {
        (StatusCode::NOT_FOUND, warp::reply::json(resp))
    } else if let Some(BadRequestError(resp)) = err.find() {
        (StatusCode::BAD_REQUEST, warp::reply::json(resp))
    } else if let Some(UpstreamError(resp)) = err.find() {
        (StatusCode::BAD_GATEWAY, warp::reply::json(resp))
    } else if err.is_not_found() {
        let resp = ErrorResponse::new("NOT_FOUND", "Unknown endpoint".to_string());
        (StatusCode::NOT_FOUND, warp::reply::json(&resp))
    } else {
        let resp = ErrorResponse::new("INTERNAL", "Unhandled server error".to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, warp::reply::json(&resp))
    };

    Ok(warp::reply::with_status(body, status))
}

/// Create REST API routes
pub fn create_routes(
    client: Arc<FeedClient>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let client_filter = warp::any().map(move || client.clone());

    // Ranked leaderboard endpoint
    let leaderboard = warp::path("api")
        .and(warp::path("leaderboard"))
        .and(warp::path::end())
        .and(warp::get())
        .and(client_filter.clone())
        .and_then(get_leaderboard);

    // Point breakdown endpoint
    let breakdown = warp::path("api")
        .and(warp::path("leaderboard"))
        .and(warp::path("breakdown"))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<BreakdownParams>())
        .and(client_filter)
        .and_then(get_breakdown);

    // Health check endpoint
    let health = warp::path("health").and(warp::get()).map(|| {
        warp::reply::json(&serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    });

    leaderboard
        .or(breakdown)
        .or(health)
        .recover(handle_rejection)
        .with(
            warp::cors()
                .allow_any_origin()
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET", "OPTIONS"]),
        )
}
