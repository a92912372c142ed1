use crate::api::Game;
use crate::error::AppError;
use crate::service::StatsService;
use crate::stats::MatchWindow;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, warn};

const DEFAULT_COUNT: usize = 5;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<StatsService>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/league/mastery/:name/:tag", get(league_mastery))
        .route("/league/mastery/:name/:tag/:count", get(league_mastery))
        .route("/league/rank/:name/:tag", get(league_rank))
        .route("/league/rank/:name/:tag/:queue", get(league_rank))
        .route("/league/matches/:name/:tag", get(league_matches))
        .route("/league/matches/:name/:tag/:count", get(league_matches))
        .route("/league/match/:name/:tag", get(league_one_match))
        .route("/league/match/:name/:tag/:start", get(league_one_match))
        .route("/tft/rank/:name/:tag", get(tft_rank))
        .route("/tft/rank/:name/:tag/:queue", get(tft_rank))
        .route("/tft/matches/:name/:tag", get(tft_matches))
        .route("/tft/matches/:name/:tag/:count", get(tft_matches))
        .route("/tft/match/:name/:tag", get(tft_one_match))
        .route("/tft/match/:name/:tag/:start", get(tft_one_match))
        .fallback(invalid_request)
        .with_state(state)
}

pub async fn serve(state: AppState, bind_addr: &str) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AppError::ConfigError(format!("Failed to bind {}: {}", bind_addr, e)))?;
    tracing::info!(addr = bind_addr, "listening");

    axum::serve(listener, build_router(state))
        .await
        .map_err(|e| AppError::ConfigError(format!("Server error: {}", e)))
}

/// Path segments after `/:name/:tag`. The optional third segment is a count,
/// a 1-based start, or a queue name depending on the route.
type PlayerPath = Path<Vec<String>>;

struct PlayerRequest {
    name: String,
    tag: String,
    extra: Option<String>,
}

impl PlayerRequest {
    fn from_segments(mut segments: Vec<String>) -> Option<Self> {
        let extra = if segments.len() == 3 { segments.pop() } else { None };
        let tag = segments.pop()?;
        let name = segments.pop()?;
        Some(PlayerRequest { name, tag, extra })
    }

    fn number(&self, default: usize) -> Option<usize> {
        match &self.extra {
            Some(raw) => raw.parse().ok(),
            None => Some(default),
        }
    }
}

// Unknown paths answer 200 with an error body, as the service always has.
async fn invalid_request() -> Response {
    Json(json!({ "error": "Invalid request" })).into_response()
}

/// Runs a blocking service call off the async executor. Upstream and
/// lookup failures degrade to `fallback` with a 200, which is what callers
/// of this service have always received.
async fn respond<T, F>(state: AppState, fallback: T, call: F) -> Response
where
    T: Serialize + Send + 'static,
    F: FnOnce(&StatsService) -> Result<T, AppError> + Send + 'static,
{
    let service = state.service.clone();
    match tokio::task::spawn_blocking(move || call(service.as_ref())).await {
        Ok(Ok(value)) => Json(value).into_response(),
        Ok(Err(e)) => {
            warn!(error = %e, "request degraded to empty result");
            Json(fallback).into_response()
        }
        Err(e) => {
            error!(error = %e, "service task panicked");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "Internal error" })))
                .into_response()
        }
    }
}

async fn league_mastery(State(state): State<AppState>, Path(segments): PlayerPath) -> Response {
    let Some(req) = PlayerRequest::from_segments(segments) else {
        return invalid_request().await;
    };
    let Some(count) = req.number(DEFAULT_COUNT) else {
        return invalid_request().await;
    };
    respond(state, Vec::new(), move |s| s.top_champions(&req.name, &req.tag, count)).await
}

async fn league_rank(State(state): State<AppState>, Path(segments): PlayerPath) -> Response {
    rank(state, segments, Game::League).await
}

async fn tft_rank(State(state): State<AppState>, Path(segments): PlayerPath) -> Response {
    rank(state, segments, Game::Tft).await
}

async fn rank(state: AppState, segments: Vec<String>, game: Game) -> Response {
    let Some(req) = PlayerRequest::from_segments(segments) else {
        return invalid_request().await;
    };
    let league = req.extra.clone().unwrap_or_else(|| "SOLO".to_string());
    respond(state, None, move |s| s.rank(game, &req.name, &req.tag, &league)).await
}

async fn league_matches(State(state): State<AppState>, Path(segments): PlayerPath) -> Response {
    let Some(req) = PlayerRequest::from_segments(segments) else {
        return invalid_request().await;
    };
    let Some(count) = req.number(DEFAULT_COUNT) else {
        return invalid_request().await;
    };
    respond(state, Vec::new(), move |s| {
        s.league_matches(&req.name, &req.tag, MatchWindow::recent(count))
    })
    .await
}

async fn league_one_match(State(state): State<AppState>, Path(segments): PlayerPath) -> Response {
    let Some(req) = PlayerRequest::from_segments(segments) else {
        return invalid_request().await;
    };
    let Some(start) = req.number(1) else {
        return invalid_request().await;
    };
    respond(state, Vec::new(), move |s| {
        s.league_matches(&req.name, &req.tag, MatchWindow::new(start, 1))
    })
    .await
}

async fn tft_matches(State(state): State<AppState>, Path(segments): PlayerPath) -> Response {
    let Some(req) = PlayerRequest::from_segments(segments) else {
        return invalid_request().await;
    };
    let Some(count) = req.number(DEFAULT_COUNT) else {
        return invalid_request().await;
    };
    respond(state, Vec::new(), move |s| {
        s.tft_matches(&req.name, &req.tag, MatchWindow::recent(count))
    })
    .await
}

async fn tft_one_match(State(state): State<AppState>, Path(segments): PlayerPath) -> Response {
    let Some(req) = PlayerRequest::from_segments(segments) else {
        return invalid_request().await;
    };
    let Some(start) = req.number(1) else {
        return invalid_request().await;
    };
    respond(state, Vec::new(), move |s| {
        s.tft_matches(&req.name, &req.tag, MatchWindow::new(start, 1))
    })
    .await
}
