use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use ratefeed_core::quotes::Quote;

use crate::{config::Config, error::ApiResult, state::AppState};

async fn healthz() -> &'static str {
    "ok"
}

/// Latest snapshot: every quote published at the maximum stored date.
async fn get_latest(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Quote>>> {
    let quotes = state.quote_service.get_latest()?;
    Ok(Json(quotes))
}

/// Full history for one identifier, most recent date first.
async fn get_by_id(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Quote>>> {
    let quotes = state.quote_service.get_by_id(&id)?;
    Ok(Json(quotes))
}

/// Runs one import pass against the configured feed.
async fn run_import(State(state): State<Arc<AppState>>) -> ApiResult<Json<serde_json::Value>> {
    state.quote_service.import().await?;
    Ok(Json(json!({ "status": "ok" })))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/currencies", get(get_latest))
        .route("/currencies/import", post(run_import))
        .route("/currencies/{id}", get(get_by_id));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
