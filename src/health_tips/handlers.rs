use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use super::dto::HealthTips;
use super::services::generate_health_tips;
use crate::error::AppResult;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    // The browser SDK invokes functions with POST; GET is kept for plain fetches.
    Router::new().route("/generate-health-tips", get(health_tips).post(health_tips))
}

#[instrument(skip(state))]
pub async fn health_tips(State(state): State<AppState>) -> AppResult<Json<HealthTips>> {
    Ok(Json(generate_health_tips(&state).await?))
}
