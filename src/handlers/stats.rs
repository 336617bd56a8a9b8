use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{error::Result, state::AppState};

/// Handler for GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let stats = state.stats.get_stats().await?;
    Ok((StatusCode::OK, Json(stats)))
}
