use axum::{Json, extract::State};
use time::OffsetDateTime;

use crate::{AppState, error::AppResult, models::HealthResponse};

pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let response = HealthResponse::at(OffsetDateTime::now_utc(), state.profile.health_tag)?;

    Ok(Json(response))
}
