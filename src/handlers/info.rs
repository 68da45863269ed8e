use axum::{Json, extract::State};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::ServiceInfo,
};

pub async fn service_info(State(state): State<AppState>) -> AppResult<Json<ServiceInfo>> {
    let identity = state.profile.info.ok_or_else(|| {
        AppError::NotFound(format!("{} has no info endpoint", state.profile.display_name))
    })?;

    Ok(Json(ServiceInfo::new(identity, state.started_at.elapsed())))
}
