use axum::extract::State;

use crate::AppState;

pub async fn greeting(State(state): State<AppState>) -> &'static str {
    state.profile.greeting
}
