use axum::{extract::State, Json};

use crate::models::profile::Profile;
use crate::state::AppState;

/// GET /api/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.profile.as_ref().clone())
}
