//! Creator Profile Ingest Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_URL_LEN, MAX_USERNAME_LEN, validate_optional_text,
    validate_required_text,
};
use shared::models::{User, UserUpsert};

/// POST /api/users - create or update a creator profile
///
/// Keyed by username. On update, only the provided fields overwrite.
pub async fn upsert(
    State(state): State<ServerState>,
    Json(payload): Json<UserUpsert>,
) -> AppResult<Json<User>> {
    validate_required_text(&payload.username, "username", MAX_USERNAME_LEN)?;
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.profile_pic, "profile_pic", MAX_URL_LEN)?;

    let stored = state.store.upsert_user(payload).await?;
    tracing::debug!(user_id = stored.id, username = %stored.username, "Creator profile upserted");
    Ok(Json(stored))
}
