//! Dashboard API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::core::ServerState;
use crate::stats;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::DashboardData;

/// GET /api/dashboard/:username - full dashboard payload for a creator
///
/// Never fails from the frontend's point of view: an unknown username or
/// a storage error degrades to the empty payload with HTTP 200, so the
/// dashboard always has something to render.
pub async fn get_dashboard(
    State(state): State<ServerState>,
    Path(username): Path<String>,
) -> Json<DashboardData> {
    let now = Utc::now().with_timezone(&state.config.timezone);

    match load_dashboard(&state, &username, now).await {
        Ok(data) => Json(data),
        Err(e) if e.code == ErrorCode::CreatorNotFound => {
            tracing::debug!("Dashboard requested for unknown creator '{username}'");
            Json(stats::empty_dashboard(now))
        }
        Err(e) => {
            tracing::warn!("Dashboard for '{username}' degraded to empty payload: {e}");
            Json(stats::empty_dashboard(now))
        }
    }
}

async fn load_dashboard(
    state: &ServerState,
    username: &str,
    now: DateTime<Tz>,
) -> AppResult<DashboardData> {
    let user = state
        .store
        .find_user_by_username(username)
        .await?
        .ok_or_else(|| AppError::creator_not_found(username))?;

    let payments = state.store.eligible_payments_for(username).await?;
    let campaigns = state.store.campaigns_for_creator(user.id).await?;

    Ok(stats::build_dashboard(&campaigns, &payments, now))
}
