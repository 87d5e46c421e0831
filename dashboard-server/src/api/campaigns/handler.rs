//! Campaign Ingest Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use shared::models::{Campaign, CampaignUpsert};

/// POST /api/campaigns - create or replace a campaign
///
/// With an `id` the existing campaign is replaced; without one a new
/// campaign is created. The creator must already exist.
pub async fn upsert(
    State(state): State<ServerState>,
    Json(payload): Json<CampaignUpsert>,
) -> AppResult<Json<Campaign>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let stored = state.store.upsert_campaign(payload).await?;
    tracing::debug!(
        campaign_id = stored.id,
        creator_id = stored.creator_id,
        status = ?stored.status,
        "Campaign upserted"
    );
    Ok(Json(stored))
}
