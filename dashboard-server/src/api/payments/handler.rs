//! Payment Ingest Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_USERNAME_LEN, validate_amount,
    validate_optional_text, validate_required_text,
};
use shared::models::{Payment, PaymentCreate};

/// POST /api/payments - record a payment callback
///
/// Pending payments are stored too; they just never surface in the
/// dashboard until a later callback marks them settled.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PaymentCreate>,
) -> AppResult<Json<Payment>> {
    validate_required_text(&payload.to_user, "to_user", MAX_USERNAME_LEN)?;
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.message, "message", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.campaign_title, "campaign_title", MAX_NAME_LEN)?;
    validate_amount(payload.amount)?;

    let stored = state.store.record_payment(payload).await?;
    tracing::debug!(
        payment_id = stored.id,
        to_user = %stored.to_user,
        amount = stored.amount,
        settled = stored.is_eligible(),
        "Payment recorded"
    );
    Ok(Json(stored))
}
