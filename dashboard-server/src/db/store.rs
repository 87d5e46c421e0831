//! Store seam
//!
//! The platform's primary datastore sits behind this trait; the server
//! ships an in-memory implementation and treats anything else as an
//! external collaborator wired in at startup.

use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::{Campaign, CampaignUpsert, Payment, PaymentCreate, User, UserUpsert};

/// Read/write interface the dashboard server needs from a datastore.
///
/// Read methods shape their results for the stats engine: payments come
/// back already filtered for eligibility and sorted newest first, and
/// deleted campaigns never surface.
#[async_trait]
pub trait DashboardStore: Send + Sync {
    /// Look up a creator by username.
    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Eligible payments for a creator, newest first.
    async fn eligible_payments_for(&self, username: &str) -> AppResult<Vec<Payment>>;

    /// Non-deleted campaigns for a creator.
    async fn campaigns_for_creator(&self, creator_id: i64) -> AppResult<Vec<Campaign>>;

    /// Record a gateway payment as delivered by the platform callback.
    async fn record_payment(&self, payment: PaymentCreate) -> AppResult<Payment>;

    /// Create or replace a campaign. The creator must exist.
    async fn upsert_campaign(&self, campaign: CampaignUpsert) -> AppResult<Campaign>;

    /// Create or update a creator account, keyed by username.
    async fn upsert_user(&self, user: UserUpsert) -> AppResult<User>;
}
