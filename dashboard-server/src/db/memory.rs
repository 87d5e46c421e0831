//! In-memory store
//!
//! Reference [`DashboardStore`] implementation backed by plain vectors
//! behind a `tokio::sync::RwLock`. Payments are kept in insertion order
//! and sorted at query time; the workload is dashboard-read dominated
//! and datasets are small, so clarity beats indexing here.

use async_trait::async_trait;
use tokio::sync::RwLock;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Campaign, CampaignStatus, CampaignUpsert, Payment, PaymentCreate, User, UserUpsert};
use shared::util::{now_millis, snowflake_id};

use super::seed::SeedData;
use super::store::DashboardStore;

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    campaigns: Vec<Campaign>,
    payments: Vec<Payment>,
}

/// Vector-backed store for development, tests, and seeded deployments
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load a seed snapshot, replacing current contents.
    pub async fn load_seed(&self, seed: SeedData) {
        let mut inner = self.inner.write().await;
        inner.users = seed.users;
        inner.campaigns = seed.campaigns;
        inner.payments = seed.payments;
    }
}

#[async_trait]
impl DashboardStore for MemoryStore {
    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.username == username).cloned())
    }

    async fn eligible_payments_for(&self, username: &str) -> AppResult<Vec<Payment>> {
        let inner = self.inner.read().await;
        let mut payments: Vec<Payment> = inner
            .payments
            .iter()
            .filter(|p| p.to_user == username && p.is_eligible())
            .cloned()
            .collect();
        // Stable sort keeps insertion order for equal timestamps
        payments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(payments)
    }

    async fn campaigns_for_creator(&self, creator_id: i64) -> AppResult<Vec<Campaign>> {
        let inner = self.inner.read().await;
        Ok(inner
            .campaigns
            .iter()
            .filter(|c| c.creator_id == creator_id && c.status != CampaignStatus::Deleted)
            .cloned()
            .collect())
    }

    async fn record_payment(&self, payment: PaymentCreate) -> AppResult<Payment> {
        let stored = Payment {
            id: snowflake_id(),
            to_user: payment.to_user,
            name: payment.name,
            email: payment.email,
            user_id: payment.user_id,
            amount: payment.amount,
            message: payment.message,
            campaign_id: payment.campaign_id,
            campaign_title: payment.campaign_title,
            done: payment.done,
            status: payment.status,
            anonymous: payment.anonymous,
            created_at: payment.created_at.unwrap_or_else(now_millis),
        };

        let mut inner = self.inner.write().await;
        inner.payments.push(stored.clone());
        Ok(stored)
    }

    async fn upsert_campaign(&self, campaign: CampaignUpsert) -> AppResult<Campaign> {
        let mut inner = self.inner.write().await;

        if !inner.users.iter().any(|u| u.id == campaign.creator_id) {
            return Err(AppError::new(ErrorCode::CreatorNotFound)
                .with_detail("creator_id", campaign.creator_id));
        }

        let now = now_millis();
        if let Some(id) = campaign.id
            && let Some(existing) = inner.campaigns.iter_mut().find(|c| c.id == id)
        {
            existing.creator_id = campaign.creator_id;
            existing.title = campaign.title;
            existing.description = campaign.description;
            existing.goal_amount = campaign.goal_amount;
            existing.status = campaign.status;
            existing.updated_at = now;
            return Ok(existing.clone());
        }

        let stored = Campaign {
            // Platform-assigned ids are preserved so records stay in sync
            id: campaign.id.unwrap_or_else(snowflake_id),
            creator_id: campaign.creator_id,
            title: campaign.title,
            description: campaign.description,
            goal_amount: campaign.goal_amount,
            status: campaign.status,
            created_at: now,
            updated_at: now,
        };
        inner.campaigns.push(stored.clone());
        Ok(stored)
    }

    async fn upsert_user(&self, user: UserUpsert) -> AppResult<User> {
        let mut inner = self.inner.write().await;

        if let Some(existing) = inner.users.iter_mut().find(|u| u.username == user.username) {
            // Only provided fields overwrite
            if user.name.is_some() {
                existing.name = user.name;
            }
            if user.email.is_some() {
                existing.email = user.email;
            }
            if user.profile_pic.is_some() {
                existing.profile_pic = user.profile_pic;
            }
            return Ok(existing.clone());
        }

        let stored = User {
            id: snowflake_id(),
            username: user.username,
            name: user.name,
            email: user.email,
            profile_pic: user.profile_pic,
            created_at: now_millis(),
        };
        inner.users.push(stored.clone());
        Ok(stored)
    }
}
