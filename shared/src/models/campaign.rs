//! Campaign model

use serde::{Deserialize, Serialize};

/// Campaign lifecycle status
///
/// Deleted campaigns are retained for payment history but excluded from
/// every read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Active,
    Paused,
    Completed,
    Deleted,
}

/// Crowdfunding campaign run by a creator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub creator_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub goal_amount: Option<f64>,
    pub status: CampaignStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Campaign {
    /// Only active campaigns count toward the dashboard snapshot.
    pub fn is_active(&self) -> bool {
        self.status == CampaignStatus::Active
    }
}

/// Upsert campaign payload
///
/// Without `id` this creates a new campaign; with a known `id` it replaces
/// the stored one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignUpsert {
    pub id: Option<i64>,
    pub creator_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub goal_amount: Option<f64>,
    #[serde(default)]
    pub status: CampaignStatus,
}
