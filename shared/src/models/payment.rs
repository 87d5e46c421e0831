//! Payment model
//!
//! One supporter contribution, denormalized the way the payment gateway
//! callback records it. Completion is signalled by either the `done` flag
//! or the gateway `status` string, depending on which callback path ran.

use serde::{Deserialize, Serialize};

/// Supporter payment to a creator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    /// Creator username this payment went to
    pub to_user: String,
    /// Supporter display name (absent for gateway-anonymous flows)
    pub name: Option<String>,
    pub email: Option<String>,
    /// Platform account id of the supporter, when logged in
    pub user_id: Option<String>,
    pub amount: f64,
    pub message: Option<String>,
    pub campaign_id: Option<i64>,
    /// Campaign title snapshot at payment time, survives renames
    pub campaign_title: Option<String>,
    pub done: bool,
    /// Raw gateway status string ("success", "pending", "failed", ...)
    pub status: Option<String>,
    pub anonymous: bool,
    pub created_at: i64,
}

impl Payment {
    /// Whether this payment counts toward statistics.
    ///
    /// The two completion signals come from different gateway callback
    /// paths; either alone marks the payment as settled.
    pub fn is_eligible(&self) -> bool {
        self.done || self.status.as_deref() == Some("success")
    }
}

/// Record payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreate {
    pub to_user: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub user_id: Option<String>,
    pub amount: f64,
    pub message: Option<String>,
    pub campaign_id: Option<i64>,
    pub campaign_title: Option<String>,
    #[serde(default)]
    pub done: bool,
    pub status: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
    /// Gateway completion time; the server fills in "now" when absent
    pub created_at: Option<i64>,
}
