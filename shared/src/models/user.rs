//! Creator account model

use serde::{Deserialize, Serialize};

/// Creator account
///
/// `username` is the unique handle used in dashboard URLs and as the
/// `to_user` reference on payments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_pic: Option<String>,
    pub created_at: i64,
}

/// Upsert user payload (keyed by username)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpsert {
    pub username: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_pic: Option<String>,
}
