use crate::{BusinessId, UserStatus, UserType};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An identity row. The username is the token subject; the bcrypt hash never
/// leaves the persistence and login paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: Option<String>,
    pub user_type: UserType,
    pub status: UserStatus,
    /// Business the user belongs to; owners may act across their businesses
    /// and carry `None` here.
    pub business_id: Option<BusinessId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        user_type: UserType,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            username: username.into(),
            password_hash: password_hash.into(),
            display_name: None,
            user_type,
            status: UserStatus::Active,
            business_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}
