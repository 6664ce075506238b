//! Member entity - a customer of one business.

use crate::{BusinessId, Gender, MemberStatus};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A gym member. Tenant-scoped: `business_id` is stamped by the persistence
/// layer from the active business, never taken from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: Option<i64>,
    pub business_id: Option<BusinessId>,
    pub name: String,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub memo: Option<String>,
    pub status: MemberStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            business_id: None,
            name: name.into(),
            phone: None,
            gender: None,
            birth_date: None,
            memo: None,
            status: MemberStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }
}
