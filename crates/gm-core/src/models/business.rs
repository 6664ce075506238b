//! Business entity - the tenant itself.

use crate::BusinessStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A business is the unit of tenancy. Every tenant-scoped row references a
/// business by id; the business row itself is not tenant-scoped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: Option<i64>,
    pub name: String,
    pub status: BusinessStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Business {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: name.into(),
            status: BusinessStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == BusinessStatus::Active
    }
}
