use crate::{BusinessId, LockerStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A physical locker. Locker numbers are unique within one business; the
/// database enforces that with `UNIQUE(business_id, locker_number)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locker {
    pub id: Option<i64>,
    pub business_id: Option<BusinessId>,
    pub locker_number: i32,
    pub status: LockerStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Locker {
    pub fn new(locker_number: i32) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            business_id: None,
            locker_number,
            status: LockerStatus::Available,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == LockerStatus::Available
    }
}
