use gm_core::{Locker, LockerStatus};

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockerDto {
    pub id: i64,
    pub business_id: Option<i64>,
    pub locker_number: i32,
    pub status: LockerStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Locker> for LockerDto {
    fn from(locker: Locker) -> Self {
        Self {
            id: locker.id.unwrap_or_default(),
            business_id: locker.business_id.map(|b| b.get()),
            locker_number: locker.locker_number,
            status: locker.status,
            created_at: locker.created_at.to_rfc3339(),
            updated_at: locker.updated_at.to_rfc3339(),
        }
    }
}
