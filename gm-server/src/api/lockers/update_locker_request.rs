use gm_core::LockerStatus;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLockerRequest {
    pub locker_number: i32,
    pub status: LockerStatus,
}
