use crate::api::lockers::locker_dto::LockerDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LockerResponse {
    pub locker: LockerDto,
}
