use crate::api::lockers::locker_dto::LockerDto;

use gm_core::Locker;
use gm_db::PageResult;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LockerListResponse {
    pub lockers: Vec<LockerDto>,
    pub page: u32,
    pub size: u32,
    pub total: i64,
}

impl From<PageResult<Locker>> for LockerListResponse {
    fn from(page: PageResult<Locker>) -> Self {
        Self {
            lockers: page.items.into_iter().map(LockerDto::from).collect(),
            page: page.page,
            size: page.size,
            total: page.total,
        }
    }
}
