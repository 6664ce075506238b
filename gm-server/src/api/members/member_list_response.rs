use crate::api::members::member_dto::MemberDto;

use gm_core::Member;
use gm_db::PageResult;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberDto>,
    pub page: u32,
    pub size: u32,
    pub total: i64,
}

impl From<PageResult<Member>> for MemberListResponse {
    fn from(page: PageResult<Member>) -> Self {
        Self {
            members: page.items.into_iter().map(MemberDto::from).collect(),
            page: page.page,
            size: page.size,
            total: page.total,
        }
    }
}
