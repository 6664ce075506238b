use crate::api::members::member_dto::MemberDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub member: MemberDto,
}
