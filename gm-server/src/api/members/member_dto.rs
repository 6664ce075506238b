use gm_core::{Gender, Member, MemberStatus};

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: i64,
    pub business_id: Option<i64>,
    pub name: String,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub memo: Option<String>,
    pub status: MemberStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Member> for MemberDto {
    fn from(member: Member) -> Self {
        Self {
            id: member.id.unwrap_or_default(),
            business_id: member.business_id.map(|b| b.get()),
            name: member.name,
            phone: member.phone,
            gender: member.gender,
            birth_date: member.birth_date,
            memo: member.memo,
            status: member.status,
            created_at: member.created_at.to_rfc3339(),
            updated_at: member.updated_at.to_rfc3339(),
        }
    }
}
