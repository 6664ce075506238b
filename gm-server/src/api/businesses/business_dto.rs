use gm_core::{Business, BusinessStatus};

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDto {
    pub id: i64,
    pub name: String,
    pub status: BusinessStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Business> for BusinessDto {
    fn from(business: Business) -> Self {
        Self {
            id: business.id.unwrap_or_default(),
            name: business.name,
            status: business.status,
            created_at: business.created_at.to_rfc3339(),
            updated_at: business.updated_at.to_rfc3339(),
        }
    }
}
