use gm_auth::Principal;
use gm_core::UserType;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    pub user_id: i64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub user_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_id: Option<i64>,
}

impl From<&Principal> for UserInfoResponse {
    fn from(principal: &Principal) -> Self {
        Self {
            user_id: principal.user_id,
            username: principal.username.clone(),
            display_name: principal.display_name.clone(),
            user_type: principal.user_type,
            business_id: principal.business_id.map(|b| b.get()),
        }
    }
}
