use crate::api::businesses::business_dto::BusinessDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BusinessListResponse {
    pub businesses: Vec<BusinessDto>,
}
