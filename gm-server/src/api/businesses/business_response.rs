use crate::api::businesses::business_dto::BusinessDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BusinessResponse {
    pub business: BusinessDto,
}
