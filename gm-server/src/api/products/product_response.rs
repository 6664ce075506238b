use crate::api::products::product_dto::ProductDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: ProductDto,
}
