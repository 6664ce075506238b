use gm_core::ProductType;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub product_type: ProductType,
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub valid_days: Option<i32>,
    pub usage_count: Option<i32>,
}
