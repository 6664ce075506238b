use gm_core::{Product, ProductType};

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub business_id: Option<i64>,
    pub product_type: ProductType,
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub valid_days: Option<i32>,
    pub usage_count: Option<i32>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.unwrap_or_default(),
            business_id: product.business_id.map(|b| b.get()),
            product_type: product.product_type,
            name: product.name,
            price: product.price,
            description: product.description,
            valid_days: product.valid_days,
            usage_count: product.usage_count,
            is_active: product.is_active,
            created_at: product.created_at.to_rfc3339(),
            updated_at: product.updated_at.to_rfc3339(),
        }
    }
}
