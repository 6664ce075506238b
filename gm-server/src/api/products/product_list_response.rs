use crate::api::products::product_dto::ProductDto;

use gm_core::Product;
use gm_db::PageResult;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductDto>,
    pub page: u32,
    pub size: u32,
    pub total: i64,
}

impl From<PageResult<Product>> for ProductListResponse {
    fn from(page: PageResult<Product>) -> Self {
        Self {
            products: page.items.into_iter().map(ProductDto::from).collect(),
            page: page.page,
            size: page.size,
            total: page.total,
        }
    }
}
