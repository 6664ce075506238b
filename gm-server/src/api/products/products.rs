//! Product REST API handlers

use crate::api::delete_response::DeleteResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::page_query::PageQuery;
use crate::api::products::create_product_request::CreateProductRequest;
use crate::api::products::product_list_response::ProductListResponse;
use crate::api::products::product_response::ProductResponse;
use crate::api::products::update_product_request::UpdateProductRequest;
use crate::state::AppState;

use gm_core::Product;
use gm_db::ProductService;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;

fn validate_price(price: i64) -> ApiResult<()> {
    if price < 0 {
        return Err(ApiError::validation(
            "price must not be negative",
            Some("price"),
        ));
    }
    Ok(())
}

/// GET /api/v1/products
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<ProductListResponse>> {
    let service = ProductService::new(state.pool.clone());
    let page = service.find_page(query.into()).await?;

    Ok(Json(ProductListResponse::from(page)))
}

/// GET /api/v1/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ProductResponse>> {
    let service = ProductService::new(state.pool.clone());
    let product = service.get(id).await?;

    Ok(Json(ProductResponse {
        product: product.into(),
    }))
}

/// POST /api/v1/products
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> ApiResult<(StatusCode, Json<ProductResponse>)> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name must not be blank", Some("name")));
    }
    validate_price(request.price)?;

    let mut product = Product::new(request.product_type, request.name.trim(), request.price);
    product.description = request.description;
    product.valid_days = request.valid_days;
    product.usage_count = request.usage_count;

    let service = ProductService::new(state.pool.clone());
    let saved = service.save(product).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            product: saved.into(),
        }),
    ))
}

/// PUT /api/v1/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name must not be blank", Some("name")));
    }
    validate_price(request.price)?;

    let mut product = Product::new(request.product_type, request.name.trim(), request.price);
    product.description = request.description;
    product.valid_days = request.valid_days;
    product.usage_count = request.usage_count;
    if let Some(is_active) = request.is_active {
        product.is_active = is_active;
    }
    product.updated_at = Utc::now();

    let service = ProductService::new(state.pool.clone());
    let updated = service.update(id, product).await?;

    Ok(Json(ProductResponse {
        product: updated.into(),
    }))
}

/// DELETE /api/v1/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let service = ProductService::new(state.pool.clone());
    service.delete_by_id(id).await?;

    Ok(Json(DeleteResponse { deleted: true, id }))
}
