//! Business (tenant) administration handlers. Owner-only; these manage the
//! tenants themselves and therefore run outside the tenant scope.

use crate::api::businesses::business_list_response::BusinessListResponse;
use crate::api::businesses::business_response::BusinessResponse;
use crate::api::businesses::create_business_request::CreateBusinessRequest;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::state::AppState;

use gm_core::Business;
use gm_db::BusinessRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /api/v1/businesses
pub async fn list_businesses(
    State(state): State<AppState>,
) -> ApiResult<Json<BusinessListResponse>> {
    let repo = BusinessRepository::new(state.pool.clone());
    let businesses = repo.find_all().await?;

    Ok(Json(BusinessListResponse {
        businesses: businesses.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/v1/businesses/{id}
pub async fn get_business(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<BusinessResponse>> {
    let repo = BusinessRepository::new(state.pool.clone());
    let business = repo.get(id).await?;

    Ok(Json(BusinessResponse {
        business: business.into(),
    }))
}

/// POST /api/v1/businesses
pub async fn create_business(
    State(state): State<AppState>,
    Json(request): Json<CreateBusinessRequest>,
) -> ApiResult<(StatusCode, Json<BusinessResponse>)> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name must not be blank", Some("name")));
    }

    let mut business = Business::new(request.name.trim());

    let repo = BusinessRepository::new(state.pool.clone());
    repo.create(&mut business).await?;

    Ok((
        StatusCode::CREATED,
        Json(BusinessResponse {
            business: business.into(),
        }),
    ))
}
