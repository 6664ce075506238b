//! Locker REST API handlers

use crate::api::delete_response::DeleteResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::lockers::create_locker_request::CreateLockerRequest;
use crate::api::lockers::locker_list_response::LockerListResponse;
use crate::api::lockers::locker_response::LockerResponse;
use crate::api::lockers::update_locker_request::UpdateLockerRequest;
use crate::api::page_query::PageQuery;
use crate::state::AppState;

use gm_core::Locker;
use gm_db::LockerService;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;

fn validate_number(locker_number: i32) -> ApiResult<()> {
    if locker_number <= 0 {
        return Err(ApiError::validation(
            "lockerNumber must be positive",
            Some("lockerNumber"),
        ));
    }
    Ok(())
}

/// GET /api/v1/lockers
pub async fn list_lockers(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<LockerListResponse>> {
    let service = LockerService::new(state.pool.clone());
    let page = service.find_page(query.into()).await?;

    Ok(Json(LockerListResponse::from(page)))
}

/// GET /api/v1/lockers/{id}
pub async fn get_locker(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<LockerResponse>> {
    let service = LockerService::new(state.pool.clone());
    let locker = service.get(id).await?;

    Ok(Json(LockerResponse {
        locker: locker.into(),
    }))
}

/// POST /api/v1/lockers
pub async fn create_locker(
    State(state): State<AppState>,
    Json(request): Json<CreateLockerRequest>,
) -> ApiResult<(StatusCode, Json<LockerResponse>)> {
    validate_number(request.locker_number)?;

    let locker = Locker::new(request.locker_number);

    let service = LockerService::new(state.pool.clone());
    let saved = service.save(locker).await?;

    Ok((
        StatusCode::CREATED,
        Json(LockerResponse {
            locker: saved.into(),
        }),
    ))
}

/// PUT /api/v1/lockers/{id}
pub async fn update_locker(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateLockerRequest>,
) -> ApiResult<Json<LockerResponse>> {
    validate_number(request.locker_number)?;

    let mut locker = Locker::new(request.locker_number);
    locker.status = request.status;
    locker.updated_at = Utc::now();

    let service = LockerService::new(state.pool.clone());
    let updated = service.update(id, locker).await?;

    Ok(Json(LockerResponse {
        locker: updated.into(),
    }))
}

/// DELETE /api/v1/lockers/{id}
pub async fn delete_locker(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let service = LockerService::new(state.pool.clone());
    service.delete_by_id(id).await?;

    Ok(Json(DeleteResponse { deleted: true, id }))
}
