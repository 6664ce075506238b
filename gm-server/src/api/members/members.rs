//! Member REST API handlers

use crate::api::delete_response::DeleteResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::members::create_member_request::CreateMemberRequest;
use crate::api::members::member_list_response::MemberListResponse;
use crate::api::members::member_response::MemberResponse;
use crate::api::members::update_member_request::UpdateMemberRequest;
use crate::api::page_query::PageQuery;
use crate::state::AppState;

use gm_core::Member;
use gm_db::MemberService;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;

/// GET /api/v1/members
pub async fn list_members(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<MemberListResponse>> {
    let service = MemberService::new(state.pool.clone());
    let page = service.find_page(query.into()).await?;

    Ok(Json(MemberListResponse::from(page)))
}

/// GET /api/v1/members/{id}
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MemberResponse>> {
    let service = MemberService::new(state.pool.clone());
    let member = service.get(id).await?;

    Ok(Json(MemberResponse {
        member: member.into(),
    }))
}

/// POST /api/v1/members
pub async fn create_member(
    State(state): State<AppState>,
    Json(request): Json<CreateMemberRequest>,
) -> ApiResult<(StatusCode, Json<MemberResponse>)> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name must not be blank", Some("name")));
    }

    let mut member = Member::new(request.name.trim());
    member.phone = request.phone;
    member.gender = request.gender;
    member.birth_date = request.birth_date;
    member.memo = request.memo;

    let service = MemberService::new(state.pool.clone());
    let saved = service.save(member).await?;

    Ok((
        StatusCode::CREATED,
        Json(MemberResponse {
            member: saved.into(),
        }),
    ))
}

/// PUT /api/v1/members/{id}
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateMemberRequest>,
) -> ApiResult<Json<MemberResponse>> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name must not be blank", Some("name")));
    }

    let mut member = Member::new(request.name.trim());
    member.phone = request.phone;
    member.gender = request.gender;
    member.birth_date = request.birth_date;
    member.memo = request.memo;
    if let Some(status) = request.status {
        member.status = status;
    }
    member.updated_at = Utc::now();

    let service = MemberService::new(state.pool.clone());
    let updated = service.update(id, member).await?;

    Ok(Json(MemberResponse {
        member: updated.into(),
    }))
}

/// DELETE /api/v1/members/{id}
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let service = MemberService::new(state.pool.clone());
    service.delete_by_id(id).await?;

    Ok(Json(DeleteResponse { deleted: true, id }))
}
