//! Member API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use shared::{Member, MemberList, MemberPayload};

use crate::core::ServerState;
use crate::utils::validation::validate_member;
use crate::utils::{AppError, AppJson, AppResult};

/// GET /members - 获取所有会员 (列表投影)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<MemberList>> {
    let members = state.members.list();
    Ok(Json(MemberList { members }))
}

/// GET /members/:id - 获取单个会员 (完整视图)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Member>> {
    let member = state
        .members
        .find_by_id(id)
        .ok_or_else(|| AppError::not_found(format!("Member {}", id)))?;
    Ok(Json(member))
}

/// POST /members - 创建会员
///
/// Any client-supplied id is ignored; ids are server-assigned. Responds
/// 201 with a `Location` header and the created member.
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<MemberPayload>,
) -> AppResult<impl IntoResponse> {
    let new_member = validate_member(payload)?;
    let member = state.members.create(new_member);
    tracing::info!(id = member.id, "Member created");

    let location = format!("/members/{}", member.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(member),
    ))
}

/// PUT /members/:id - 全量替换会员
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<MemberPayload>,
) -> AppResult<StatusCode> {
    // Path and payload must agree on the id, even for ids that do not exist
    if payload.id != Some(id) {
        return Err(AppError::validation("Path id and payload id do not match"));
    }

    let new_member = validate_member(payload)?;
    state
        .members
        .update(id, new_member)
        .ok_or_else(|| AppError::not_found(format!("Member {}", id)))?;
    tracing::info!(id, "Member updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /members/:id - 删除会员
///
/// Deleting an id that is already gone reports 404, not success.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if !state.members.delete(id) {
        return Err(AppError::not_found(format!("Member {}", id)));
    }
    tracing::info!(id, "Member deleted");

    Ok(StatusCode::NO_CONTENT)
}
