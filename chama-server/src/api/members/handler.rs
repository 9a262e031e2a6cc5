//! Member API Handlers

use axum::extract::{Path, Query, State};
use http::StatusCode;
use serde::Deserialize;
use shared::models::{MemberCreate, MemberId, MemberWithStatus, PaymentStatus, PaymentUpdate};
use shared::payment::derive_payment_status;

use crate::api::extract::ValidJson;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

fn parse_id(raw: &str) -> AppResult<MemberId> {
    raw.parse()
        .map_err(|_| AppError::invalid_request(format!("Invalid member id: {}", raw)))
}

/// GET /api/members?status=paid|pending|overdue
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<ApiResponse<Vec<MemberWithStatus>>> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<PaymentStatus>)
        .transpose()
        .map_err(AppError::invalid_request)?;

    let members = state.members.list(state.today(), status).await;
    Ok(ApiResponse::success(members))
}

/// GET /api/members/unpaid - ids for "select all unpaid"
pub async fn unpaid(State(state): State<ServerState>) -> ApiResponse<Vec<MemberId>> {
    ApiResponse::success(state.members.unpaid_ids().await)
}

/// GET /api/members/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<MemberWithStatus>> {
    let member = state.members.get(parse_id(&id)?).await?;
    Ok(ApiResponse::success(MemberWithStatus {
        status: derive_payment_status(&member, state.today()),
        member,
    }))
}

/// POST /api/members
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<MemberCreate>,
) -> AppResult<(StatusCode, ApiResponse<MemberWithStatus>)> {
    let member = state.members.create(payload).await?;
    let response = ApiResponse::success_with_message(
        "Member added",
        MemberWithStatus {
            status: derive_payment_status(&member, state.today()),
            member,
        },
    );
    Ok((StatusCode::CREATED, response))
}

/// PATCH /api/members/{id}/payment
pub async fn update_payment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<PaymentUpdate>,
) -> AppResult<ApiResponse<MemberWithStatus>> {
    let member = state
        .members
        .update_payment(parse_id(&id)?, payload.paid)
        .await?;
    Ok(ApiResponse::success(MemberWithStatus {
        status: derive_payment_status(&member, state.today()),
        member,
    }))
}
