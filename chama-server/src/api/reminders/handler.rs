//! Reminder API Handlers

use axum::extract::{Path, Query, State};
use http::StatusCode;
use serde::Deserialize;
use shared::models::{Language, ReminderReceipt, ReminderRequest, ReminderTemplate, TemplateKind};

use crate::api::extract::ValidJson;
use crate::core::ServerState;
use crate::reminders::{self, ReminderBatch, templates};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

#[derive(Debug, Default, Deserialize)]
pub struct TemplateQuery {
    #[serde(default)]
    pub language: Language,
}

/// GET /api/reminders/templates?language=en|sw
pub async fn list_templates(
    Query(query): Query<TemplateQuery>,
) -> ApiResponse<Vec<ReminderTemplate>> {
    ApiResponse::success(templates::catalogue(query.language))
}

/// GET /api/reminders/templates/{id}?language=en|sw
pub async fn get_template(
    Path(id): Path<String>,
    Query(query): Query<TemplateQuery>,
) -> AppResult<ApiResponse<ReminderTemplate>> {
    let kind = id
        .parse::<TemplateKind>()
        .map_err(|e| AppError::with_message(ErrorCode::ReminderTemplateNotFound, e))?;
    Ok(ApiResponse::success(templates::template(kind, query.language)))
}

/// POST /api/reminders/preview - render without sending
pub async fn preview(
    State(state): State<ServerState>,
    ValidJson(request): ValidJson<ReminderRequest>,
) -> AppResult<ApiResponse<ReminderReceipt>> {
    let members = state.members.snapshot().await;
    let mut receipt = reminders::compose(&request, &members, state.today())?;
    receipt.queued = 0;
    Ok(ApiResponse::success(receipt))
}

/// POST /api/reminders - render and queue for delivery
pub async fn send(
    State(state): State<ServerState>,
    ValidJson(request): ValidJson<ReminderRequest>,
) -> AppResult<(StatusCode, ApiResponse<ReminderReceipt>)> {
    let members = state.members.snapshot().await;
    let receipt = reminders::compose(&request, &members, state.today())?;

    let batch_id = uuid::Uuid::new_v4().to_string();
    state.reminders.enqueue(ReminderBatch {
        batch_id: batch_id.clone(),
        reminders: receipt.reminders.clone(),
    })?;

    tracing::info!(
        batch_id = %batch_id,
        queued = receipt.queued,
        skipped = receipt.skipped.len(),
        "Reminders queued"
    );

    let message = format!("{} reminder(s) queued", receipt.queued);
    Ok((
        StatusCode::ACCEPTED,
        ApiResponse::success_with_message(message, receipt),
    ))
}
