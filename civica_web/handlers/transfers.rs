use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use civica_app::{
    command_handlers::{RequestTransferCommandHandler, VerifyTransferCommandHandler},
    cqrs::{
        commands::{RequestTransfer, TransferDecision, VerifyTransfer},
        queries::{ListPendingTransfers, ListTransfersForReport},
    },
    queries_handlers::{ListPendingTransfersHandler, ListTransfersForReportHandler},
};
use civica_types::common::Department;

use crate::{error::WebError, extractors::Principal, handlers::views::TransferView, http::AppState};

#[derive(Debug, Deserialize)]
pub struct RequestTransferPayload {
    pub to_department: String,
    pub reason: String,
}

pub async fn request_transfer(
    State(state): State<AppState>,
    principal: Principal,
    Path(report_id): Path<Uuid>,
    Json(payload): Json<RequestTransferPayload>,
) -> Result<StatusCode, WebError> {
    state
        .app_bus
        .execute(
            RequestTransfer {
                officer_id: principal.user_id,
                report_id,
                to_department: Department::parse(&payload.to_department),
                reason: payload.reason,
            },
            RequestTransferCommandHandler::new(),
        )
        .await?;

    Ok(StatusCode::CREATED)
}

pub async fn list_report_transfers(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
) -> Result<Json<Vec<TransferView>>, WebError> {
    let transfers = state
        .app_bus
        .query(
            ListTransfersForReport { report_id },
            ListTransfersForReportHandler::new(),
        )
        .await?;

    Ok(Json(transfers.into_iter().map(TransferView::from).collect()))
}

pub async fn list_pending_transfers(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<Vec<TransferView>>, WebError> {
    let transfers = state
        .app_bus
        .query(
            ListPendingTransfers {
                admin_id: principal.user_id,
            },
            ListPendingTransfersHandler::new(),
        )
        .await?;

    Ok(Json(transfers.into_iter().map(TransferView::from).collect()))
}

#[derive(Debug, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum VerifyTransferPayload {
    Approve { note: Option<String> },
    Reject { note: String },
}

pub async fn verify_transfer(
    State(state): State<AppState>,
    principal: Principal,
    Path(transfer_id): Path<Uuid>,
    Json(payload): Json<VerifyTransferPayload>,
) -> Result<StatusCode, WebError> {
    let decision = match payload {
        VerifyTransferPayload::Approve { note } => TransferDecision::Approve { note },
        VerifyTransferPayload::Reject { note } => TransferDecision::Reject { note },
    };

    state
        .app_bus
        .execute(
            VerifyTransfer {
                admin_id: principal.user_id,
                transfer_id,
                decision,
            },
            VerifyTransferCommandHandler::new(),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
