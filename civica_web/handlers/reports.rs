use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use civica_app::{
    command_handlers::{
        CommentOnReportCommandHandler, ReplyToCommentCommandHandler,
        SubmitReportCommandHandler, UpdateReportStatusCommandHandler, VerifyReportCommandHandler,
        VoteReportCommandHandler,
    },
    cqrs::{
        commands::{
            CommentOnReport, ReplyToComment, SubmitReport, UpdateReportStatus,
            VerificationDecision, VerifyReport, VoteReport,
        },
        queries::{
            GetReportById, ListDepartmentQueue, ListPendingVerification, ListReportsNearby,
        },
    },
    queries_handlers::{
        GetReportByIdHandler, ListDepartmentQueueHandler, ListPendingVerificationHandler,
        ListReportsNearbyHandler,
    },
};
use civica_domain::models::report::LocationKind;
use civica_types::common::{Category, MediaRef, ReportStatus};

use crate::{error::WebError, extractors::Principal, handlers::views::ReportView, http::AppState};

#[derive(Debug, Deserialize)]
pub struct SubmitReportPayload {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: LocationKind,
    #[serde(default)]
    pub media: Vec<MediaRef>,
}

pub async fn submit_report(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<SubmitReportPayload>,
) -> Result<impl IntoResponse, WebError> {
    let command = SubmitReport::new(
        principal.user_id,
        payload.title,
        payload.description,
        Category::parse(&payload.category),
        payload.location,
        payload.media,
    );
    let report_id = command.id;

    state
        .app_bus
        .execute(command, SubmitReportCommandHandler::new())
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": report_id }))))
}

pub async fn get_report(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
) -> Result<Json<ReportView>, WebError> {
    let report = state
        .app_bus
        .query(GetReportById { report_id }, GetReportByIdHandler::new())
        .await?;

    Ok(Json(ReportView::from_report(report, Utc::now())))
}

#[derive(Debug, Deserialize)]
pub struct NearbyParams {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
}

pub async fn list_reports_nearby(
    State(state): State<AppState>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<Vec<ReportView>>, WebError> {
    let reports = state
        .app_bus
        .query(
            ListReportsNearby {
                latitude: params.latitude,
                longitude: params.longitude,
                radius_meters: params.radius_meters,
            },
            ListReportsNearbyHandler::new(),
        )
        .await?;

    let now = Utc::now();
    Ok(Json(
        reports
            .into_iter()
            .map(|r| ReportView::from_report(r, now))
            .collect(),
    ))
}

pub async fn list_pending_verification(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<Vec<ReportView>>, WebError> {
    let reports = state
        .app_bus
        .query(
            ListPendingVerification {
                admin_id: principal.user_id,
            },
            ListPendingVerificationHandler::new(),
        )
        .await?;

    let now = Utc::now();
    Ok(Json(
        reports
            .into_iter()
            .map(|r| ReportView::from_report(r, now))
            .collect(),
    ))
}

pub async fn list_department_queue(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<Vec<ReportView>>, WebError> {
    let reports = state
        .app_bus
        .query(
            ListDepartmentQueue {
                officer_id: principal.user_id,
            },
            ListDepartmentQueueHandler::new(),
        )
        .await?;

    let now = Utc::now();
    Ok(Json(
        reports
            .into_iter()
            .map(|r| ReportView::from_report(r, now))
            .collect(),
    ))
}

#[derive(Debug, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum VerifyReportPayload {
    Approve { severity: u8, note: Option<String> },
    Reject { note: String },
}

pub async fn verify_report(
    State(state): State<AppState>,
    principal: Principal,
    Path(report_id): Path<Uuid>,
    Json(payload): Json<VerifyReportPayload>,
) -> Result<StatusCode, WebError> {
    let decision = match payload {
        VerifyReportPayload::Approve { severity, note } => {
            VerificationDecision::Approve { severity, note }
        }
        VerifyReportPayload::Reject { note } => VerificationDecision::Reject { note },
    };

    state
        .app_bus
        .execute(
            VerifyReport {
                admin_id: principal.user_id,
                report_id,
                decision,
            },
            VerifyReportCommandHandler::new(),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn vote_report(
    State(state): State<AppState>,
    principal: Principal,
    Path(report_id): Path<Uuid>,
) -> Result<StatusCode, WebError> {
    state
        .app_bus
        .execute(
            VoteReport {
                citizen_id: principal.user_id,
                report_id,
            },
            VoteReportCommandHandler::new(),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusPayload {
    pub status: ReportStatus,
    pub note: Option<String>,
}

pub async fn update_report_status(
    State(state): State<AppState>,
    principal: Principal,
    Path(report_id): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<StatusCode, WebError> {
    state
        .app_bus
        .execute(
            UpdateReportStatus {
                actor_id: principal.user_id,
                report_id,
                status: payload.status,
                note: payload.note,
            },
            UpdateReportStatusCommandHandler::new(),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct CommentPayload {
    pub body: String,
}

pub async fn comment_on_report(
    State(state): State<AppState>,
    principal: Principal,
    Path(report_id): Path<Uuid>,
    Json(payload): Json<CommentPayload>,
) -> Result<StatusCode, WebError> {
    state
        .app_bus
        .execute(
            CommentOnReport {
                citizen_id: principal.user_id,
                report_id,
                body: payload.body,
            },
            CommentOnReportCommandHandler::new(),
        )
        .await?;

    Ok(StatusCode::CREATED)
}

pub async fn reply_to_comment(
    State(state): State<AppState>,
    principal: Principal,
    Path((report_id, comment_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<CommentPayload>,
) -> Result<StatusCode, WebError> {
    state
        .app_bus
        .execute(
            ReplyToComment {
                officer_id: principal.user_id,
                report_id,
                comment_id,
                body: payload.body,
            },
            ReplyToCommentCommandHandler::new(),
        )
        .await?;

    Ok(StatusCode::CREATED)
}
