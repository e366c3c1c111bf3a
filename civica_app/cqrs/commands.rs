use uuid::Uuid;

use civica_domain::models::report::LocationKind;
use civica_types::common::{Category, Department, MediaRef, ReportStatus};

use crate::cqrs::Command;

/// A citizen files a new report. The id is generated up front so callers
/// can reference the created entity without a follow-up read.
#[derive(Debug, Clone)]
pub struct SubmitReport {
    pub id: Uuid,
    pub reporter_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: LocationKind,
    pub media: Vec<MediaRef>,
}

impl SubmitReport {
    pub fn new(
        reporter_id: Uuid,
        title: String,
        description: String,
        category: Category,
        location: LocationKind,
        media: Vec<MediaRef>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            reporter_id,
            title,
            description,
            category,
            location,
            media,
        }
    }
}

impl Command for SubmitReport {}

#[derive(Debug, Clone)]
pub enum VerificationDecision {
    Approve { severity: u8, note: Option<String> },
    Reject { note: String },
}

/// Admin admission gate for a pending citizen report.
#[derive(Debug, Clone)]
pub struct VerifyReport {
    pub admin_id: Uuid,
    pub report_id: Uuid,
    pub decision: VerificationDecision,
}

impl Command for VerifyReport {}

#[derive(Debug, Clone)]
pub struct VoteReport {
    pub citizen_id: Uuid,
    pub report_id: Uuid,
}

impl Command for VoteReport {}

#[derive(Debug, Clone)]
pub struct UpdateReportStatus {
    pub actor_id: Uuid,
    pub report_id: Uuid,
    pub status: ReportStatus,
    pub note: Option<String>,
}

impl Command for UpdateReportStatus {}

/// Phase 1 of the transfer protocol: the owning officer asks for a re-route.
#[derive(Debug, Clone)]
pub struct RequestTransfer {
    pub officer_id: Uuid,
    pub report_id: Uuid,
    pub to_department: Department,
    pub reason: String,
}

impl Command for RequestTransfer {}

#[derive(Debug, Clone)]
pub enum TransferDecision {
    Approve { note: Option<String> },
    Reject { note: String },
}

/// Phase 2 of the transfer protocol: the admin arbitrates.
#[derive(Debug, Clone)]
pub struct VerifyTransfer {
    pub admin_id: Uuid,
    pub transfer_id: Uuid,
    pub decision: TransferDecision,
}

impl Command for VerifyTransfer {}

#[derive(Debug, Clone)]
pub struct CommentOnReport {
    pub citizen_id: Uuid,
    pub report_id: Uuid,
    pub body: String,
}

impl Command for CommentOnReport {}

#[derive(Debug, Clone)]
pub struct ReplyToComment {
    pub officer_id: Uuid,
    pub report_id: Uuid,
    pub comment_id: Uuid,
    pub body: String,
}

impl Command for ReplyToComment {}

#[derive(Debug, Clone)]
pub struct WarnUser {
    pub admin_id: Uuid,
    pub user_id: Uuid,
    pub reason: String,
}

impl Command for WarnUser {}

#[derive(Debug, Clone)]
pub struct MarkNotificationRead {
    pub user_id: Uuid,
    pub notification_id: Uuid,
}

impl Command for MarkNotificationRead {}
