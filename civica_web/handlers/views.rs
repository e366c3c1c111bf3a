use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use civica_domain::models::{notification::Notification, report::Report, transfer::TransferLog};
use civica_types::common::{
    Category, Department, ReportStatus, SlaStatus, TransferStatus, VerificationStatus,
};

/// Deadline block computed at response time; never stored.
#[derive(Debug, Serialize)]
pub struct SlaView {
    pub start: Option<DateTime<Utc>>,
    pub days: Option<u32>,
    pub end: Option<DateTime<Utc>>,
    pub status: SlaStatus,
}

#[derive(Debug, Serialize)]
pub struct ReportView {
    pub id: Uuid,
    pub reporter_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub severity: u8,
    pub location: civica_domain::models::report::LocationKind,
    pub media: Vec<civica_types::common::MediaRef>,
    pub votes: u32,
    pub department: Department,
    pub priority_score: u32,
    pub status: ReportStatus,
    pub status_history: Vec<civica_domain::models::report::StatusEntry>,
    pub verification: civica_domain::models::report::Verification,
    pub sla: SlaView,
    pub comments: Vec<civica_domain::models::report::Comment>,
    pub created_at: DateTime<Utc>,
}

impl ReportView {
    pub fn from_report(report: Report, now: DateTime<Utc>) -> Self {
        let sla = SlaView {
            start: report.sla_start,
            days: report.sla_days,
            end: report.sla_end(),
            status: report.sla_status(now),
        };

        Self {
            id: report.id,
            reporter_id: report.reporter_id,
            title: report.title,
            description: report.description,
            category: report.category,
            severity: report.severity,
            location: report.location,
            media: report.media,
            votes: report.votes,
            department: report.department,
            priority_score: report.priority_score,
            status: report.status,
            status_history: report.status_history,
            verification: report.verification,
            sla,
            comments: report.comments,
            created_at: report.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TransferView {
    pub id: Uuid,
    pub report_id: Uuid,
    pub requested_by: Uuid,
    pub from_department: Department,
    pub to_department: Department,
    pub reason: String,
    pub verification_status: VerificationStatus,
    pub status: TransferStatus,
    pub created_at: DateTime<Utc>,
}

impl From<TransferLog> for TransferView {
    fn from(transfer: TransferLog) -> Self {
        Self {
            id: transfer.id,
            report_id: transfer.report_id,
            requested_by: transfer.requested_by,
            from_department: transfer.from_department,
            to_department: transfer.to_department,
            reason: transfer.reason,
            verification_status: transfer.admin_verification.status,
            status: transfer.status,
            created_at: transfer.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationView {
    pub id: Uuid,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationView {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            message: notification.message,
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}
