use civica_domain::models::{notification, report, transfer, user};
use civica_types::common::{Category, Department, ReportStatus, Role, TransferStatus};
use civica_types::errors::DbError;

use crate::models as db_models;

impl TryFrom<db_models::Report> for report::Report {
    type Error = DbError;

    fn try_from(row: db_models::Report) -> Result<Self, Self::Error> {
        let location = match (row.latitude, row.longitude, row.address) {
            (Some(latitude), Some(longitude), address) => report::LocationKind::Geo {
                latitude,
                longitude,
                address,
            },
            (None, None, Some(text)) => report::LocationKind::Address { text },
            _ => {
                return Err(DbError::Decode(format!(
                    "report {} has neither coordinates nor an address",
                    row.id
                )));
            }
        };

        let status = ReportStatus::parse(&row.status)
            .ok_or_else(|| DbError::Decode(format!("unknown report status '{}'", row.status)))?;

        Ok(report::Report {
            id: row.id,
            reporter_id: row.reporter_id,
            title: row.title,
            description: row.description,
            category: Category::parse(&row.category),
            severity: row.severity as u8,
            media: serde_json::from_value(row.media)?,
            location,
            votes: row.votes as u32,
            voters: serde_json::from_value(row.voters)?,
            department: Department::parse(&row.department),
            priority_score: row.priority_score as u32,
            status,
            status_history: serde_json::from_value(row.status_history)?,
            verification: serde_json::from_value(row.verification)?,
            sla_start: row.sla_start,
            sla_days: row.sla_days.map(|d| d as u32),
            comments: serde_json::from_value(row.comments)?,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<db_models::TransferLog> for transfer::TransferLog {
    type Error = DbError;

    fn try_from(row: db_models::TransferLog) -> Result<Self, Self::Error> {
        let status = TransferStatus::parse(&row.status)
            .ok_or_else(|| DbError::Decode(format!("unknown transfer status '{}'", row.status)))?;

        Ok(transfer::TransferLog {
            id: row.id,
            report_id: row.report_id,
            requested_by: row.requested_by,
            from_department: Department::parse(&row.from_department),
            to_department: Department::parse(&row.to_department),
            reason: row.reason,
            admin_verification: serde_json::from_value(row.admin_verification)?,
            status,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<db_models::User> for user::User {
    type Error = DbError;

    fn try_from(row: db_models::User) -> Result<Self, Self::Error> {
        let role = Role::parse(&row.role)
            .ok_or_else(|| DbError::Decode(format!("unknown role '{}'", row.role)))?;

        Ok(user::User {
            id: row.id,
            name: row.name,
            role,
            department: row.department.as_deref().map(Department::parse),
            warnings: row.warnings as u32,
            blocked: row.blocked,
            created_at: row.created_at,
        })
    }
}

impl From<db_models::Notification> for notification::Notification {
    fn from(row: db_models::Notification) -> Self {
        notification::Notification {
            id: row.id,
            user_id: row.user_id,
            message: row.message,
            read: row.read,
            created_at: row.created_at,
        }
    }
}
