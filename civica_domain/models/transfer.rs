use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use civica_types::common::{Department, TransferStatus, VerificationStatus};
use civica_types::errors::DomainError;

/// Admin decision block attached to a transfer request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminVerification {
    pub status: VerificationStatus,
    pub admin_id: Option<Uuid>,
    pub note: Option<String>,
    pub at: Option<DateTime<Utc>>,
}

impl Default for AdminVerification {
    fn default() -> Self {
        Self {
            status: VerificationStatus::Pending,
            admin_id: None,
            note: None,
            at: None,
        }
    }
}

/// One officer-initiated request to move a report to another department.
///
/// Stored as a standalone entity referencing the report by id: a report's
/// transfer history must survive report mutation, and several attempts over
/// a report's lifetime each need their own audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferLog {
    pub id: Uuid,
    pub report_id: Uuid,
    pub requested_by: Uuid,
    pub from_department: Department,
    pub to_department: Department,
    pub reason: String,
    pub admin_verification: AdminVerification,
    pub status: TransferStatus,
    pub created_at: DateTime<Utc>,
}

impl TransferLog {
    pub fn new(
        report_id: Uuid,
        requested_by: Uuid,
        from_department: Department,
        to_department: Department,
        reason: String,
    ) -> Result<Self, DomainError> {
        if to_department == from_department {
            return Err(DomainError::TransferSameDepartment(from_department));
        }
        if reason.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "reason" });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            report_id,
            requested_by,
            from_department,
            to_department,
            reason,
            admin_verification: AdminVerification::default(),
            status: TransferStatus::Pending,
            created_at: Utc::now(),
        })
    }

    pub fn is_pending(&self) -> bool {
        self.admin_verification.status == VerificationStatus::Pending
    }

    /// Records the admin approval. The transfer only becomes `Completed`
    /// through `complete()`, after the report re-route has been applied.
    pub fn approve(
        &mut self,
        admin_id: Uuid,
        note: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if !self.is_pending() {
            return Err(DomainError::TransferAlreadyDecided(self.id));
        }
        self.admin_verification = AdminVerification {
            status: VerificationStatus::Approved,
            admin_id: Some(admin_id),
            note,
            at: Some(now),
        };
        Ok(())
    }

    pub fn complete(&mut self) {
        self.status = TransferStatus::Completed;
    }

    pub fn reject(
        &mut self,
        admin_id: Uuid,
        note: String,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if !self.is_pending() {
            return Err(DomainError::TransferAlreadyDecided(self.id));
        }
        if note.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "note" });
        }
        self.admin_verification = AdminVerification {
            status: VerificationStatus::Rejected,
            admin_id: Some(admin_id),
            note: Some(note),
            at: Some(now),
        };
        self.status = TransferStatus::Rejected;
        Ok(())
    }
}
