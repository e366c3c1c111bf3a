use thiserror::Error;
use uuid::Uuid;

use crate::common::{Department, ReportStatus, Role};

/// Errors for domain logic (triage and lifecycle rules).
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("Severity {0} is out of range, must be between 1 and 5")]
    SeverityOutOfRange(u8),

    #[error("Operation requires the {required:?} role")]
    RoleMismatch { required: Role },

    #[error("User {0} is blocked")]
    BlockedUser(Uuid),

    #[error("Officer {officer_id} does not belong to the {department:?} department")]
    OfficerOutsideDepartment {
        officer_id: Uuid,
        department: Department,
    },

    #[error("A reporter cannot vote on their own report")]
    SelfVote,

    #[error("Citizen has already voted on this report")]
    DuplicateVote,

    #[error("Report {0} has already been verified")]
    VerificationAlreadyDecided(Uuid),

    #[error("Report {0} has not been verified yet")]
    ReportNotVerified(Uuid),

    #[error("Transfer {0} has already been verified")]
    TransferAlreadyDecided(Uuid),

    #[error("Report is already owned by the {0:?} department")]
    TransferSameDepartment(Department),

    #[error("Report {0} already has a pending transfer request")]
    PendingTransferExists(Uuid),

    #[error("Invalid status transition from {from:?} to {to:?}")]
    InvalidStatusTransition {
        from: ReportStatus,
        to: ReportStatus,
    },

    #[error("Report {0} has reached a terminal status")]
    ReportClosed(Uuid),

    #[error("Comment {0} not found on this report")]
    CommentNotFound(Uuid),

    #[error("Comment {0} already has an officer reply")]
    CommentAlreadyAnswered(Uuid),
}
