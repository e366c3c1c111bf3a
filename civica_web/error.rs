use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use civica_types::errors::{ApplicationError, DbError, DomainError};

/// Response-side wrapper around [`ApplicationError`]; handlers bubble
/// application errors up with `?` and get the status mapping for free.
#[derive(Debug)]
pub struct WebError(pub ApplicationError);

impl From<ApplicationError> for WebError {
    fn from(err: ApplicationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self.0);
        }
        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

fn status_for(err: &ApplicationError) -> StatusCode {
    match err {
        ApplicationError::Domain(domain) => match domain {
            DomainError::EmptyField { .. }
            | DomainError::SeverityOutOfRange(_)
            | DomainError::TransferSameDepartment(_) => StatusCode::BAD_REQUEST,

            DomainError::RoleMismatch { .. }
            | DomainError::BlockedUser(_)
            | DomainError::OfficerOutsideDepartment { .. }
            | DomainError::SelfVote => StatusCode::FORBIDDEN,

            DomainError::DuplicateVote
            | DomainError::ReportNotVerified(_)
            | DomainError::VerificationAlreadyDecided(_)
            | DomainError::TransferAlreadyDecided(_)
            | DomainError::PendingTransferExists(_)
            | DomainError::InvalidStatusTransition { .. }
            | DomainError::ReportClosed(_)
            | DomainError::CommentAlreadyAnswered(_) => StatusCode::CONFLICT,

            DomainError::CommentNotFound(_) => StatusCode::NOT_FOUND,
        },
        ApplicationError::Db(db) => match db {
            DbError::ReportNotFound(_)
            | DbError::TransferNotFound(_)
            | DbError::UserNotFound(_)
            | DbError::NotificationNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        },
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civica_types::common::Department;
    use uuid::Uuid;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = ApplicationError::Domain(DomainError::EmptyField { field: "title" });
        assert_eq!(status_for(&err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn authorization_maps_to_forbidden() {
        let err = ApplicationError::Domain(DomainError::SelfVote);
        assert_eq!(status_for(&err), StatusCode::FORBIDDEN);
    }

    #[test]
    fn conflicts_map_to_conflict() {
        let err = ApplicationError::Domain(DomainError::TransferAlreadyDecided(Uuid::new_v4()));
        assert_eq!(status_for(&err), StatusCode::CONFLICT);
        let err = ApplicationError::Domain(DomainError::DuplicateVote);
        assert_eq!(status_for(&err), StatusCode::CONFLICT);
        let err = ApplicationError::Domain(DomainError::ReportNotVerified(Uuid::new_v4()));
        assert_eq!(status_for(&err), StatusCode::CONFLICT);
    }

    #[test]
    fn same_department_transfer_is_a_bad_request() {
        let err = ApplicationError::Domain(DomainError::TransferSameDepartment(Department::Road));
        assert_eq!(status_for(&err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_rows_map_to_not_found() {
        let err = ApplicationError::Db(DbError::ReportNotFound(Uuid::new_v4()));
        assert_eq!(status_for(&err), StatusCode::NOT_FOUND);
    }
}
