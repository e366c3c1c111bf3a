use thiserror::Error;
use uuid::Uuid;

/// Errors for db stuff.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Report with ID {0} not found")]
    ReportNotFound(Uuid),

    #[error("Transfer log with ID {0} not found")]
    TransferNotFound(Uuid),

    #[error("User with ID {0} not found")]
    UserNotFound(Uuid),

    #[error("Notification with ID {0} not found")]
    NotificationNotFound(Uuid),

    #[error("Could not decode stored value: {0}")]
    Decode(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
