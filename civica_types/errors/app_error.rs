use thiserror::Error;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No handler registered for {0}")]
    NoHandler(String),

    #[error("Reverse geocoding failed: {0}")]
    Geocoding(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
