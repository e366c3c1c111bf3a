use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use civica_app::{command_handlers::WarnUserCommandHandler, cqrs::commands::WarnUser};

use crate::{error::WebError, extractors::Principal, http::AppState};

#[derive(Debug, Deserialize)]
pub struct WarnUserPayload {
    pub reason: String,
}

pub async fn warn_user(
    State(state): State<AppState>,
    principal: Principal,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<WarnUserPayload>,
) -> Result<StatusCode, WebError> {
    state
        .app_bus
        .execute(
            WarnUser {
                admin_id: principal.user_id,
                user_id,
                reason: payload.reason,
            },
            WarnUserCommandHandler::new(),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
