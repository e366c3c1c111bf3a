use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use civica_app::{
    command_handlers::MarkNotificationReadCommandHandler,
    cqrs::{commands::MarkNotificationRead, queries::ListNotificationsForUser},
    queries_handlers::ListNotificationsForUserHandler,
};

use crate::{
    error::WebError, extractors::Principal, handlers::views::NotificationView, http::AppState,
};

pub async fn list_notifications(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<Json<Vec<NotificationView>>, WebError> {
    let notifications = state
        .app_bus
        .query(
            ListNotificationsForUser {
                user_id: principal.user_id,
            },
            ListNotificationsForUserHandler::new(),
        )
        .await?;

    Ok(Json(
        notifications.into_iter().map(NotificationView::from).collect(),
    ))
}

pub async fn mark_notification_read(
    State(state): State<AppState>,
    principal: Principal,
    Path(notification_id): Path<Uuid>,
) -> Result<StatusCode, WebError> {
    state
        .app_bus
        .execute(
            MarkNotificationRead {
                user_id: principal.user_id,
                notification_id,
            },
            MarkNotificationReadCommandHandler::new(),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
