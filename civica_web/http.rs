use axum::{
    Router,
    routing::{get, post},
};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

use civica_app::{app_bus::AppBus, config::Config};
use civica_types::{Result, errors::ApplicationError};

use crate::handlers::{
    comment_on_report, get_report, list_department_queue, list_notifications,
    list_pending_transfers, list_pending_verification, list_report_transfers,
    list_reports_nearby, mark_notification_read, reply_to_comment, request_transfer,
    submit_report, update_report_status, verify_report, verify_transfer, vote_report, warn_user,
};

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>, _config: &Config) -> AppState {
        AppState { app_bus }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/reports", post(submit_report))
            .route("/reports/nearby", get(list_reports_nearby))
            .route("/reports/queue", get(list_department_queue))
            .route(
                "/reports/pending-verification",
                get(list_pending_verification),
            )
            .route("/reports/{id}", get(get_report))
            .route("/reports/{id}/verify", post(verify_report))
            .route("/reports/{id}/vote", post(vote_report))
            .route("/reports/{id}/status", post(update_report_status))
            .route("/reports/{id}/comments", post(comment_on_report))
            .route(
                "/reports/{id}/comments/{comment_id}/reply",
                post(reply_to_comment),
            )
            .route(
                "/reports/{id}/transfers",
                get(list_report_transfers).post(request_transfer),
            )
            .route("/transfers/pending", get(list_pending_transfers))
            .route("/transfers/{id}/verify", post(verify_transfer))
            .route("/notifications", get(list_notifications))
            .route("/notifications/{id}/read", post(mark_notification_read))
            .route("/users/{id}/warn", post(warn_user))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let router = Self::router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            let err = format!("{:#?}", e);
            ApplicationError::Infrastructure(err)
        })?;

        tracing::info!(
            "HTTP Server started, listening on http://{}",
            addr.to_string()
        );
        axum::serve(listener, router).await.map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
