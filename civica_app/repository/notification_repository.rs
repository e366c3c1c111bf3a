use uuid::Uuid;

use civica_domain::models::notification::Notification;
use civica_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn add(&self, notification: &Notification) -> Result<(), ApplicationError>;

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Notification>, ApplicationError>;

    async fn mark_as_read(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), ApplicationError>;
}
