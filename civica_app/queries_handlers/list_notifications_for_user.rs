use civica_domain::models::notification::Notification;
use civica_types::{Result, errors::ApplicationError};

use crate::{
    cqrs::{QueryHandler, queries::ListNotificationsForUser},
    uow::UnitOfWork,
};

pub struct ListNotificationsForUserHandler;

impl ListNotificationsForUserHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl QueryHandler<ListNotificationsForUser> for ListNotificationsForUserHandler {
    async fn handle(
        &self,
        query: ListNotificationsForUser,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &std::sync::Arc<crate::config::Config>,
    ) -> Result<Vec<Notification>, ApplicationError> {
        uow.notifications().list_for_user(query.user_id).await
    }
}
