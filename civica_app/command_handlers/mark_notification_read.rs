use std::sync::Arc;

use civica_types::{Result, errors::ApplicationError};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::MarkNotificationRead},
    uow::UnitOfWork,
};

pub struct MarkNotificationReadCommandHandler {}

impl MarkNotificationReadCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<MarkNotificationRead> for MarkNotificationReadCommandHandler {
    async fn handle(
        &self,
        command: MarkNotificationRead,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        uow.notifications()
            .mark_as_read(command.notification_id, command.user_id)
            .await?;
        Ok(())
    }
}
