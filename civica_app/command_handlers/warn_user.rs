use std::sync::Arc;

use civica_types::common::Role;
use civica_types::{Result, errors::ApplicationError};

use crate::{
    command_handlers::helpers::{notify, require_active_role},
    config::Config,
    cqrs::{CommandHandler, commands::WarnUser},
    uow::UnitOfWork,
};

pub struct WarnUserCommandHandler {}

impl WarnUserCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<WarnUser> for WarnUserCommandHandler {
    async fn handle(
        &self,
        command: WarnUser,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let admin = uow.users().get_by_id(command.admin_id).await?;
        require_active_role(&admin, Role::Admin)?;

        let mut user = uow.users().get_by_id(command.user_id).await?;
        user.add_warning(config.warnings_block_threshold);
        uow.users().save(&user).await?;

        let message = if user.blocked {
            format!(
                "Your account has been blocked after {} warnings: {}",
                user.warnings, command.reason
            )
        } else {
            format!("You received a warning: {}", command.reason)
        };
        notify(uow, user.id, message).await;

        Ok(())
    }
}
