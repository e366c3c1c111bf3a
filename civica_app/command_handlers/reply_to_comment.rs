use std::sync::Arc;

use civica_types::common::Role;
use civica_types::{Result, errors::ApplicationError};

use crate::{
    command_handlers::helpers::{notify, require_active_role},
    config::Config,
    cqrs::{CommandHandler, commands::ReplyToComment},
    uow::UnitOfWork,
};

pub struct ReplyToCommentCommandHandler {}

impl ReplyToCommentCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<ReplyToComment> for ReplyToCommentCommandHandler {
    async fn handle(
        &self,
        command: ReplyToComment,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let officer = uow.users().get_by_id(command.officer_id).await?;
        require_active_role(&officer, Role::Officer)?;

        let mut report = uow.reports().get_by_id(command.report_id).await?;
        if !officer.is_officer_of(report.department) {
            return Err(civica_types::errors::DomainError::OfficerOutsideDepartment {
                officer_id: officer.id,
                department: report.department,
            }
            .into());
        }

        let author_id = report.reply_to_comment(command.comment_id, officer.id, command.body)?;
        uow.reports().save(&report).await?;

        notify(
            uow,
            author_id,
            format!("An officer replied to your comment on \"{}\"", report.title),
        )
        .await;

        Ok(())
    }
}
