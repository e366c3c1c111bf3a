use std::sync::Arc;

use chrono::Utc;
use civica_types::common::Role;
use civica_types::errors::DomainError;
use civica_types::{Result, errors::ApplicationError};

use crate::{
    command_handlers::helpers::notify,
    config::Config,
    cqrs::{CommandHandler, commands::UpdateReportStatus},
    uow::UnitOfWork,
};

pub struct UpdateReportStatusCommandHandler {}

impl UpdateReportStatusCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdateReportStatus> for UpdateReportStatusCommandHandler {
    async fn handle(
        &self,
        command: UpdateReportStatus,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let actor = uow.users().get_by_id(command.actor_id).await?;
        let mut report = uow.reports().get_by_id(command.report_id).await?;

        // Admins may act anywhere; officers only within their department.
        match actor.role {
            Role::Admin => {}
            Role::Officer => {
                if !actor.is_officer_of(report.department) {
                    return Err(DomainError::OfficerOutsideDepartment {
                        officer_id: actor.id,
                        department: report.department,
                    }
                    .into());
                }
            }
            Role::Citizen => {
                return Err(DomainError::RoleMismatch {
                    required: Role::Officer,
                }
                .into());
            }
        }

        report.transition_status(command.status, actor.id, command.note, Utc::now())?;
        uow.reports().save(&report).await?;

        notify(
            uow,
            report.reporter_id,
            format!(
                "Your report '{}' is now {}",
                report.title,
                command.status.as_str()
            ),
        )
        .await;

        Ok(())
    }
}
