use std::sync::Arc;

use chrono::Utc;
use civica_types::common::Role;
use civica_types::{Result, errors::ApplicationError};

use crate::{
    command_handlers::helpers::{notify, notify_department_officers, require_active_role},
    config::Config,
    cqrs::{
        CommandHandler,
        commands::{VerificationDecision, VerifyReport},
    },
    uow::UnitOfWork,
};

pub struct VerifyReportCommandHandler {}

impl VerifyReportCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<VerifyReport> for VerifyReportCommandHandler {
    async fn handle(
        &self,
        command: VerifyReport,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let admin = uow.users().get_by_id(command.admin_id).await?;
        require_active_role(&admin, Role::Admin)?;

        let mut report = uow.reports().get_by_id(command.report_id).await?;
        let now = Utc::now();

        match command.decision {
            VerificationDecision::Approve { severity, note } => {
                report.approve_verification(admin.id, severity, note, now)?;
                uow.reports().save(&report).await?;

                notify(
                    uow,
                    report.reporter_id,
                    format!("Your report '{}' was approved and queued", report.title),
                )
                .await;
                notify_department_officers(
                    uow,
                    report.department,
                    &format!("New report in your queue: {}", report.title),
                )
                .await;
            }
            VerificationDecision::Reject { note } => {
                report.reject_verification(admin.id, note.clone(), now)?;
                uow.reports().save(&report).await?;

                notify(
                    uow,
                    report.reporter_id,
                    format!("Your report '{}' was rejected: {note}", report.title),
                )
                .await;
            }
        }

        Ok(())
    }
}
