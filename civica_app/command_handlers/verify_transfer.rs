use std::sync::Arc;

use chrono::Utc;
use civica_types::common::Role;
use civica_types::{Result, errors::ApplicationError};

use crate::{
    command_handlers::helpers::{
        notify, notify_department_officers, notify_role, require_active_role,
    },
    config::Config,
    cqrs::{
        CommandHandler,
        commands::{TransferDecision, VerifyTransfer},
    },
    uow::UnitOfWork,
};

pub struct VerifyTransferCommandHandler {}

impl VerifyTransferCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<VerifyTransfer> for VerifyTransferCommandHandler {
    async fn handle(
        &self,
        command: VerifyTransfer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let admin = uow.users().get_by_id(command.admin_id).await?;
        require_active_role(&admin, Role::Admin)?;

        let mut transfer = uow.transfers().get_by_id(command.transfer_id).await?;
        let now = Utc::now();

        match command.decision {
            TransferDecision::Approve { note } => {
                transfer.approve(admin.id, note, now)?;

                // Completion only after the report mutation went through.
                let mut report = uow.reports().get_by_id(transfer.report_id).await?;
                report.apply_transfer(transfer.to_department, &config.router, now)?;
                uow.reports().save(&report).await?;

                transfer.complete();
                uow.transfers().save(&transfer).await?;

                notify(
                    uow,
                    transfer.requested_by,
                    format!("Transfer of '{}' was approved", report.title),
                )
                .await;
                notify_department_officers(
                    uow,
                    transfer.to_department,
                    &format!("Report transferred into your queue: {}", report.title),
                )
                .await;
                notify_role(
                    uow,
                    Role::Admin,
                    &format!(
                        "Report '{}' moved to the {} department",
                        report.title,
                        transfer.to_department.as_str()
                    ),
                )
                .await;
            }
            TransferDecision::Reject { note } => {
                transfer.reject(admin.id, note.clone(), now)?;
                uow.transfers().save(&transfer).await?;

                // The report is left entirely unchanged.
                notify(
                    uow,
                    transfer.requested_by,
                    format!("Transfer request was rejected: {note}"),
                )
                .await;
            }
        }

        Ok(())
    }
}
