use std::sync::Arc;

use civica_domain::models::transfer::TransferLog;
use civica_types::common::Role;
use civica_types::errors::DomainError;
use civica_types::{Result, errors::ApplicationError};

use crate::{
    command_handlers::helpers::{notify, notify_role, require_active_role},
    config::Config,
    cqrs::{CommandHandler, commands::RequestTransfer},
    uow::UnitOfWork,
};

pub struct RequestTransferCommandHandler {}

impl RequestTransferCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<RequestTransfer> for RequestTransferCommandHandler {
    async fn handle(
        &self,
        command: RequestTransfer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let officer = uow.users().get_by_id(command.officer_id).await?;
        require_active_role(&officer, Role::Officer)?;

        let report = uow.reports().get_by_id(command.report_id).await?;

        // Only the owning officer may ask for a re-route.
        if !officer.is_officer_of(report.department) {
            return Err(DomainError::OfficerOutsideDepartment {
                officer_id: officer.id,
                department: report.department,
            }
            .into());
        }
        if report.status.is_terminal() {
            return Err(DomainError::ReportClosed(report.id).into());
        }
        // Officers work the queue, which only holds approved reports.
        if report.is_pending_verification() {
            return Err(DomainError::ReportNotVerified(report.id).into());
        }
        if uow.transfers().has_pending_for_report(report.id).await? {
            return Err(DomainError::PendingTransferExists(report.id).into());
        }

        let transfer = TransferLog::new(
            report.id,
            officer.id,
            report.department,
            command.to_department,
            command.reason,
        )?;
        uow.transfers().save(&transfer).await?;

        notify_role(
            uow,
            Role::Admin,
            &format!(
                "Transfer requested for report '{}' ({} → {})",
                report.title,
                transfer.from_department.as_str(),
                transfer.to_department.as_str()
            ),
        )
        .await;
        notify(
            uow,
            officer.id,
            format!("Transfer request for '{}' submitted", report.title),
        )
        .await;

        Ok(())
    }
}
