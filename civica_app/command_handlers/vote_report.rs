use std::sync::Arc;

use civica_types::common::Role;
use civica_types::{Result, errors::ApplicationError};

use crate::{
    command_handlers::helpers::require_active_role,
    config::Config,
    cqrs::{CommandHandler, commands::VoteReport},
    uow::UnitOfWork,
};

pub struct VoteReportCommandHandler {}

impl VoteReportCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<VoteReport> for VoteReportCommandHandler {
    async fn handle(
        &self,
        command: VoteReport,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let citizen = uow.users().get_by_id(command.citizen_id).await?;
        require_active_role(&citizen, Role::Citizen)?;

        let mut report = uow.reports().get_by_id(command.report_id).await?;
        report.register_vote(citizen.id)?;
        uow.reports().save(&report).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use civica_domain::test_utils::{
        ReportFactoryOptions, UserFactoryOptions, report_factory, user_factory,
    };
    use civica_types::errors::DomainError;

    use super::*;
    use crate::test_utils::tests::MockUnitOfWork;

    #[tokio::test]
    async fn test_vote_bumps_priority() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = VoteReportCommandHandler::new();

        let citizen = user_factory(UserFactoryOptions::default());
        let report = report_factory(ReportFactoryOptions::default());
        mock_uow_impl.users().save(&citizen).await.unwrap();
        mock_uow_impl.reports().save(&report).await.unwrap();

        let command = VoteReport {
            citizen_id: citizen.id,
            report_id: report.id,
        };

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        handler.handle(command, &mock_uow, &config).await.unwrap();

        let stored = mock_uow_impl.reports().get_by_id(report.id).await.unwrap();
        assert_eq!(stored.votes, 1);
        assert_eq!(stored.voters, vec![citizen.id]);
        assert_eq!(stored.priority_score, 35);
    }

    #[tokio::test]
    async fn test_duplicate_vote_is_rejected() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = VoteReportCommandHandler::new();

        let citizen = user_factory(UserFactoryOptions::default());
        let report = report_factory(ReportFactoryOptions::default());
        mock_uow_impl.users().save(&citizen).await.unwrap();
        mock_uow_impl.reports().save(&report).await.unwrap();

        let command = VoteReport {
            citizen_id: citizen.id,
            report_id: report.id,
        };

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        handler
            .handle(command.clone(), &mock_uow, &config)
            .await
            .unwrap();
        let result = handler.handle(command, &mock_uow, &config).await;

        assert!(matches!(
            result.unwrap_err(),
            ApplicationError::Domain(DomainError::DuplicateVote)
        ));

        let stored = mock_uow_impl.reports().get_by_id(report.id).await.unwrap();
        assert_eq!(stored.votes, 1);
    }

    #[tokio::test]
    async fn test_reporter_cannot_vote_on_own_report() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = VoteReportCommandHandler::new();

        let citizen = user_factory(UserFactoryOptions::default());
        let report = report_factory(ReportFactoryOptions {
            reporter_id: Some(citizen.id),
            ..Default::default()
        });
        mock_uow_impl.users().save(&citizen).await.unwrap();
        mock_uow_impl.reports().save(&report).await.unwrap();

        let command = VoteReport {
            citizen_id: citizen.id,
            report_id: report.id,
        };

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        let result = handler.handle(command, &mock_uow, &config).await;

        assert!(matches!(
            result.unwrap_err(),
            ApplicationError::Domain(DomainError::SelfVote)
        ));
    }
}
