use std::sync::Arc;

use civica_types::common::Role;
use civica_types::{Result, errors::ApplicationError};

use crate::{
    command_handlers::helpers::require_active_role,
    config::Config,
    cqrs::{CommandHandler, commands::CommentOnReport},
    uow::UnitOfWork,
};

pub struct CommentOnReportCommandHandler {}

impl CommentOnReportCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CommentOnReport> for CommentOnReportCommandHandler {
    async fn handle(
        &self,
        command: CommentOnReport,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let citizen = uow.users().get_by_id(command.citizen_id).await?;
        require_active_role(&citizen, Role::Citizen)?;

        let mut report = uow.reports().get_by_id(command.report_id).await?;
        report.add_comment(citizen.id, command.body)?;
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
    async fn test_comment_is_appended() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = CommentOnReportCommandHandler::new();

        let citizen = user_factory(UserFactoryOptions::default());
        let report = report_factory(ReportFactoryOptions::default());
        mock_uow_impl.users().save(&citizen).await.unwrap();
        mock_uow_impl.reports().save(&report).await.unwrap();

        let command = CommentOnReport {
            citizen_id: citizen.id,
            report_id: report.id,
            body: "Any update on this?".to_string(),
        };

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        handler.handle(command, &mock_uow, &config).await.unwrap();

        let stored = mock_uow_impl.reports().get_by_id(report.id).await.unwrap();
        assert_eq!(stored.comments.len(), 1);
        assert_eq!(stored.comments[0].author_id, citizen.id);
        assert!(stored.comments[0].reply.is_none());
    }

    #[tokio::test]
    async fn test_empty_comment_is_rejected() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = CommentOnReportCommandHandler::new();

        let citizen = user_factory(UserFactoryOptions::default());
        let report = report_factory(ReportFactoryOptions::default());
        mock_uow_impl.users().save(&citizen).await.unwrap();
        mock_uow_impl.reports().save(&report).await.unwrap();

        let command = CommentOnReport {
            citizen_id: citizen.id,
            report_id: report.id,
            body: "  ".to_string(),
        };

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        let result = handler.handle(command, &mock_uow, &config).await;
        assert!(matches!(
            result.unwrap_err(),
            ApplicationError::Domain(DomainError::EmptyField { field: "body" })
        ));
    }
}
