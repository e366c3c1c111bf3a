use civica_domain::models::report::Report;
use civica_types::common::Role;
use civica_types::{Result, errors::ApplicationError};

use crate::{
    command_handlers::helpers::require_active_role,
    cqrs::{QueryHandler, queries::ListPendingVerification},
    uow::UnitOfWork,
};

pub struct ListPendingVerificationHandler;

impl ListPendingVerificationHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl QueryHandler<ListPendingVerification> for ListPendingVerificationHandler {
    async fn handle(
        &self,
        query: ListPendingVerification,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &std::sync::Arc<crate::config::Config>,
    ) -> Result<Vec<Report>, ApplicationError> {
        let admin = uow.users().get_by_id(query.admin_id).await?;
        require_active_role(&admin, Role::Admin)?;

        uow.reports().list_pending_verification().await
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
    use crate::{config::Config, test_utils::tests::MockUnitOfWork};

    #[tokio::test]
    async fn test_only_undecided_reports_are_listed() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = ListPendingVerificationHandler::new();

        let admin = user_factory(UserFactoryOptions {
            role: Some(Role::Admin),
            ..Default::default()
        });
        mock_uow_impl.users().save(&admin).await.unwrap();

        let pending = report_factory(ReportFactoryOptions::default());
        let decided = report_factory(ReportFactoryOptions {
            verified: Some(true),
            ..Default::default()
        });
        mock_uow_impl.reports().save(&pending).await.unwrap();
        mock_uow_impl.reports().save(&decided).await.unwrap();

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        let listed = handler
            .handle(ListPendingVerification { admin_id: admin.id }, &mock_uow, &config)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, pending.id);
    }

    #[tokio::test]
    async fn test_citizen_is_refused() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = ListPendingVerificationHandler::new();

        let citizen = user_factory(UserFactoryOptions::default());
        mock_uow_impl.users().save(&citizen).await.unwrap();

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        let result = handler
            .handle(
                ListPendingVerification {
                    admin_id: citizen.id,
                },
                &mock_uow,
                &config,
            )
            .await;
        assert!(matches!(
            result.unwrap_err(),
            ApplicationError::Domain(DomainError::RoleMismatch { .. })
        ));
    }
}
