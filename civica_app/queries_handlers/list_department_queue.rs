use std::collections::HashSet;

use civica_domain::models::report::Report;
use civica_types::common::Role;
use civica_types::{Result, errors::ApplicationError};

use crate::{
    command_handlers::helpers::require_active_role,
    cqrs::{QueryHandler, queries::ListDepartmentQueue},
    uow::UnitOfWork,
};

pub struct ListDepartmentQueueHandler;

impl ListDepartmentQueueHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl QueryHandler<ListDepartmentQueue> for ListDepartmentQueueHandler {
    async fn handle(
        &self,
        query: ListDepartmentQueue,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &std::sync::Arc<crate::config::Config>,
    ) -> Result<Vec<Report>, ApplicationError> {
        let officer = uow.users().get_by_id(query.officer_id).await?;
        require_active_role(&officer, Role::Officer)?;
        let department = officer.department.ok_or_else(|| {
            ApplicationError::Unknown(format!("officer {} has no department", officer.id))
        })?;

        let queue = uow.reports().list_department_queue(department).await?;

        // A report with an undecided transfer sits in limbo between two
        // departments and must not show up in either queue.
        let mut in_limbo = HashSet::new();
        for report in &queue {
            if uow.transfers().has_pending_for_report(report.id).await? {
                in_limbo.insert(report.id);
            }
        }

        Ok(queue
            .into_iter()
            .filter(|report| !in_limbo.contains(&report.id))
            .take(config.queue_limit as usize)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use civica_domain::models::transfer::TransferLog;
    use civica_domain::test_utils::{
        ReportFactoryOptions, UserFactoryOptions, report_factory, user_factory,
    };
    use civica_types::common::Department;
    use civica_types::errors::DomainError;

    use super::*;
    use crate::{config::Config, test_utils::tests::MockUnitOfWork};

    #[tokio::test]
    async fn test_queue_orders_by_priority_and_hides_pending_transfers() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = ListDepartmentQueueHandler::new();

        let officer = user_factory(UserFactoryOptions {
            role: Some(Role::Officer),
            department: Some(Department::Road),
            ..Default::default()
        });
        mock_uow_impl.users().save(&officer).await.unwrap();

        let mut low = report_factory(ReportFactoryOptions {
            verified: Some(true),
            ..Default::default()
        });
        low.severity = 2;
        low.priority_score = 20;
        let mut high = report_factory(ReportFactoryOptions {
            verified: Some(true),
            ..Default::default()
        });
        high.severity = 5;
        high.priority_score = 50;
        let mut limbo = report_factory(ReportFactoryOptions {
            verified: Some(true),
            ..Default::default()
        });
        limbo.priority_score = 90;

        mock_uow_impl.reports().save(&low).await.unwrap();
        mock_uow_impl.reports().save(&high).await.unwrap();
        mock_uow_impl.reports().save(&limbo).await.unwrap();

        let transfer = TransferLog::new(
            limbo.id,
            officer.id,
            Department::Road,
            Department::Water,
            "wrong crew".to_string(),
        )
        .unwrap();
        mock_uow_impl.transfers().save(&transfer).await.unwrap();

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        let queue = handler
            .handle(
                ListDepartmentQueue {
                    officer_id: officer.id,
                },
                &mock_uow,
                &config,
            )
            .await
            .unwrap();

        let ids: Vec<_> = queue.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![high.id, low.id]);
    }

    #[tokio::test]
    async fn test_unverified_reports_stay_out_of_the_queue() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = ListDepartmentQueueHandler::new();

        let officer = user_factory(UserFactoryOptions {
            role: Some(Role::Officer),
            department: Some(Department::Road),
            ..Default::default()
        });
        mock_uow_impl.users().save(&officer).await.unwrap();

        let unverified = report_factory(ReportFactoryOptions::default());
        mock_uow_impl.reports().save(&unverified).await.unwrap();

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        let queue = handler
            .handle(
                ListDepartmentQueue {
                    officer_id: officer.id,
                },
                &mock_uow,
                &config,
            )
            .await
            .unwrap();
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn test_citizen_is_refused() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = ListDepartmentQueueHandler::new();

        let citizen = user_factory(UserFactoryOptions::default());
        mock_uow_impl.users().save(&citizen).await.unwrap();

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        let result = handler
            .handle(
                ListDepartmentQueue {
                    officer_id: citizen.id,
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
