use civica_domain::models::transfer::TransferLog;
use civica_types::{Result, errors::ApplicationError};

use crate::{
    cqrs::{QueryHandler, queries::ListTransfersForReport},
    uow::UnitOfWork,
};

pub struct ListTransfersForReportHandler;

impl ListTransfersForReportHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl QueryHandler<ListTransfersForReport> for ListTransfersForReportHandler {
    async fn handle(
        &self,
        query: ListTransfersForReport,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &std::sync::Arc<crate::config::Config>,
    ) -> Result<Vec<TransferLog>, ApplicationError> {
        // The report must exist even when its trail is empty.
        let report = uow.reports().get_by_id(query.report_id).await?;
        uow.transfers().list_by_report_id(report.id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use civica_domain::test_utils::{ReportFactoryOptions, report_factory};
    use civica_types::common::Department;
    use uuid::Uuid;

    use super::*;
    use crate::{config::Config, test_utils::tests::MockUnitOfWork};

    #[tokio::test]
    async fn test_trail_lists_only_this_reports_transfers() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = ListTransfersForReportHandler::new();

        let report = report_factory(ReportFactoryOptions::default());
        let other = report_factory(ReportFactoryOptions::default());
        mock_uow_impl.reports().save(&report).await.unwrap();
        mock_uow_impl.reports().save(&other).await.unwrap();

        let mine = TransferLog::new(
            report.id,
            Uuid::new_v4(),
            Department::Road,
            Department::Water,
            "leak under the asphalt".to_string(),
        )
        .unwrap();
        let not_mine = TransferLog::new(
            other.id,
            Uuid::new_v4(),
            Department::Road,
            Department::Parks,
            "inside the park".to_string(),
        )
        .unwrap();
        mock_uow_impl.transfers().save(&mine).await.unwrap();
        mock_uow_impl.transfers().save(&not_mine).await.unwrap();

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        let trail = handler
            .handle(
                ListTransfersForReport {
                    report_id: report.id,
                },
                &mock_uow,
                &config,
            )
            .await
            .unwrap();
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].id, mine.id);
    }

    #[tokio::test]
    async fn test_unknown_report_is_not_found() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = ListTransfersForReportHandler::new();

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        let result = handler
            .handle(
                ListTransfersForReport {
                    report_id: Uuid::new_v4(),
                },
                &mock_uow,
                &config,
            )
            .await;
        assert!(result.is_err());
    }
}
