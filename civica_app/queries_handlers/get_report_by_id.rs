use civica_domain::models::report::Report;
use civica_types::{Result, errors::ApplicationError};

use crate::{
    cqrs::{QueryHandler, queries::GetReportById},
    uow::UnitOfWork,
};

pub struct GetReportByIdHandler;

impl GetReportByIdHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl QueryHandler<GetReportById> for GetReportByIdHandler {
    async fn handle(
        &self,
        query: GetReportById,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &std::sync::Arc<crate::config::Config>,
    ) -> Result<Report, ApplicationError> {
        uow.reports().get_by_id(query.report_id).await
    }
}
