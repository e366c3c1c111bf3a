use civica_domain::models::report::Report;
use civica_types::{Result, errors::ApplicationError};

use crate::{
    cqrs::{QueryHandler, queries::ListReportsNearby},
    uow::UnitOfWork,
};

pub struct ListReportsNearbyHandler;

impl ListReportsNearbyHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl QueryHandler<ListReportsNearby> for ListReportsNearbyHandler {
    async fn handle(
        &self,
        query: ListReportsNearby,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &std::sync::Arc<crate::config::Config>,
    ) -> Result<Vec<Report>, ApplicationError> {
        uow.reports()
            .list_nearby(query.latitude, query.longitude, query.radius_meters)
            .await
    }
}
