use civica_domain::models::transfer::TransferLog;
use civica_types::common::Role;
use civica_types::{Result, errors::ApplicationError};

use crate::{
    command_handlers::helpers::require_active_role,
    cqrs::{QueryHandler, queries::ListPendingTransfers},
    uow::UnitOfWork,
};

pub struct ListPendingTransfersHandler;

impl ListPendingTransfersHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl QueryHandler<ListPendingTransfers> for ListPendingTransfersHandler {
    async fn handle(
        &self,
        query: ListPendingTransfers,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &std::sync::Arc<crate::config::Config>,
    ) -> Result<Vec<TransferLog>, ApplicationError> {
        let admin = uow.users().get_by_id(query.admin_id).await?;
        require_active_role(&admin, Role::Admin)?;

        uow.transfers().list_pending().await
    }
}
