use uuid::Uuid;

use civica_domain::models::transfer::TransferLog;
use civica_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait TransferRepository: Send + Sync {
    async fn save(&self, transfer: &TransferLog) -> Result<(), ApplicationError>;

    async fn get_by_id(&self, transfer_id: Uuid) -> Result<TransferLog, ApplicationError>;

    async fn list_by_report_id(
        &self,
        report_id: Uuid,
    ) -> Result<Vec<TransferLog>, ApplicationError>;

    /// Transfers with a pending admin verification, oldest first.
    async fn list_pending(&self) -> Result<Vec<TransferLog>, ApplicationError>;

    async fn has_pending_for_report(&self, report_id: Uuid) -> Result<bool, ApplicationError>;
}
