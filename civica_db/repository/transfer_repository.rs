use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use civica_app::repository::TransferRepository;
use civica_domain::models::transfer::TransferLog;
use civica_types::{
    Result,
    errors::{ApplicationError, DbError},
};

use crate::models as db_models;

#[derive(Clone)]
pub struct PostgresTransferRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresTransferRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

const SELECT_TRANSFER: &str = r#"
    SELECT id, report_id, requested_by, from_department, to_department,
           reason, admin_verification, status, created_at
    FROM transfer_logs
"#;

#[async_trait::async_trait]
impl<'a> TransferRepository for PostgresTransferRepository<'a> {
    async fn save(&self, transfer: &TransferLog) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        sqlx::query(
            r#"
            INSERT INTO transfer_logs (
                id, report_id, requested_by, from_department, to_department,
                reason, admin_verification, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                admin_verification = EXCLUDED.admin_verification,
                status = EXCLUDED.status
            "#,
        )
        .bind(transfer.id)
        .bind(transfer.report_id)
        .bind(transfer.requested_by)
        .bind(transfer.from_department.as_str())
        .bind(transfer.to_department.as_str())
        .bind(&transfer.reason)
        .bind(serde_json::to_value(&transfer.admin_verification).map_err(DbError::Json)?)
        .bind(transfer.status.as_str())
        .bind(transfer.created_at)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn get_by_id(&self, transfer_id: Uuid) -> Result<TransferLog, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let row =
            sqlx::query_as::<_, db_models::TransferLog>(&format!("{SELECT_TRANSFER} WHERE id = $1"))
                .bind(transfer_id)
                .fetch_optional(&mut *tx_guard.as_mut())
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
                .ok_or(ApplicationError::Db(DbError::TransferNotFound(transfer_id)))?;

        Ok(TransferLog::try_from(row).map_err(ApplicationError::Db)?)
    }

    async fn list_by_report_id(
        &self,
        report_id: Uuid,
    ) -> Result<Vec<TransferLog>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::TransferLog>(&format!(
            "{SELECT_TRANSFER} WHERE report_id = $1 ORDER BY created_at ASC"
        ))
        .bind(report_id)
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        collect_transfers(rows)
    }

    async fn list_pending(&self) -> Result<Vec<TransferLog>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::TransferLog>(&format!(
            "{SELECT_TRANSFER} WHERE status = 'pending' ORDER BY created_at ASC"
        ))
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        collect_transfers(rows)
    }

    async fn has_pending_for_report(&self, report_id: Uuid) -> Result<bool, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM transfer_logs WHERE report_id = $1 AND status = 'pending')",
        )
        .bind(report_id)
        .fetch_one(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(exists)
    }
}

fn collect_transfers(rows: Vec<db_models::TransferLog>) -> Result<Vec<TransferLog>, ApplicationError> {
    let mut transfers = Vec::with_capacity(rows.len());
    for row in rows {
        transfers.push(TransferLog::try_from(row).map_err(ApplicationError::Db)?);
    }
    Ok(transfers)
}
