use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use civica_app::repository::ReportRepository;
use civica_domain::models::report::{LocationKind, Report};
use civica_types::common::Department;
use civica_types::{
    Result,
    errors::{ApplicationError, DbError},
};

use crate::models as db_models;

#[derive(Clone)]
pub struct PostgresReportRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresReportRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

const SELECT_REPORT: &str = r#"
    SELECT id, reporter_id, title, description, category, severity, media,
           latitude, longitude, address, votes, voters, department,
           priority_score, status, status_history, verification,
           sla_start, sla_days, comments, created_at
    FROM reports
"#;

#[async_trait::async_trait]
impl<'a> ReportRepository for PostgresReportRepository<'a> {
    async fn save(&self, report: &Report) -> Result<(), ApplicationError> {
        let (latitude, longitude, address) = match &report.location {
            LocationKind::Geo {
                latitude,
                longitude,
                address,
            } => (Some(*latitude), Some(*longitude), address.clone()),
            LocationKind::Address { text } => (None, None, Some(text.clone())),
        };

        let mut tx_guard = self.tx.lock().await;
        sqlx::query(
            r#"
            INSERT INTO reports (
                id, reporter_id, title, description, category, severity, media,
                latitude, longitude, address, votes, voters, department,
                priority_score, status, status_history, verification,
                sla_start, sla_days, comments, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21)
            ON CONFLICT (id) DO UPDATE SET
                severity = EXCLUDED.severity,
                media = EXCLUDED.media,
                latitude = EXCLUDED.latitude,
                longitude = EXCLUDED.longitude,
                address = EXCLUDED.address,
                votes = EXCLUDED.votes,
                voters = EXCLUDED.voters,
                department = EXCLUDED.department,
                priority_score = EXCLUDED.priority_score,
                status = EXCLUDED.status,
                status_history = EXCLUDED.status_history,
                verification = EXCLUDED.verification,
                sla_start = EXCLUDED.sla_start,
                sla_days = EXCLUDED.sla_days,
                comments = EXCLUDED.comments
            "#,
        )
        .bind(report.id)
        .bind(report.reporter_id)
        .bind(&report.title)
        .bind(&report.description)
        .bind(report.category.as_str())
        .bind(report.severity as i16)
        .bind(serde_json::to_value(&report.media).map_err(DbError::Json)?)
        .bind(latitude)
        .bind(longitude)
        .bind(address)
        .bind(report.votes as i32)
        .bind(serde_json::to_value(&report.voters).map_err(DbError::Json)?)
        .bind(report.department.as_str())
        .bind(report.priority_score as i32)
        .bind(report.status.as_str())
        .bind(serde_json::to_value(&report.status_history).map_err(DbError::Json)?)
        .bind(serde_json::to_value(&report.verification).map_err(DbError::Json)?)
        .bind(report.sla_start)
        .bind(report.sla_days.map(|d| d as i32))
        .bind(serde_json::to_value(&report.comments).map_err(DbError::Json)?)
        .bind(report.created_at)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn get_by_id(&self, report_id: Uuid) -> Result<Report, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let row = sqlx::query_as::<_, db_models::Report>(&format!("{SELECT_REPORT} WHERE id = $1"))
            .bind(report_id)
            .fetch_optional(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
            .ok_or(ApplicationError::Db(DbError::ReportNotFound(report_id)))?;

        Ok(Report::try_from(row).map_err(ApplicationError::Db)?)
    }

    async fn list_pending_verification(&self) -> Result<Vec<Report>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::Report>(&format!(
            "{SELECT_REPORT} WHERE (verification->>'decided') IS NULL ORDER BY created_at DESC"
        ))
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        collect_reports(rows)
    }

    async fn list_department_queue(
        &self,
        department: Department,
    ) -> Result<Vec<Report>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::Report>(&format!(
            r#"{SELECT_REPORT}
            WHERE department = $1
              AND (verification->>'decided')::boolean = TRUE
              AND status NOT IN ('resolved', 'rejected')
            ORDER BY priority_score DESC, created_at ASC"#
        ))
        .bind(department.as_str())
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        collect_reports(rows)
    }

    async fn list_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_meters: f64,
    ) -> Result<Vec<Report>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        // Haversine over the stored coordinates; text-address reports have
        // no coordinates and never match.
        let rows = sqlx::query_as::<_, db_models::Report>(&format!(
            r#"{SELECT_REPORT}
            WHERE latitude IS NOT NULL
              AND longitude IS NOT NULL
              AND 2 * 6371000 * asin(sqrt(
                    power(sin(radians(latitude - $1) / 2), 2)
                    + cos(radians($1)) * cos(radians(latitude))
                      * power(sin(radians(longitude - $2) / 2), 2)
                  )) <= $3
            ORDER BY created_at DESC"#
        ))
        .bind(latitude)
        .bind(longitude)
        .bind(radius_meters)
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        collect_reports(rows)
    }
}

fn collect_reports(rows: Vec<db_models::Report>) -> Result<Vec<Report>, ApplicationError> {
    let mut reports = Vec::with_capacity(rows.len());
    for row in rows {
        reports.push(Report::try_from(row).map_err(ApplicationError::Db)?);
    }
    Ok(reports)
}
