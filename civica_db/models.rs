use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Reports are stored as one row per aggregate: scalar columns for the
/// fields queries filter and sort on, jsonb for the embedded append-only
/// logs that are only ever read back whole.
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub reporter_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub severity: i16,
    pub media: serde_json::Value,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub votes: i32,
    pub voters: serde_json::Value,
    pub department: String,
    pub priority_score: i32,
    pub status: String,
    pub status_history: serde_json::Value,
    pub verification: serde_json::Value,
    pub sla_start: Option<DateTime<Utc>>,
    pub sla_days: Option<i32>,
    pub comments: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct TransferLog {
    pub id: Uuid,
    pub report_id: Uuid,
    pub requested_by: Uuid,
    pub from_department: String,
    pub to_department: String,
    pub reason: String,
    pub admin_verification: serde_json::Value,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub department: Option<String>,
    pub warnings: i32,
    pub blocked: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
