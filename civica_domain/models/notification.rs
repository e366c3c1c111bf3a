use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message produced as a side effect of a state transition. Persistence is
/// best-effort and delivery belongs to an external collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(user_id: Uuid, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            message,
            read: false,
            created_at: Utc::now(),
        }
    }
}
