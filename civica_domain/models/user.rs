use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use civica_types::common::{Department, Role};

/// A platform account: citizen, department officer or administrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    /// Set for officers only.
    pub department: Option<Department>,
    pub warnings: u32,
    pub blocked: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, role: Role, department: Option<Department>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            role,
            department,
            warnings: 0,
            blocked: false,
            created_at: Utc::now(),
        }
    }

    /// Increments the warnings counter; the account is blocked once the
    /// threshold is reached.
    pub fn add_warning(&mut self, block_threshold: u32) {
        self.warnings += 1;
        if self.warnings >= block_threshold {
            self.blocked = true;
        }
    }

    pub fn is_officer_of(&self, department: Department) -> bool {
        self.role == Role::Officer && self.department == Some(department)
    }
}
