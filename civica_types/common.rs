use serde::{Deserialize, Serialize};

/// Issue category chosen by the reporting citizen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Pothole,
    Garbage,
    Streetlight,
    WaterLeak,
    Sewage,
    Park,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pothole => "pothole",
            Category::Garbage => "garbage",
            Category::Streetlight => "streetlight",
            Category::WaterLeak => "water_leak",
            Category::Sewage => "sewage",
            Category::Park => "park",
            Category::Other => "other",
        }
    }

    /// Unknown strings fall back to `Other` so a stale client can never
    /// produce an unroutable report.
    pub fn parse(value: &str) -> Self {
        match value {
            "pothole" => Category::Pothole,
            "garbage" => Category::Garbage,
            "streetlight" => Category::Streetlight,
            "water_leak" => Category::WaterLeak,
            "sewage" => Category::Sewage,
            "park" => Category::Park,
            _ => Category::Other,
        }
    }
}

/// Organizational unit owning a class of reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Road,
    Sanitation,
    Electrical,
    Water,
    Parks,
    General,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Road => "road",
            Department::Sanitation => "sanitation",
            Department::Electrical => "electrical",
            Department::Water => "water",
            Department::Parks => "parks",
            Department::General => "general",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "road" => Department::Road,
            "sanitation" => Department::Sanitation,
            "electrical" => Department::Electrical,
            "water" => Department::Water,
            "parks" => Department::Parks,
            _ => Department::General,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Citizen,
    Officer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::Officer => "officer",
            Role::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "citizen" => Some(Role::Citizen),
            "officer" => Some(Role::Officer),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Lifecycle status of a report. `Rejected` is only reachable through the
/// verification gate, never through later officer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Open,
    Acknowledged,
    InProgress,
    Resolved,
    Rejected,
}

impl ReportStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReportStatus::Resolved | ReportStatus::Rejected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Open => "open",
            ReportStatus::Acknowledged => "acknowledged",
            ReportStatus::InProgress => "in_progress",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(ReportStatus::Open),
            "acknowledged" => Some(ReportStatus::Acknowledged),
            "in_progress" => Some(ReportStatus::InProgress),
            "resolved" => Some(ReportStatus::Resolved),
            "rejected" => Some(ReportStatus::Rejected),
            _ => None,
        }
    }
}

/// Deadline state of a report, always derived on read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaStatus {
    /// Verification has not approved the report yet; no clock is running.
    NotStarted,
    OnTime,
    Overdue,
    /// The report reached a terminal status; remaining time is frozen.
    Closed,
}

/// Tri-state outcome of an admin decision (report verification and
/// transfer verification share it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    Pending,
    Completed,
    Rejected,
}

impl TransferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "pending",
            TransferStatus::Completed => "completed",
            TransferStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(TransferStatus::Pending),
            "completed" => Some(TransferStatus::Completed),
            "rejected" => Some(TransferStatus::Rejected),
            _ => None,
        }
    }
}

/// Pointer to externally stored media. The core never touches the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub url: String,
    pub mime: String,
}
