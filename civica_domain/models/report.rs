use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use civica_types::common::{Category, Department, MediaRef, ReportStatus, SlaStatus};
use civica_types::errors::DomainError;

use crate::routing::DepartmentRouter;
use crate::sla;

/// Severity placeholder used between submission and verification approval.
pub const DEFAULT_SEVERITY: u8 = 3;

/// Where the issue is located. Geo reports carry coordinates (with an
/// optional reverse-geocoded display address); text-address reports carry
/// only free text. Both subtypes share the same lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LocationKind {
    Geo {
        latitude: f64,
        longitude: f64,
        address: Option<String>,
    },
    Address {
        text: String,
    },
}

/// One entry of the append-only lifecycle audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEntry {
    pub status: ReportStatus,
    pub actor_id: Uuid,
    pub note: Option<String>,
    pub at: DateTime<Utc>,
}

/// One admin decision recorded in the verification history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationEntry {
    pub admin_id: Uuid,
    pub approved: bool,
    pub note: Option<String>,
    pub at: DateTime<Utc>,
}

/// Admin admission gate state. `decided` is tri-state: `None` while the
/// report waits for verification, then fixed to approved/rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Verification {
    pub decided: Option<bool>,
    pub note: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
    pub history: Vec<VerificationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub author_id: Uuid,
    pub body: String,
    pub at: DateTime<Utc>,
}

/// Citizen question with at most one officer reply, independent of the
/// report lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub at: DateTime<Utc>,
    pub reply: Option<Reply>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub reporter_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub severity: u8,
    pub media: Vec<MediaRef>,
    pub location: LocationKind,
    pub votes: u32,
    pub voters: Vec<Uuid>,
    pub department: Department,
    pub priority_score: u32,
    pub status: ReportStatus,
    pub status_history: Vec<StatusEntry>,
    pub verification: Verification,
    pub sla_start: Option<DateTime<Utc>>,
    pub sla_days: Option<u32>,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Report {
    /// Creates a freshly submitted report: routed to its department,
    /// severity at the placeholder value, status `Open`, verification
    /// pending and no SLA clock running.
    pub fn new(
        id: Uuid,
        reporter_id: Uuid,
        title: String,
        description: String,
        category: Category,
        location: LocationKind,
        media: Vec<MediaRef>,
        router: &DepartmentRouter,
    ) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "title" });
        }
        if description.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "description" });
        }
        if let LocationKind::Address { text } = &location {
            if text.trim().is_empty() {
                return Err(DomainError::EmptyField { field: "address" });
            }
        }

        let now = Utc::now();
        let department = router.department_for(category);

        Ok(Self {
            id,
            reporter_id,
            title,
            description,
            category,
            severity: DEFAULT_SEVERITY,
            media,
            location,
            votes: 0,
            voters: Vec::new(),
            department,
            priority_score: sla::priority_score(DEFAULT_SEVERITY, 0),
            status: ReportStatus::Open,
            status_history: vec![StatusEntry {
                status: ReportStatus::Open,
                actor_id: reporter_id,
                note: None,
                at: now,
            }],
            verification: Verification::default(),
            sla_start: None,
            sla_days: None,
            comments: Vec::new(),
            created_at: now,
        })
    }

    pub fn is_pending_verification(&self) -> bool {
        self.verification.decided.is_none()
    }

    fn recompute_priority(&mut self) {
        self.priority_score = sla::priority_score(self.severity, self.votes);
    }

    /// Registers an upvote by a citizen. Exactly-once per citizen; the
    /// reporter is excluded from voting on their own report. The priority
    /// score is recomputed on success.
    pub fn register_vote(&mut self, voter_id: Uuid) -> Result<(), DomainError> {
        if voter_id == self.reporter_id {
            return Err(DomainError::SelfVote);
        }
        if self.voters.contains(&voter_id) {
            return Err(DomainError::DuplicateVote);
        }
        self.voters.push(voter_id);
        self.votes += 1;
        self.recompute_priority();
        Ok(())
    }

    /// Admin approval of a pending report: assigns severity, recomputes
    /// the priority score, moves the lifecycle to `Acknowledged` and starts
    /// the SLA clock from the resulting tier.
    pub fn approve_verification(
        &mut self,
        admin_id: Uuid,
        severity: u8,
        note: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if self.verification.decided.is_some() {
            return Err(DomainError::VerificationAlreadyDecided(self.id));
        }
        if !(1..=5).contains(&severity) {
            return Err(DomainError::SeverityOutOfRange(severity));
        }

        self.severity = severity;
        self.recompute_priority();

        self.verification.decided = Some(true);
        self.verification.note = note.clone();
        self.verification.verified_at = Some(now);
        self.verification.history.push(VerificationEntry {
            admin_id,
            approved: true,
            note: note.clone(),
            at: now,
        });

        self.status = ReportStatus::Acknowledged;
        self.status_history.push(StatusEntry {
            status: ReportStatus::Acknowledged,
            actor_id: admin_id,
            note,
            at: now,
        });

        self.sla_start = Some(now);
        self.sla_days = Some(sla::days_for_score(self.priority_score));

        Ok(())
    }

    /// Admin rejection of a pending report. Requires a non-empty note, sets
    /// the lifecycle to `Rejected` and never touches severity or the SLA.
    pub fn reject_verification(
        &mut self,
        admin_id: Uuid,
        note: String,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if self.verification.decided.is_some() {
            return Err(DomainError::VerificationAlreadyDecided(self.id));
        }
        if note.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "note" });
        }

        self.verification.decided = Some(false);
        self.verification.note = Some(note.clone());
        self.verification.verified_at = Some(now);
        self.verification.history.push(VerificationEntry {
            admin_id,
            approved: false,
            note: Some(note.clone()),
            at: now,
        });

        self.status = ReportStatus::Rejected;
        self.status_history.push(StatusEntry {
            status: ReportStatus::Rejected,
            actor_id: admin_id,
            note: Some(note),
            at: now,
        });

        Ok(())
    }

    /// Officer/admin lifecycle progression. Only the forward transitions
    /// are allowed; `Rejected` is reachable exclusively through
    /// verification.
    pub fn transition_status(
        &mut self,
        to: ReportStatus,
        actor_id: Uuid,
        note: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let allowed = matches!(
            (self.status, to),
            (ReportStatus::Acknowledged, ReportStatus::InProgress)
                | (ReportStatus::Acknowledged, ReportStatus::Resolved)
                | (ReportStatus::InProgress, ReportStatus::Resolved)
        );
        if !allowed {
            return Err(DomainError::InvalidStatusTransition {
                from: self.status,
                to,
            });
        }

        self.status = to;
        self.status_history.push(StatusEntry {
            status: to,
            actor_id,
            note,
            at: now,
        });

        Ok(())
    }

    pub fn sla_end(&self) -> Option<DateTime<Utc>> {
        match (self.sla_start, self.sla_days) {
            (Some(start), Some(days)) => Some(start + Duration::days(days as i64)),
            _ => None,
        }
    }

    /// Lazily evaluated deadline state. Terminal reports freeze: they are
    /// never `Overdue`, however much wall-clock time has passed.
    pub fn sla_status(&self, now: DateTime<Utc>) -> SlaStatus {
        if self.status.is_terminal() {
            return SlaStatus::Closed;
        }
        match self.sla_end() {
            None => SlaStatus::NotStarted,
            Some(end) if now >= end => SlaStatus::Overdue,
            Some(_) => SlaStatus::OnTime,
        }
    }

    /// Restarts the SLA window: the old deadline is discarded and a fresh
    /// one is derived from the current priority score.
    pub fn reset_sla(&mut self, now: DateTime<Utc>) {
        self.sla_start = Some(now);
        self.sla_days = Some(sla::days_for_score(self.priority_score));
    }

    /// Applies an approved transfer: re-routes the report to the new
    /// department, rewrites the category to that department's canonical one
    /// and restarts the SLA clock.
    pub fn apply_transfer(
        &mut self,
        to: Department,
        router: &DepartmentRouter,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::ReportClosed(self.id));
        }
        self.department = to;
        self.category = router.canonical_category(to);
        self.reset_sla(now);
        Ok(())
    }

    pub fn add_comment(&mut self, author_id: Uuid, body: String) -> Result<Uuid, DomainError> {
        if body.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "body" });
        }
        let id = Uuid::new_v4();
        self.comments.push(Comment {
            id,
            author_id,
            body,
            at: Utc::now(),
            reply: None,
        });
        Ok(id)
    }

    /// Attaches the single officer reply to a comment. Returns the comment
    /// author so the caller can notify them.
    pub fn reply_to_comment(
        &mut self,
        comment_id: Uuid,
        author_id: Uuid,
        body: String,
    ) -> Result<Uuid, DomainError> {
        if body.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "body" });
        }
        let comment = self
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or(DomainError::CommentNotFound(comment_id))?;
        if comment.reply.is_some() {
            return Err(DomainError::CommentAlreadyAnswered(comment_id));
        }
        comment.reply = Some(Reply {
            author_id,
            body,
            at: Utc::now(),
        });
        Ok(comment.author_id)
    }
}
