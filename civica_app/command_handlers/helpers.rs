use uuid::Uuid;

use civica_domain::models::{notification::Notification, user::User};
use civica_types::common::{Department, Role};
use civica_types::errors::DomainError;

use crate::uow::UnitOfWork;

/// Checks that a user carries the required role and is not blocked.
pub fn require_active_role(user: &User, required: Role) -> Result<(), DomainError> {
    if user.role != required {
        return Err(DomainError::RoleMismatch { required });
    }
    if user.blocked {
        return Err(DomainError::BlockedUser(user.id));
    }
    Ok(())
}

/// Persists a notification for one user. Notifications are best-effort:
/// a storage failure is logged and swallowed, never escalated to the
/// primary operation.
pub async fn notify(uow: &Box<dyn UnitOfWork<'_> + '_>, user_id: Uuid, message: String) {
    let notification = Notification::new(user_id, message);
    if let Err(e) = uow.notifications().add(&notification).await {
        tracing::warn!(user_id = %user_id, "failed to persist notification: {e}");
    }
}

/// Fans a notification out to every user with the given role.
pub async fn notify_role(uow: &Box<dyn UnitOfWork<'_> + '_>, role: Role, message: &str) {
    match uow.users().list_by_role(role).await {
        Ok(users) => {
            for user in users {
                notify(uow, user.id, message.to_string()).await;
            }
        }
        Err(e) => tracing::warn!(role = role.as_str(), "notification fan-out failed: {e}"),
    }
}

/// Fans a notification out to every officer of a department.
pub async fn notify_department_officers(
    uow: &Box<dyn UnitOfWork<'_> + '_>,
    department: Department,
    message: &str,
) {
    match uow.users().list_officers_of(department).await {
        Ok(officers) => {
            for officer in officers {
                notify(uow, officer.id, message.to_string()).await;
            }
        }
        Err(e) => tracing::warn!(
            department = department.as_str(),
            "notification fan-out failed: {e}"
        ),
    }
}
