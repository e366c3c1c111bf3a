#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };
    use uuid::Uuid;

    use civica_domain::models::{
        notification::Notification,
        report::{LocationKind, Report},
        transfer::TransferLog,
        user::User,
    };
    use civica_types::common::{Department, Role};
    use civica_types::errors::{ApplicationError, DbError};

    use crate::{
        repository::{
            NotificationRepository, ReportRepository, TransferRepository, UserRepository,
        },
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    #[derive(Default, Clone)]
    pub struct MockReportRepository {
        reports: Arc<Mutex<HashMap<Uuid, Report>>>,
    }

    #[async_trait]
    impl ReportRepository for MockReportRepository {
        async fn save(&self, report: &Report) -> Result<(), ApplicationError> {
            self.reports
                .lock()
                .unwrap()
                .insert(report.id, report.clone());
            Ok(())
        }

        async fn get_by_id(&self, report_id: Uuid) -> Result<Report, ApplicationError> {
            let reports = self.reports.lock().unwrap();
            Ok(reports
                .get(&report_id)
                .cloned()
                .ok_or(ApplicationError::Db(DbError::ReportNotFound(report_id)))?)
        }

        async fn list_pending_verification(&self) -> Result<Vec<Report>, ApplicationError> {
            let mut pending: Vec<Report> = self
                .reports
                .lock()
                .unwrap()
                .values()
                .filter(|r| r.is_pending_verification())
                .cloned()
                .collect();
            pending.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(pending)
        }

        async fn list_department_queue(
            &self,
            department: Department,
        ) -> Result<Vec<Report>, ApplicationError> {
            let mut queue: Vec<Report> = self
                .reports
                .lock()
                .unwrap()
                .values()
                .filter(|r| {
                    r.department == department
                        && r.verification.decided == Some(true)
                        && !r.status.is_terminal()
                })
                .cloned()
                .collect();
            queue.sort_by(|a, b| {
                b.priority_score
                    .cmp(&a.priority_score)
                    .then(a.created_at.cmp(&b.created_at))
            });
            Ok(queue)
        }

        async fn list_nearby(
            &self,
            latitude: f64,
            longitude: f64,
            radius_meters: f64,
        ) -> Result<Vec<Report>, ApplicationError> {
            let reports = self.reports.lock().unwrap();
            Ok(reports
                .values()
                .filter(|r| match &r.location {
                    LocationKind::Geo {
                        latitude: lat,
                        longitude: lng,
                        ..
                    } => haversine_meters(latitude, longitude, *lat, *lng) <= radius_meters,
                    LocationKind::Address { .. } => false,
                })
                .cloned()
                .collect())
        }
    }

    fn haversine_meters(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
        const EARTH_RADIUS_M: f64 = 6_371_000.0;
        let d_lat = (lat2 - lat1).to_radians();
        let d_lng = (lng2 - lng1).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * a.sqrt().asin()
    }

    #[derive(Default, Clone)]
    pub struct MockTransferRepository {
        transfers: Arc<Mutex<HashMap<Uuid, TransferLog>>>,
    }

    #[async_trait]
    impl TransferRepository for MockTransferRepository {
        async fn save(&self, transfer: &TransferLog) -> Result<(), ApplicationError> {
            self.transfers
                .lock()
                .unwrap()
                .insert(transfer.id, transfer.clone());
            Ok(())
        }

        async fn get_by_id(&self, transfer_id: Uuid) -> Result<TransferLog, ApplicationError> {
            let transfers = self.transfers.lock().unwrap();
            Ok(transfers
                .get(&transfer_id)
                .cloned()
                .ok_or(ApplicationError::Db(DbError::TransferNotFound(transfer_id)))?)
        }

        async fn list_by_report_id(
            &self,
            report_id: Uuid,
        ) -> Result<Vec<TransferLog>, ApplicationError> {
            let mut logs: Vec<TransferLog> = self
                .transfers
                .lock()
                .unwrap()
                .values()
                .filter(|t| t.report_id == report_id)
                .cloned()
                .collect();
            logs.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            Ok(logs)
        }

        async fn list_pending(&self) -> Result<Vec<TransferLog>, ApplicationError> {
            let mut logs: Vec<TransferLog> = self
                .transfers
                .lock()
                .unwrap()
                .values()
                .filter(|t| t.is_pending())
                .cloned()
                .collect();
            logs.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            Ok(logs)
        }

        async fn has_pending_for_report(
            &self,
            report_id: Uuid,
        ) -> Result<bool, ApplicationError> {
            Ok(self
                .transfers
                .lock()
                .unwrap()
                .values()
                .any(|t| t.report_id == report_id && t.is_pending()))
        }
    }

    #[derive(Default, Clone)]
    pub struct MockUserRepository {
        users: Arc<Mutex<HashMap<Uuid, User>>>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn save(&self, user: &User) -> Result<(), ApplicationError> {
            self.users.lock().unwrap().insert(user.id, user.clone());
            Ok(())
        }

        async fn get_by_id(&self, user_id: Uuid) -> Result<User, ApplicationError> {
            if let Some(user) = self.users.lock().unwrap().get(&user_id) {
                Ok(user.clone())
            } else {
                Err(ApplicationError::Db(DbError::UserNotFound(user_id)))
            }
        }

        async fn list_by_role(&self, role: Role) -> Result<Vec<User>, ApplicationError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .filter(|u| u.role == role)
                .cloned()
                .collect())
        }

        async fn list_officers_of(
            &self,
            department: Department,
        ) -> Result<Vec<User>, ApplicationError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .filter(|u| u.is_officer_of(department))
                .cloned()
                .collect())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockNotificationRepository {
        notifications: Arc<Mutex<Vec<Notification>>>,
    }

    impl MockNotificationRepository {
        /// Test inspection helper.
        pub fn sent_to(&self, user_id: Uuid) -> Vec<Notification> {
            self.notifications
                .lock()
                .unwrap()
                .iter()
                .filter(|n| n.user_id == user_id)
                .cloned()
                .collect()
        }
    }

    #[async_trait]
    impl NotificationRepository for MockNotificationRepository {
        async fn add(&self, notification: &Notification) -> Result<(), ApplicationError> {
            self.notifications
                .lock()
                .unwrap()
                .push(notification.clone());
            Ok(())
        }

        async fn list_for_user(
            &self,
            user_id: Uuid,
        ) -> Result<Vec<Notification>, ApplicationError> {
            Ok(self.sent_to(user_id))
        }

        async fn mark_as_read(
            &self,
            notification_id: Uuid,
            user_id: Uuid,
        ) -> Result<(), ApplicationError> {
            let mut notifications = self.notifications.lock().unwrap();
            let notification = notifications
                .iter_mut()
                .find(|n| n.id == notification_id && n.user_id == user_id)
                .ok_or(ApplicationError::Db(DbError::NotificationNotFound(
                    notification_id,
                )))?;
            notification.read = true;
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockUnitOfWork {
        reports: Arc<MockReportRepository>,
        transfers: Arc<MockTransferRepository>,
        users: Arc<MockUserRepository>,
        notifications: Arc<MockNotificationRepository>,

        // Flags to check if commit/rollback was called
        committed: Arc<Mutex<bool>>,
        rolled_back: Arc<Mutex<bool>>,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Default::default()
        }

        /// Concrete notification repo, for asserting on emitted messages.
        pub fn notification_log(&self) -> Arc<MockNotificationRepository> {
            self.notifications.clone()
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn reports(&self) -> Arc<dyn ReportRepository + 'a> {
            self.reports.clone()
        }

        fn transfers(&self) -> Arc<dyn TransferRepository + 'a> {
            self.transfers.clone()
        }

        fn users(&self) -> Arc<dyn UserRepository + 'a> {
            self.users.clone()
        }

        fn notifications(&self) -> Arc<dyn NotificationRepository + 'a> {
            self.notifications.clone()
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            *self.committed.lock().unwrap() = true;
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            *self.rolled_back.lock().unwrap() = true;
            Ok(())
        }
    }

    /// Provider that hands the same shared in-memory state to every
    /// transaction, so multi-command flows can be exercised end to end.
    #[derive(Default, Clone)]
    pub struct MockUnitOfWorkProvider {
        uow: MockUnitOfWork,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn uow(&self) -> MockUnitOfWork {
            self.uow.clone()
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(self.uow.clone());
            Ok(uow)
        }
    }
}
