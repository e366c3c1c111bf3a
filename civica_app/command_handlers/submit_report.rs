use std::sync::Arc;

use civica_domain::models::report::{LocationKind, Report};
use civica_types::common::Role;
use civica_types::{Result, errors::ApplicationError};

use crate::{
    command_handlers::helpers::{notify_role, require_active_role},
    config::Config,
    cqrs::{CommandHandler, commands::SubmitReport},
    ports::{Geocoder, NoopGeocoder},
    uow::UnitOfWork,
};

pub struct SubmitReportCommandHandler {
    geocoder: Box<dyn Geocoder>,
}

impl SubmitReportCommandHandler {
    pub fn new() -> Self {
        Self {
            geocoder: Box::new(NoopGeocoder),
        }
    }

    pub fn with_geocoder(geocoder: Box<dyn Geocoder>) -> Self {
        Self { geocoder }
    }
}

#[async_trait::async_trait]
impl CommandHandler<SubmitReport> for SubmitReportCommandHandler {
    async fn handle(
        &self,
        command: SubmitReport,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let reporter = uow.users().get_by_id(command.reporter_id).await?;
        require_active_role(&reporter, Role::Citizen)?;

        let mut report = Report::new(
            command.id,
            reporter.id,
            command.title,
            command.description,
            command.category,
            command.location,
            command.media,
            &config.router,
        )?;

        // Reverse geocoding is strictly best-effort: a failing or slow
        // geocoder must never block a submission.
        if let LocationKind::Geo {
            latitude,
            longitude,
            address: address @ None,
        } = &mut report.location
        {
            match self.geocoder.reverse_geocode(*latitude, *longitude).await {
                Ok(resolved) => *address = resolved,
                Err(e) => tracing::warn!(report_id = %report.id, "reverse geocoding failed: {e}"),
            }
        }

        uow.reports().save(&report).await?;

        notify_role(
            uow,
            Role::Admin,
            &format!("New report awaiting verification: {}", report.title),
        )
        .await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use uuid::Uuid;

    use async_trait::async_trait;
    use civica_domain::test_utils::{UserFactoryOptions, user_factory};
    use civica_types::common::{Category, Department, ReportStatus, Role};
    use civica_types::errors::{AppError, DomainError};

    use super::*;
    use crate::test_utils::tests::MockUnitOfWork;

    fn submit_command(reporter_id: Uuid) -> SubmitReport {
        SubmitReport::new(
            reporter_id,
            "Pothole on Main St".to_string(),
            "Deep hole, dangerous for bikes".to_string(),
            Category::Pothole,
            LocationKind::Geo {
                latitude: 45.07,
                longitude: 7.68,
                address: None,
            },
            vec![],
        )
    }

    #[tokio::test]
    async fn test_submit_report_success() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = SubmitReportCommandHandler::new();

        let citizen = user_factory(UserFactoryOptions::default());
        let admin = user_factory(UserFactoryOptions {
            role: Some(Role::Admin),
            ..Default::default()
        });
        mock_uow_impl.users().save(&citizen).await.unwrap();
        mock_uow_impl.users().save(&admin).await.unwrap();

        let command = submit_command(citizen.id);
        let report_id = command.id;

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        handler.handle(command, &mock_uow, &config).await.unwrap();

        let report = mock_uow_impl.reports().get_by_id(report_id).await.unwrap();
        assert_eq!(report.department, Department::Road);
        assert_eq!(report.status, ReportStatus::Open);
        assert_eq!(report.priority_score, 30);
        assert!(report.is_pending_verification());
        assert!(report.sla_start.is_none());

        // Admins are told a report awaits verification.
        let admin_inbox = mock_uow_impl.notification_log().sent_to(admin.id);
        assert_eq!(admin_inbox.len(), 1);
        assert!(admin_inbox[0].message.contains("Pothole on Main St"));
    }

    #[tokio::test]
    async fn test_submit_report_blocked_citizen_is_refused() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = SubmitReportCommandHandler::new();

        let mut citizen = user_factory(UserFactoryOptions::default());
        citizen.blocked = true;
        mock_uow_impl.users().save(&citizen).await.unwrap();

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        let result = handler
            .handle(submit_command(citizen.id), &mock_uow, &config)
            .await;

        match result.unwrap_err() {
            ApplicationError::Domain(DomainError::BlockedUser(id)) => assert_eq!(id, citizen.id),
            e => panic!("Expected BlockedUser error, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_submit_report_requires_citizen_role() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = SubmitReportCommandHandler::new();

        let officer = user_factory(UserFactoryOptions {
            role: Some(Role::Officer),
            department: Some(Department::Road),
            ..Default::default()
        });
        mock_uow_impl.users().save(&officer).await.unwrap();

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        let result = handler
            .handle(submit_command(officer.id), &mock_uow, &config)
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ApplicationError::Domain(DomainError::RoleMismatch {
                required: Role::Citizen
            })
        ));
    }

    struct FailingGeocoder;

    #[async_trait]
    impl Geocoder for FailingGeocoder {
        async fn reverse_geocode(
            &self,
            _latitude: f64,
            _longitude: f64,
        ) -> Result<Option<String>, AppError> {
            Err(AppError::Geocoding("upstream timeout".to_string()))
        }
    }

    struct FixedGeocoder;

    #[async_trait]
    impl Geocoder for FixedGeocoder {
        async fn reverse_geocode(
            &self,
            _latitude: f64,
            _longitude: f64,
        ) -> Result<Option<String>, AppError> {
            Ok(Some("Main St 42".to_string()))
        }
    }

    #[tokio::test]
    async fn test_submit_report_geocoder_failure_is_swallowed() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = SubmitReportCommandHandler::with_geocoder(Box::new(FailingGeocoder));

        let citizen = user_factory(UserFactoryOptions::default());
        mock_uow_impl.users().save(&citizen).await.unwrap();

        let command = submit_command(citizen.id);
        let report_id = command.id;

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        handler.handle(command, &mock_uow, &config).await.unwrap();

        let report = mock_uow_impl.reports().get_by_id(report_id).await.unwrap();
        match report.location {
            LocationKind::Geo { address, .. } => assert!(address.is_none()),
            _ => panic!("expected a geo report"),
        }
    }

    #[tokio::test]
    async fn test_submit_report_geocoder_fills_address() {
        let config = Arc::new(Config::from_env());
        let mock_uow_impl = MockUnitOfWork::new();
        let handler = SubmitReportCommandHandler::with_geocoder(Box::new(FixedGeocoder));

        let citizen = user_factory(UserFactoryOptions::default());
        mock_uow_impl.users().save(&citizen).await.unwrap();

        let command = submit_command(citizen.id);
        let report_id = command.id;

        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow_impl.clone());
        handler.handle(command, &mock_uow, &config).await.unwrap();

        let report = mock_uow_impl.reports().get_by_id(report_id).await.unwrap();
        match report.location {
            LocationKind::Geo { address, .. } => {
                assert_eq!(address.as_deref(), Some("Main St 42"))
            }
            _ => panic!("expected a geo report"),
        }
    }
}
