use std::sync::Arc;

use civica_app::{
    app_bus::AppBus,
    command_handlers::{
        RequestTransferCommandHandler, SubmitReportCommandHandler, VerifyReportCommandHandler,
        VerifyTransferCommandHandler, VoteReportCommandHandler,
    },
    config::Config,
    cqrs::{
        commands::{
            RequestTransfer, SubmitReport, TransferDecision, VerificationDecision, VerifyReport,
            VerifyTransfer, VoteReport,
        },
        queries::{GetReportById, ListTransfersForReport},
    },
    queries_handlers::{GetReportByIdHandler, ListTransfersForReportHandler},
    test_utils::tests::{MockUnitOfWork, MockUnitOfWorkProvider},
    uow::UnitOfWork,
};
use civica_domain::test_utils::{UserFactoryOptions, user_factory};
use civica_types::{
    Result,
    common::{Category, Department, MediaRef, ReportStatus, Role, SlaStatus, TransferStatus},
};
use civica_domain::models::report::LocationKind;
use uuid::Uuid;

fn test_bus() -> (Arc<AppBus>, MockUnitOfWork, Arc<Config>) {
    let config = Arc::new(Config::from_env());
    let provider = MockUnitOfWorkProvider::new();
    let state = provider.uow();
    let bus = Arc::new(AppBus::new(config.clone(), Arc::new(provider)));
    (bus, state, config)
}

async fn seed_user(state: &MockUnitOfWork, role: Role, department: Option<Department>) -> Uuid {
    let user = user_factory(UserFactoryOptions {
        role: Some(role),
        department,
        ..Default::default()
    });
    state.users().save(&user).await.unwrap();
    user.id
}

fn geo_location() -> LocationKind {
    LocationKind::Geo {
        latitude: 45.07,
        longitude: 7.68,
        address: None,
    }
}

async fn submit_pothole(bus: &AppBus, citizen_id: Uuid) -> Result<Uuid> {
    let command = SubmitReport::new(
        citizen_id,
        "Pothole on Main St".to_string(),
        "Front wheel swallower".to_string(),
        Category::Pothole,
        geo_location(),
        vec![MediaRef {
            url: "https://cdn.example/pothole.jpg".to_string(),
            mime: "image/jpeg".to_string(),
        }],
    );
    let report_id = command.id;
    bus.execute(command, SubmitReportCommandHandler::new())
        .await?;
    Ok(report_id)
}

// Scenario A: a fresh pothole report routes to the road department with the
// default severity, then an approval at severity 5 starts a 4-day clock.
#[tokio::test]
async fn test_submit_and_approve_flow() -> Result<()> {
    let (bus, state, _config) = test_bus();
    let citizen = seed_user(&state, Role::Citizen, None).await;
    let admin = seed_user(&state, Role::Admin, None).await;

    let report_id = submit_pothole(&bus, citizen).await?;

    let report = bus
        .query(GetReportById { report_id }, GetReportByIdHandler::new())
        .await?;
    assert_eq!(report.department, Department::Road);
    assert_eq!(report.severity, 3);
    assert_eq!(report.priority_score, 30);
    assert_eq!(report.votes, 0);
    assert_eq!(report.status, ReportStatus::Open);
    assert_eq!(report.sla_status(chrono::Utc::now()), SlaStatus::NotStarted);

    bus.execute(
        VerifyReport {
            admin_id: admin,
            report_id,
            decision: VerificationDecision::Approve {
                severity: 5,
                note: None,
            },
        },
        VerifyReportCommandHandler::new(),
    )
    .await?;

    let report = bus
        .query(GetReportById { report_id }, GetReportByIdHandler::new())
        .await?;
    assert_eq!(report.severity, 5);
    assert_eq!(report.priority_score, 50);
    assert_eq!(report.status, ReportStatus::Acknowledged);
    assert_eq!(report.sla_days, Some(4));
    assert!(report.sla_start.is_some());
    assert_eq!(report.sla_status(chrono::Utc::now()), SlaStatus::OnTime);

    Ok(())
}

// Scenario B: a report already in the top tier keeps its 2-day deadline when
// more votes push the score further up.
#[tokio::test]
async fn test_votes_do_not_reshuffle_a_started_clock() -> Result<()> {
    let (bus, state, _config) = test_bus();
    let citizen = seed_user(&state, Role::Citizen, None).await;
    let admin = seed_user(&state, Role::Admin, None).await;

    let report_id = submit_pothole(&bus, citizen).await?;

    // Four early voters lift the score to 50 before verification.
    for _ in 0..4 {
        let voter = seed_user(&state, Role::Citizen, None).await;
        bus.execute(
            VoteReport {
                citizen_id: voter,
                report_id,
            },
            VoteReportCommandHandler::new(),
        )
        .await?;
    }

    bus.execute(
        VerifyReport {
            admin_id: admin,
            report_id,
            decision: VerificationDecision::Approve {
                severity: 5,
                note: None,
            },
        },
        VerifyReportCommandHandler::new(),
    )
    .await?;

    let report = bus
        .query(GetReportById { report_id }, GetReportByIdHandler::new())
        .await?;
    assert_eq!(report.priority_score, 70);
    assert_eq!(report.sla_days, Some(2));

    for _ in 0..2 {
        let voter = seed_user(&state, Role::Citizen, None).await;
        bus.execute(
            VoteReport {
                citizen_id: voter,
                report_id,
            },
            VoteReportCommandHandler::new(),
        )
        .await?;
    }

    let report = bus
        .query(GetReportById { report_id }, GetReportByIdHandler::new())
        .await?;
    assert_eq!(report.priority_score, 80);
    assert_eq!(report.sla_days, Some(2), "tier unchanged, clock untouched");

    Ok(())
}

// Scenario C: approving a road→sanitation transfer re-routes the report to
// the canonical sanitation category and restarts the SLA clock.
#[tokio::test]
async fn test_approved_transfer_reroutes_and_restarts_sla() -> Result<()> {
    let (bus, state, _config) = test_bus();
    let citizen = seed_user(&state, Role::Citizen, None).await;
    let admin = seed_user(&state, Role::Admin, None).await;
    let officer = seed_user(&state, Role::Officer, Some(Department::Road)).await;
    seed_user(&state, Role::Officer, Some(Department::Sanitation)).await;

    let report_id = submit_pothole(&bus, citizen).await?;
    bus.execute(
        VerifyReport {
            admin_id: admin,
            report_id,
            decision: VerificationDecision::Approve {
                severity: 3,
                note: None,
            },
        },
        VerifyReportCommandHandler::new(),
    )
    .await?;

    let before = bus
        .query(GetReportById { report_id }, GetReportByIdHandler::new())
        .await?;
    let sla_before = before.sla_start;

    bus.execute(
        RequestTransfer {
            officer_id: officer,
            report_id,
            to_department: Department::Sanitation,
            reason: "wrong category".to_string(),
        },
        RequestTransferCommandHandler::new(),
    )
    .await?;

    let transfers = bus
        .query(
            ListTransfersForReport { report_id },
            ListTransfersForReportHandler::new(),
        )
        .await?;
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].status, TransferStatus::Pending);

    bus.execute(
        VerifyTransfer {
            admin_id: admin,
            transfer_id: transfers[0].id,
            decision: TransferDecision::Approve { note: None },
        },
        VerifyTransferCommandHandler::new(),
    )
    .await?;

    let report = bus
        .query(GetReportById { report_id }, GetReportByIdHandler::new())
        .await?;
    assert_eq!(report.department, Department::Sanitation);
    assert_eq!(report.category, Category::Garbage);
    assert!(report.sla_start.is_some());
    assert!(report.sla_start >= sla_before, "clock restarted");

    let transfers = bus
        .query(
            ListTransfersForReport { report_id },
            ListTransfersForReportHandler::new(),
        )
        .await?;
    assert_eq!(transfers[0].status, TransferStatus::Completed);

    Ok(())
}

// Scenario D: a rejected transfer leaves the report untouched and tells the
// requesting officer why.
#[tokio::test]
async fn test_rejected_transfer_leaves_report_untouched() -> Result<()> {
    let (bus, state, _config) = test_bus();
    let citizen = seed_user(&state, Role::Citizen, None).await;
    let admin = seed_user(&state, Role::Admin, None).await;
    let officer = seed_user(&state, Role::Officer, Some(Department::Road)).await;

    let report_id = submit_pothole(&bus, citizen).await?;
    bus.execute(
        VerifyReport {
            admin_id: admin,
            report_id,
            decision: VerificationDecision::Approve {
                severity: 3,
                note: None,
            },
        },
        VerifyReportCommandHandler::new(),
    )
    .await?;

    bus.execute(
        RequestTransfer {
            officer_id: officer,
            report_id,
            to_department: Department::Sanitation,
            reason: "wrong category".to_string(),
        },
        RequestTransferCommandHandler::new(),
    )
    .await?;
    let transfers = bus
        .query(
            ListTransfersForReport { report_id },
            ListTransfersForReportHandler::new(),
        )
        .await?;

    bus.execute(
        VerifyTransfer {
            admin_id: admin,
            transfer_id: transfers[0].id,
            decision: TransferDecision::Reject {
                note: "insufficient evidence".to_string(),
            },
        },
        VerifyTransferCommandHandler::new(),
    )
    .await?;

    let report = bus
        .query(GetReportById { report_id }, GetReportByIdHandler::new())
        .await?;
    assert_eq!(report.department, Department::Road);
    assert_eq!(report.category, Category::Pothole);

    let transfers = bus
        .query(
            ListTransfersForReport { report_id },
            ListTransfersForReportHandler::new(),
        )
        .await?;
    assert_eq!(transfers[0].status, TransferStatus::Rejected);

    let officer_inbox = state.notification_log().sent_to(officer);
    assert!(
        officer_inbox
            .iter()
            .any(|n| n.message.contains("insufficient evidence")),
        "rejection reason must reach the requesting officer"
    );

    Ok(())
}
