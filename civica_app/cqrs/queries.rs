use uuid::Uuid;

use civica_domain::models::{notification::Notification, report::Report, transfer::TransferLog};

use crate::cqrs::Query;

/// Fetch a single report by id.
pub struct GetReportById {
    pub report_id: Uuid,
}

impl Query for GetReportById {
    type Output = Report;
}

/// Reports still waiting for admin verification, newest first. Covers both
/// geo and text-address reports.
pub struct ListPendingVerification {
    pub admin_id: Uuid,
}

impl Query for ListPendingVerification {
    type Output = Vec<Report>;
}

/// The work queue of the requesting officer's department: verified,
/// non-terminal reports ordered by priority. Reports with a pending
/// transfer are excluded so two departments never work the same item.
pub struct ListDepartmentQueue {
    pub officer_id: Uuid,
}

impl Query for ListDepartmentQueue {
    type Output = Vec<Report>;
}

/// Full transfer audit trail of one report.
pub struct ListTransfersForReport {
    pub report_id: Uuid,
}

impl Query for ListTransfersForReport {
    type Output = Vec<TransferLog>;
}

/// Transfer requests awaiting admin arbitration.
pub struct ListPendingTransfers {
    pub admin_id: Uuid,
}

impl Query for ListPendingTransfers {
    type Output = Vec<TransferLog>;
}

/// Geo reports within `radius_meters` of a point.
pub struct ListReportsNearby {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
}

impl Query for ListReportsNearby {
    type Output = Vec<Report>;
}

pub struct ListNotificationsForUser {
    pub user_id: Uuid,
}

impl Query for ListNotificationsForUser {
    type Output = Vec<Notification>;
}
