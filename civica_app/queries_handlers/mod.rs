mod get_report_by_id;
mod list_department_queue;
mod list_notifications_for_user;
mod list_pending_transfers;
mod list_pending_verification;
mod list_reports_nearby;
mod list_transfers_for_report;

pub use get_report_by_id::GetReportByIdHandler;
pub use list_department_queue::ListDepartmentQueueHandler;
pub use list_notifications_for_user::ListNotificationsForUserHandler;
pub use list_pending_transfers::ListPendingTransfersHandler;
pub use list_pending_verification::ListPendingVerificationHandler;
pub use list_reports_nearby::ListReportsNearbyHandler;
pub use list_transfers_for_report::ListTransfersForReportHandler;
