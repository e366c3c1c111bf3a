mod notifications;
mod reports;
mod transfers;
mod users;
mod views;

pub use notifications::{list_notifications, mark_notification_read};
pub use reports::{
    comment_on_report, get_report, list_department_queue, list_pending_verification,
    list_reports_nearby, reply_to_comment, submit_report, update_report_status, verify_report,
    vote_report,
};
pub use transfers::{
    list_pending_transfers, list_report_transfers, request_transfer, verify_transfer,
};
pub use users::warn_user;
pub use views::{NotificationView, ReportView, SlaView, TransferView};
