mod comment_on_report;
pub(crate) mod helpers;
mod mark_notification_read;
mod reply_to_comment;
mod request_transfer;
mod submit_report;
mod update_report_status;
mod verify_report;
mod verify_transfer;
mod vote_report;
mod warn_user;

pub use comment_on_report::CommentOnReportCommandHandler;
pub use mark_notification_read::MarkNotificationReadCommandHandler;
pub use reply_to_comment::ReplyToCommentCommandHandler;
pub use request_transfer::RequestTransferCommandHandler;
pub use submit_report::SubmitReportCommandHandler;
pub use update_report_status::UpdateReportStatusCommandHandler;
pub use verify_report::VerifyReportCommandHandler;
pub use verify_transfer::VerifyTransferCommandHandler;
pub use vote_report::VoteReportCommandHandler;
pub use warn_user::WarnUserCommandHandler;
