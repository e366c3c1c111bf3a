mod notification_repository;
mod report_repository;
mod transfer_repository;
mod user_repository;

pub use notification_repository::NotificationRepository;
pub use report_repository::ReportRepository;
pub use transfer_repository::TransferRepository;
pub use user_repository::UserRepository;
