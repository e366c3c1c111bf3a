mod notification_repository;
mod report_repository;
mod transfer_repository;
mod user_repository;

pub use notification_repository::PostgresNotificationRepository;
pub use report_repository::PostgresReportRepository;
pub use transfer_repository::PostgresTransferRepository;
pub use user_repository::PostgresUserRepository;
