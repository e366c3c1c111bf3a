pub mod notification;
pub mod report;
pub mod transfer;
pub mod user;
