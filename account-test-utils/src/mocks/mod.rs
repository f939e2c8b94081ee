//! Mock collaborator implementations

mod audit;
mod call_log;
mod notification;
mod repository;

pub use audit::MockAuditService;
pub use call_log::CallLog;
pub use notification::MockNotificationService;
pub use repository::MockAccountRepository;
