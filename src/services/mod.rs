pub mod audit_log_service;
pub mod context;
pub mod file_upload_service;
pub mod notification_service;
pub mod permission_service;
pub mod role_service;
pub mod tenant_service;
pub mod user_service;
pub mod views;

pub use context::ServiceContext;
