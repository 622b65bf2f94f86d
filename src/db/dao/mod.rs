pub mod audit_log_dao;
pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod file_upload_dao;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod notification_dao;
pub mod permission_dao;
pub mod role_dao;
pub mod tenant_dao;
pub mod user_dao;

pub use audit_log_dao::{AuditLogDao, NewAuditLog};
pub use base::{DaoBase, PaginatedResponse};
pub use base_traits::{
    HasCreatedAtColumn, HasIdActiveModel, HasIsActiveColumn, SoftDeleteActiveModel,
    TimestampedActiveModel,
};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use file_upload_dao::{FileUploadDao, NewFileUpload};
pub use notification_dao::NotificationDao;
pub use permission_dao::{NewPermission, PermissionDao};
pub use role_dao::RoleDao;
pub use tenant_dao::{NewTenant, TenantDao};
pub use user_dao::{NewUser, UserDao};
