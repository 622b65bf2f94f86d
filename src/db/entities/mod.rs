#[allow(unused_imports)]
pub mod prelude {
    pub use super::audit_log::Entity as AuditLog;
    pub use super::file_upload::Entity as FileUpload;
    pub use super::notification::Entity as Notification;
    pub use super::permission::Entity as Permission;
    pub use super::role::Entity as Role;
    pub use super::tenant::Entity as Tenant;
    pub use super::user::Entity as User;
    pub use super::user_role::Entity as UserRole;
}

pub mod audit_log;
pub mod file_upload;
pub mod notification;
pub mod permission;
pub mod role;
pub mod tenant;
pub mod user;
pub mod user_role;
