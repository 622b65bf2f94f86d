use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{
        audit_log_service::AuditLogService, file_upload_service::FileUploadService,
        notification_service::NotificationService, permission_service::PermissionService,
        role_service::RoleService, tenant_service::TenantService, user_service::UserService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
    upload_folder: PathBuf,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection, upload_folder: impl Into<PathBuf>) -> Self {
        Self {
            daos: DaoContext::new(db),
            upload_folder: upload_folder.into(),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db, state.config.uploads.folder.clone())
    }

    pub fn tenant(&self) -> TenantService {
        TenantService::new(self.daos.tenant())
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.daos.user(), self.daos.role())
    }

    pub fn role(&self) -> RoleService {
        RoleService::new(self.daos.role())
    }

    pub fn permission(&self) -> PermissionService {
        PermissionService::new(self.daos.permission())
    }

    pub fn audit_log(&self) -> AuditLogService {
        AuditLogService::new(self.daos.audit_log(), self.daos.user())
    }

    pub fn notification(&self) -> NotificationService {
        NotificationService::new(self.daos.notification())
    }

    pub fn file_upload(&self) -> FileUploadService {
        FileUploadService::new(self.daos.file_upload(), self.upload_folder.clone())
    }
}
