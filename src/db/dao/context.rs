use sea_orm::DatabaseConnection;

use super::{
    AuditLogDao, DaoBase, FileUploadDao, NotificationDao, PermissionDao, RoleDao, TenantDao,
    UserDao,
};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn tenant(&self) -> TenantDao {
        DaoBase::new(&self.db)
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.db)
    }

    pub fn role(&self) -> RoleDao {
        DaoBase::new(&self.db)
    }

    pub fn permission(&self) -> PermissionDao {
        DaoBase::new(&self.db)
    }

    pub fn audit_log(&self) -> AuditLogDao {
        DaoBase::new(&self.db)
    }

    pub fn notification(&self) -> NotificationDao {
        DaoBase::new(&self.db)
    }

    pub fn file_upload(&self) -> FileUploadDao {
        DaoBase::new(&self.db)
    }
}
