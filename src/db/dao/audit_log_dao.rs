use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult, PaginatedResponse};
use crate::db::entities::{audit_log, prelude::AuditLog};

#[derive(Debug, Clone, Default)]
pub struct NewAuditLog {
    pub user_id: Uuid,
    pub action: String,
    pub resource_type: Option<String>,
    pub resource_id: Option<Uuid>,
    pub description: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Clone)]
pub struct AuditLogDao {
    db: DatabaseConnection,
}

impl DaoBase for AuditLogDao {
    type Entity = AuditLog;
    const ENTITY_NAME: &'static str = "AuditLog";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl AuditLogDao {
    pub async fn record(&self, entry: NewAuditLog) -> DaoResult<audit_log::Model> {
        let model = audit_log::ActiveModel {
            user_id: Set(entry.user_id),
            action: Set(entry.action),
            resource_type: Set(entry.resource_type),
            resource_id: Set(entry.resource_id),
            description: Set(entry.description),
            ip_address: Set(entry.ip_address),
            user_agent: Set(entry.user_agent),
            is_active: Set(true),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn list_for_user(
        &self,
        user_id: &Uuid,
        page: u64,
        page_size: u64,
    ) -> DaoResult<PaginatedResponse<audit_log::Model>> {
        let user_id = *user_id;
        self.find(page, page_size, None, move |query| {
            query.filter(audit_log::Column::UserId.eq(user_id))
        })
        .await
    }
}
