use uuid::Uuid;

use crate::{
    db::dao::{AuditLogDao, DaoBase, DaoLayerError, NewAuditLog, PaginatedResponse, UserDao},
    db::entities::audit_log,
    error::AppError,
    services::views::AuditLogView,
};

#[derive(Clone)]
pub struct AuditLogService {
    audit_log_dao: AuditLogDao,
    user_dao: UserDao,
}

impl AuditLogService {
    pub fn new(audit_log_dao: AuditLogDao, user_dao: UserDao) -> Self {
        Self {
            audit_log_dao,
            user_dao,
        }
    }

    pub async fn record(&self, entry: NewAuditLog) -> Result<audit_log::Model, AppError> {
        let model = self.audit_log_dao.record(entry).await?;
        tracing::debug!(
            user_id = %model.user_id,
            action = %model.action,
            "audit entry recorded"
        );
        Ok(model)
    }

    pub async fn list_for_user(
        &self,
        user_id: &Uuid,
        page: u64,
        page_size: u64,
    ) -> Result<PaginatedResponse<AuditLogView>, AppError> {
        let entries = self
            .audit_log_dao
            .list_for_user(user_id, page, page_size)
            .await?;
        if entries.data.is_empty() {
            return Ok(entries.map(|model| AuditLogView::new(model, None)));
        }
        let email = self.user_email(user_id).await?;
        Ok(entries.map(|model| AuditLogView::new(model, email.clone())))
    }

    pub async fn view(&self, model: audit_log::Model) -> Result<AuditLogView, AppError> {
        let email = self.user_email(&model.user_id).await?;
        Ok(AuditLogView::new(model, email))
    }

    async fn user_email(&self, user_id: &Uuid) -> Result<Option<String>, AppError> {
        match self.user_dao.find_by_id(*user_id).await {
            Ok(user) => Ok(Some(user.email)),
            Err(DaoLayerError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
