use uuid::Uuid;

use crate::{
    db::dao::{DaoBase, DaoLayerError, NewTenant, TenantDao},
    db::entities::tenant,
    error::AppError,
    services::views::TenantView,
};

#[derive(Clone)]
pub struct TenantService {
    tenant_dao: TenantDao,
}

impl TenantService {
    pub fn new(tenant_dao: TenantDao) -> Self {
        Self { tenant_dao }
    }

    pub async fn create_tenant(&self, data: NewTenant) -> Result<tenant::Model, AppError> {
        Ok(self.tenant_dao.create_tenant(data).await?)
    }

    pub async fn find_by_id(&self, id: &Uuid) -> Result<Option<tenant::Model>, AppError> {
        match self.tenant_dao.find_by_id(*id).await {
            Ok(model) => Ok(Some(model)),
            Err(DaoLayerError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<tenant::Model>, AppError> {
        Ok(self.tenant_dao.find_by_slug(slug).await?)
    }

    pub async fn first(&self) -> Result<Option<tenant::Model>, AppError> {
        Ok(self.tenant_dao.first().await?)
    }

    pub async fn deactivate(&self, id: &Uuid) -> Result<tenant::Model, AppError> {
        Ok(self.tenant_dao.soft_delete(*id).await?)
    }

    pub fn view(&self, model: tenant::Model) -> TenantView {
        TenantView::from(model)
    }
}
