use crate::{
    db::dao::{NewPermission, PaginatedResponse, PermissionDao},
    db::entities::permission,
    error::AppError,
    services::views::PermissionView,
};

#[derive(Clone)]
pub struct PermissionService {
    permission_dao: PermissionDao,
}

impl PermissionService {
    pub fn new(permission_dao: PermissionDao) -> Self {
        Self { permission_dao }
    }

    pub async fn create_permission(
        &self,
        data: NewPermission,
    ) -> Result<permission::Model, AppError> {
        Ok(self.permission_dao.create_permission(data).await?)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<permission::Model>, AppError> {
        Ok(self.permission_dao.find_by_name(name).await?)
    }

    pub async fn list_by_module(
        &self,
        module: &str,
        page: u64,
        page_size: u64,
    ) -> Result<PaginatedResponse<PermissionView>, AppError> {
        let page = self
            .permission_dao
            .list_by_module(module, page, page_size)
            .await?;
        Ok(page.map(PermissionView::from))
    }
}
