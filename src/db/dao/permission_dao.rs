use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};

use super::{DaoBase, DaoResult, PaginatedResponse};
use crate::db::entities::{permission, prelude::Permission};

#[derive(Debug, Clone, Default)]
pub struct NewPermission {
    pub name: String,
    pub description: Option<String>,
    pub module: Option<String>,
    pub action: Option<String>,
}

#[derive(Clone)]
pub struct PermissionDao {
    db: DatabaseConnection,
}

impl DaoBase for PermissionDao {
    type Entity = Permission;
    const ENTITY_NAME: &'static str = "Permission";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl PermissionDao {
    pub async fn create_permission(&self, data: NewPermission) -> DaoResult<permission::Model> {
        let model = permission::ActiveModel {
            name: Set(data.name),
            description: Set(data.description),
            module: Set(data.module),
            action: Set(data.action),
            is_active: Set(true),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn find_by_name(&self, name: &str) -> DaoResult<Option<permission::Model>> {
        let name = name.to_string();
        self.find(1, 1, None, move |query| {
            query.filter(permission::Column::Name.eq(name))
        })
        .await
        .map(|response| response.data.into_iter().next())
    }

    pub async fn list_by_module(
        &self,
        module: &str,
        page: u64,
        page_size: u64,
    ) -> DaoResult<PaginatedResponse<permission::Model>> {
        let module = module.to_string();
        self.find_active(page, page_size, move |query| {
            query.filter(permission::Column::Module.eq(module))
        })
        .await
    }
}
