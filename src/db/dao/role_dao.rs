use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::{prelude::Role, role};

#[derive(Clone)]
pub struct RoleDao {
    db: DatabaseConnection,
}

impl DaoBase for RoleDao {
    type Entity = Role;
    const ENTITY_NAME: &'static str = "Role";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl RoleDao {
    pub async fn create_role(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> DaoResult<role::Model> {
        let model = role::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.map(str::to_string)),
            is_active: Set(true),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn find_by_name(&self, name: &str) -> DaoResult<Option<role::Model>> {
        let name = name.to_string();
        self.find(1, 1, None, move |query| {
            query.filter(role::Column::Name.eq(name))
        })
        .await
        .map(|response| response.data.into_iter().next())
    }

    pub async fn find_by_ids(&self, ids: &[Uuid]) -> DaoResult<Vec<role::Model>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Role::find()
            .filter(role::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(role::Column::Name)
            .all(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }
}
