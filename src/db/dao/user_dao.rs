use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::{
    prelude::{User, UserRole},
    user, user_role,
};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub tenant_id: Uuid,
}

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDao {
    type Entity = User;
    const ENTITY_NAME: &'static str = "User";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDao {
    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<user::Model>> {
        let email = email.to_string();
        self.find(1, 1, None, move |query| {
            query.filter(user::Column::Email.eq(email))
        })
        .await
        .map(|response| response.data.into_iter().next())
    }

    pub async fn create_user(&self, data: NewUser) -> DaoResult<user::Model> {
        let model = user::ActiveModel {
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            phone: Set(data.phone),
            last_login: Set(None),
            tenant_id: Set(data.tenant_id),
            is_active: Set(true),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn set_password_hash(&self, id: &Uuid, hash: &str) -> DaoResult<user::Model> {
        let hash = hash.to_string();
        self.update(*id, move |active| {
            active.password_hash = Set(hash);
        })
        .await
    }

    pub async fn set_last_login(
        &self,
        id: &Uuid,
        at: &chrono::DateTime<chrono::FixedOffset>,
    ) -> DaoResult<user::Model> {
        let at = *at;
        self.update(*id, move |active| {
            active.last_login = Set(Some(at));
        })
        .await
    }

    /// Links a role to the user. Returns `false` when the link already exists.
    pub async fn assign_role(&self, user_id: &Uuid, role_id: &Uuid) -> DaoResult<bool> {
        let existing = UserRole::find_by_id((*user_id, *role_id))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        user_role::ActiveModel {
            user_id: Set(*user_id),
            role_id: Set(*role_id),
            assigned_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&self.db)
        .await?;
        Ok(true)
    }

    pub async fn role_ids(&self, user_id: &Uuid) -> DaoResult<Vec<Uuid>> {
        let links = UserRole::find()
            .filter(user_role::Column::UserId.eq(*user_id))
            .order_by_asc(user_role::Column::AssignedAt)
            .all(&self.db)
            .await
            .map_err(DaoLayerError::Db)?;
        Ok(links.into_iter().map(|link| link.role_id).collect())
    }
}
