use chrono::Utc;
use uuid::Uuid;

use crate::{
    auth::password::{hash_password, verify_password},
    db::dao::{DaoBase, DaoLayerError, NewUser, RoleDao, UserDao},
    db::entities::user,
    error::AppError,
    services::views::UserView,
};

/// Input for [`UserService::create_user`]; the password is plain text.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub tenant_id: Uuid,
}

#[derive(Clone)]
pub struct UserService {
    user_dao: UserDao,
    role_dao: RoleDao,
}

impl UserService {
    pub fn new(user_dao: UserDao, role_dao: RoleDao) -> Self {
        Self { user_dao, role_dao }
    }

    pub async fn find_by_id(&self, id: &Uuid) -> Result<Option<user::Model>, AppError> {
        match self.user_dao.find_by_id(*id).await {
            Ok(model) => Ok(Some(model)),
            Err(DaoLayerError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, AppError> {
        Ok(self.user_dao.find_by_email(email).await?)
    }

    pub async fn create_user(&self, input: CreateUser) -> Result<user::Model, AppError> {
        let password_hash = hash_password(&input.password)?;
        let user = self
            .user_dao
            .create_user(NewUser {
                email: input.email,
                password_hash,
                first_name: input.first_name,
                last_name: input.last_name,
                phone: input.phone,
                tenant_id: input.tenant_id,
            })
            .await?;
        Ok(user)
    }

    pub fn check_password(&self, user: &user::Model, password: &str) -> Result<bool, AppError> {
        verify_password(password, &user.password_hash)
    }

    pub async fn set_password(&self, id: &Uuid, password: &str) -> Result<user::Model, AppError> {
        let hash = hash_password(password)?;
        Ok(self.user_dao.set_password_hash(id, &hash).await?)
    }

    pub async fn update_last_login(&self, id: &Uuid) -> Result<user::Model, AppError> {
        let now = Utc::now().fixed_offset();
        Ok(self.user_dao.set_last_login(id, &now).await?)
    }

    /// Returns `true` when a new link was created.
    pub async fn assign_role(&self, user_id: &Uuid, role_id: &Uuid) -> Result<bool, AppError> {
        Ok(self.user_dao.assign_role(user_id, role_id).await?)
    }

    pub async fn role_names(&self, user_id: &Uuid) -> Result<Vec<String>, AppError> {
        let ids = self.user_dao.role_ids(user_id).await?;
        let roles = self.role_dao.find_by_ids(&ids).await?;
        Ok(roles.into_iter().map(|role| role.name).collect())
    }

    pub async fn view(&self, model: user::Model) -> Result<UserView, AppError> {
        let roles = self.role_names(&model.id).await?;
        Ok(UserView::new(model, roles))
    }

    pub async fn deactivate(&self, id: &Uuid) -> Result<user::Model, AppError> {
        Ok(self.user_dao.soft_delete(*id).await?)
    }
}
