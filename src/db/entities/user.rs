use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub last_login: Option<DateTimeWithTimeZone>,
    #[sea_orm(indexed)]
    pub tenant_id: Uuid,
    #[sea_orm(belongs_to, from = "tenant_id", to = "id")]
    pub tenant: HasOne<super::tenant::Entity>,
    #[sea_orm(has_many)]
    pub user_roles: HasMany<super::user_role::Entity>,
    #[sea_orm(has_many)]
    pub audit_logs: HasMany<super::audit_log::Entity>,
    #[sea_orm(has_many)]
    pub notifications: HasMany<super::notification::Entity>,
    #[sea_orm(has_many)]
    pub file_uploads: HasMany<super::file_upload::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
